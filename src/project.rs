//! Project model for a single C++ executable target.
//!
//! A [`ProjectDescriptor`] is immutable once constructed. It is built either in
//! one step from [`ProjectOptions`] (which is also the `[project]` table of
//! `cxmake.toml`) or incrementally through a [`ProjectBuilder`].
//!
//! ```rust
//! use cxmake::project::ProjectBuilder;
//!
//! let project = ProjectBuilder::new()
//!     .project("demo", "g++")
//!     .config("release")
//!     .files(["main.cpp", "util.cpp"])
//!     .build();
//!
//! assert_eq!(project.source_files(), ["main.cpp", "util.cpp"]);
//! ```

use serde::{Deserialize, Serialize};

/// Language standard emitted when none is configured.
pub const DEFAULT_CXX_STANDARD: u32 = 17;

fn default_standard() -> u32 {
    DEFAULT_CXX_STANDARD
}

/// Every field of a project, as written in the `[project]` manifest table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub name: String,
    pub compiler: String,
    #[serde(default = "default_standard")]
    pub standard: u32,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            compiler: String::new(),
            standard: DEFAULT_CXX_STANDARD,
            profile: String::new(),
            sources: Vec::new(),
        }
    }
}

/// The facts needed to build one executable target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    compiler: String,
    language_standard: u32,
    profile: String,
    source_files: Vec<String>,
}

impl ProjectDescriptor {
    pub fn new(options: ProjectOptions) -> Self {
        Self {
            name: options.name,
            compiler: options.compiler,
            language_standard: options.standard,
            profile: options.profile,
            source_files: options.sources,
        }
    }

    /// Target name, also used as the artifact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn language_standard(&self) -> u32 {
        self.language_standard
    }

    /// Build profile forwarded to the compile phase.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }
}

/// Write-only accumulator for a [`ProjectDescriptor`].
///
/// Setters overwrite, [`files`](ProjectBuilder::files) appends. Nothing is
/// validated until the descriptor is emitted.
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    options: ProjectOptions,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&mut self, name: impl Into<String>, compiler: impl Into<String>) -> &mut Self {
        self.options.name = name.into();
        self.options.compiler = compiler.into();
        self
    }

    pub fn cpp_standard(&mut self, standard: u32) -> &mut Self {
        self.options.standard = standard;
        self
    }

    pub fn config(&mut self, profile: impl Into<String>) -> &mut Self {
        self.options.profile = profile.into();
        self
    }

    pub fn files<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> ProjectDescriptor {
        ProjectDescriptor::new(self.options.clone())
    }
}
