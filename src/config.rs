use crate::project::ProjectOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file read from the working directory.
pub const MANIFEST_FILE: &str = "cxmake.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CxmakeConfig {
    pub project: ProjectOptions,
    #[serde(default)]
    pub toolchain: ToolchainSettings,
}

/// External tools and directories used by the build.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ToolchainSettings {
    pub cmake: String,
    pub make: String,
    pub generator: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            cmake: "cmake".to_string(),
            make: "make".to_string(),
            generator: "Unix Makefiles".to_string(),
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "{} not found.\n\n💡 Tip: Run 'cxm init' to create one.",
        .0.display()
    )]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} - check for syntax errors: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load `cxmake.toml` from the current directory.
pub fn load_config() -> Result<CxmakeConfig, ConfigError> {
    load_config_from(Path::new(MANIFEST_FILE))
}

pub fn load_config_from(path: &Path) -> Result<CxmakeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Starter manifest written by `cxm init`.
pub fn starter_manifest(name: &str, compiler: &str) -> Result<String, toml::ser::Error> {
    let config = CxmakeConfig {
        project: ProjectOptions {
            name: name.to_string(),
            compiler: compiler.to_string(),
            profile: "debug".to_string(),
            sources: vec!["main.cpp".to_string()],
            ..Default::default()
        },
        toolchain: ToolchainSettings::default(),
    };
    toml::to_string_pretty(&config)
}
