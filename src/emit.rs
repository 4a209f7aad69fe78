//! CMakeLists.txt generation.
//!
//! The output is a fixed, deterministic layout:
//!
//! ```text
//! cmake_minimum_required(VERSION 3.16)
//! project(<name>)
//! set(CMAKE_CXX_STANDARD <standard>)
//! set(CMAKE_CXX_COMPILER <compiler>)
//!
//! add_executable(<name> <file>)   # one line per source file
//! ```
//!
//! Values are written verbatim when CMake would read them back unchanged as an
//! unquoted argument, and as escaped quoted arguments otherwise. Target names
//! must already be plain identifiers.

use crate::error::EmitError;
use crate::project::ProjectDescriptor;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimum CMake version declared by the generated file.
pub const CMAKE_MINIMUM_VERSION: &str = "3.16";

/// Default file name for the generated configuration.
pub const DEFAULT_OUTPUT: &str = "CMakeLists.txt";

/// Render the descriptor into CMake source text.
pub fn render(project: &ProjectDescriptor) -> Result<String, EmitError> {
    validate_name(project.name())?;
    if project.compiler().is_empty() {
        return Err(EmitError::MissingCompiler(project.name().to_string()));
    }
    let compiler = cmake_argument("compiler", project.compiler())?;
    let name = project.name();

    let mut out = String::new();
    out.push_str(&format!(
        "cmake_minimum_required(VERSION {})\n",
        CMAKE_MINIMUM_VERSION
    ));
    out.push_str(&format!("project({})\n", name));
    out.push_str(&format!(
        "set(CMAKE_CXX_STANDARD {})\n",
        project.language_standard()
    ));
    out.push_str(&format!("set(CMAKE_CXX_COMPILER {})\n", compiler));
    out.push('\n');

    for file in project.source_files() {
        let file = cmake_argument("source file", file)?;
        out.push_str(&format!("add_executable({} {})\n", name, file));
    }

    Ok(out)
}

/// Render the descriptor and write it to `path`, replacing any existing file.
///
/// Nothing is written if the descriptor is rejected. A failed write may leave
/// a truncated file behind.
pub fn emit(project: &ProjectDescriptor, path: impl AsRef<Path>) -> Result<(), EmitError> {
    let path = path.as_ref();
    let content = render(project)?;

    let io_err = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    Ok(())
}

fn validate_name(name: &str) -> Result<(), EmitError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'));
    if valid {
        Ok(())
    } else {
        Err(EmitError::InvalidName(name.to_string()))
    }
}

/// Format a value as a single CMake argument.
fn cmake_argument(field: &'static str, value: &str) -> Result<String, EmitError> {
    if value.chars().any(char::is_control) {
        return Err(EmitError::InvalidValue {
            field,
            value: value.escape_debug().to_string(),
        });
    }

    // A leading '[' would open a bracket argument.
    let needs_quotes = value.is_empty()
        || value.starts_with('[')
        || value.chars().any(|c| {
            c.is_whitespace() || matches!(c, '(' | ')' | '"' | '#' | '\\' | '$' | ';')
        });
    if !needs_quotes {
        return Ok(value.to_string());
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Ok(quoted)
}
