//! Error types for emitting and running a project.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from rendering or writing the generated CMakeLists.txt.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid target name '{0}': use only letters, digits, '_', '.', '+' or '-'")]
    InvalidName(String),

    #[error("No compiler set for project '{0}'")]
    MissingCompiler(String),

    #[error("Invalid {field} '{value}': control characters cannot be written to CMake")]
    InvalidValue { field: &'static str, value: String },
}

/// The two external steps of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configure,
    Compile,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Configure => write!(f, "configure"),
            Phase::Compile => write!(f, "compile"),
        }
    }
}

/// Why a child process did not succeed.
#[derive(Debug, Error)]
pub enum ProcessFailure {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `None` when the process was terminated by a signal.
    #[error("'{program}' exited with {}", describe_exit(.code))]
    ExitStatus { program: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Errors from running the toolchain.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to format compile argument for profile '{profile}'")]
    Format {
        profile: String,
        #[source]
        source: std::fmt::Error,
    },

    #[error("{phase} phase failed: {source}")]
    Process {
        phase: Phase,
        #[source]
        source: ProcessFailure,
    },
}

impl RunError {
    /// The phase that failed. Formatting errors belong to the compile phase.
    pub fn phase(&self) -> Phase {
        match self {
            RunError::Format { .. } => Phase::Compile,
            RunError::Process { phase, .. } => *phase,
        }
    }
}
