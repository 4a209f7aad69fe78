//! Toolchain invocation.
//!
//! A build is two blocking child processes run one after another:
//!
//! 1. configure: `cmake -S <source_dir> -B <build_dir> -G <generator>`
//! 2. compile: `make config=<profile>`, run inside `<build_dir>`
//!
//! Both inherit the terminal's stdin/stdout/stderr. The compile step is never
//! started unless configure succeeded, and nothing is rolled back on failure.
//!
//! Process execution goes through [`ProcessExecutor`] so the sequencing can be
//! exercised without a real toolchain.

use crate::config::ToolchainSettings;
use crate::error::{Phase, ProcessFailure, RunError};
use crate::project::ProjectDescriptor;
use std::fmt::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` runs in the caller's directory.
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Shell-like rendering for display.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(char::is_whitespace) {
                line.push_str(&format!("\"{}\"", arg));
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Runs a command to completion.
pub trait ProcessExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<(), ProcessFailure>;
}

/// Spawns real processes attached to the current terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<(), ProcessFailure> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| ProcessFailure::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ProcessFailure::ExitStatus {
                program: invocation.program.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Build the `config=<profile>` argument for the compile step.
pub fn config_argument(profile: &str) -> Result<String, std::fmt::Error> {
    let mut arg = String::with_capacity("config=".len() + profile.len());
    write!(arg, "config={}", profile)?;
    Ok(arg)
}

/// Drives the configure and compile phases for a project.
#[derive(Debug)]
pub struct ToolchainRunner<E = SystemExecutor> {
    settings: ToolchainSettings,
    executor: E,
}

impl ToolchainRunner<SystemExecutor> {
    pub fn new(settings: ToolchainSettings) -> Self {
        Self::with_executor(settings, SystemExecutor)
    }
}

impl<E: ProcessExecutor> ToolchainRunner<E> {
    pub fn with_executor(settings: ToolchainSettings, executor: E) -> Self {
        Self { settings, executor }
    }

    pub fn settings(&self) -> &ToolchainSettings {
        &self.settings
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn configure_invocation(&self) -> Invocation {
        let s = &self.settings;
        Invocation {
            program: s.cmake.clone(),
            args: vec![
                "-S".to_string(),
                s.source_dir.to_string_lossy().to_string(),
                "-B".to_string(),
                s.build_dir.to_string_lossy().to_string(),
                "-G".to_string(),
                s.generator.clone(),
            ],
            current_dir: None,
        }
    }

    pub fn compile_invocation(&self, project: &ProjectDescriptor) -> Result<Invocation, RunError> {
        let arg = config_argument(project.profile()).map_err(|source| RunError::Format {
            profile: project.profile().to_string(),
            source,
        })?;
        Ok(Invocation {
            program: self.settings.make.clone(),
            args: vec![arg],
            current_dir: Some(self.settings.build_dir.clone()),
        })
    }

    /// Run the configure phase only.
    pub fn configure(&mut self) -> Result<(), RunError> {
        let invocation = self.configure_invocation();
        self.execute(Phase::Configure, &invocation)
    }

    /// Run the compile phase only. Assumes configure already succeeded.
    pub fn compile(&mut self, project: &ProjectDescriptor) -> Result<(), RunError> {
        let invocation = self.compile_invocation(project)?;
        self.execute(Phase::Compile, &invocation)
    }

    /// Configure, then compile. Stops at the first failure.
    pub fn run(&mut self, project: &ProjectDescriptor) -> Result<(), RunError> {
        self.configure()?;
        self.compile(project)
    }

    fn execute(&mut self, phase: Phase, invocation: &Invocation) -> Result<(), RunError> {
        self.executor
            .execute(invocation)
            .map_err(|source| RunError::Process { phase, source })
    }
}
