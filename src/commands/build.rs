//! `cxm generate` and `cxm build`.

use crate::config::{self, CxmakeConfig};
use crate::emit::{self, DEFAULT_OUTPUT};
use crate::project::ProjectDescriptor;
use crate::runner::ToolchainRunner;
use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where the CMakeLists.txt goes when `--output` is not given.
pub fn default_output(config: &CxmakeConfig) -> PathBuf {
    config.toolchain.source_dir.join(DEFAULT_OUTPUT)
}

fn write_cmake(project: &ProjectDescriptor, output: &Path) -> Result<()> {
    emit::emit(project, output)
        .with_context(|| format!("Failed to generate {}", output.display()))?;
    println!(
        "{} Generated {} ({} source file{})",
        "✓".green(),
        output.display(),
        project.source_files().len(),
        if project.source_files().len() == 1 { "" } else { "s" }
    );
    Ok(())
}

pub fn generate(output: Option<PathBuf>) -> Result<PathBuf> {
    let config = config::load_config()?;
    let output = output.unwrap_or_else(|| default_output(&config));
    let project = ProjectDescriptor::new(config.project);

    write_cmake(&project, &output)?;
    Ok(output)
}

pub fn build(profile: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let start_time = Instant::now();
    let config = config::load_config()?;
    let output = output.unwrap_or_else(|| default_output(&config));

    let mut options = config.project;
    if let Some(profile) = profile {
        options.profile = profile;
    }
    let project = ProjectDescriptor::new(options);

    write_cmake(&project, &output)?;

    if project.source_files().is_empty() {
        println!(
            "{} No source files listed; CMake will likely reject the target.",
            "!".yellow()
        );
    }

    let mut runner = ToolchainRunner::new(config.toolchain);

    let configure = runner.configure_invocation();
    println!("{} Configuring: {}", "⚙".cyan(), configure.command_line().dimmed());
    runner.configure().context("CMake configuration failed")?;

    let compile = runner.compile_invocation(&project)?;
    println!(
        "{} Compiling '{}': {}",
        "🔨".cyan(),
        project.name(),
        compile.command_line().dimmed()
    );
    runner.compile(&project).context("Compilation failed")?;

    println!(
        "{} Build finished in {:.2?}",
        "✓".green(),
        start_time.elapsed()
    );
    Ok(())
}
