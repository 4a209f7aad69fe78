use super::build::default_output;
use crate::config;
use crate::runner::ToolchainRunner;
use anyhow::Result;
use colored::*;

pub fn info() -> Result<()> {
    let config = config::load_config()?;
    let output = default_output(&config);
    let project = &config.project;

    println!("{} {}", "📦".cyan(), project.name.bold());
    println!("   compiler:  {}", project.compiler);
    println!("   standard:  C++{}", project.standard);
    let profile = if project.profile.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        project.profile.clone()
    };
    println!("   profile:   {}", profile);
    println!("   sources:   {}", project.sources.len());
    for source in &project.sources {
        println!("     - {}", source);
    }
    println!("   output:    {}", output.display());

    let runner = ToolchainRunner::new(config.toolchain.clone());
    println!();
    println!("{} {}", "🔧".cyan(), "Toolchain".bold());
    println!("   configure: {}", runner.configure_invocation().command_line());
    println!(
        "   compile:   {} (in {})",
        runner.settings().make,
        runner.settings().build_dir.display()
    );
    Ok(())
}
