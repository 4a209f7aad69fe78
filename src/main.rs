//! # cxmake CLI Entry Point
//!
//! Parses CLI arguments with clap and routes commands to the handlers in
//! [`cxmake::commands`].

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use cxmake::commands;

#[derive(Parser)]
#[command(name = "cxm")]
#[command(about = "Generate CMakeLists.txt for a C++ executable and build it", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter cxmake.toml in the current directory
    Init {
        /// Project name (defaults to the directory name)
        name: Option<String>,
        /// Compiler written into the manifest
        #[arg(long, default_value = "g++")]
        compiler: String,
    },
    /// Write CMakeLists.txt from cxmake.toml
    Generate {
        /// Output path (default: <source_dir>/CMakeLists.txt)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate, configure with CMake, and compile
    Build {
        /// Profile passed to make as config=<profile> (overrides cxmake.toml)
        #[arg(long)]
        profile: Option<String>,
        /// Output path for CMakeLists.txt
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Remove the build directory
    Clean {
        /// Also remove the generated CMakeLists.txt
        #[arg(long)]
        all: bool,
    },
    /// Show the resolved project and toolchain
    Info,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { name, compiler }) => commands::init(name, &compiler),
        Some(Commands::Generate { output }) => commands::generate(output).map(|_| ()),
        Some(Commands::Build { profile, output }) => commands::build(profile, output),
        Some(Commands::Clean { all }) => commands::clean(all),
        Some(Commands::Info) => commands::info(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}
