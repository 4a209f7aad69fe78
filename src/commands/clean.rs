//! Build artifact cleanup.
//!
//! - `cxm clean` - Remove the CMake build directory
//! - `cxm clean --all` - Also remove the generated CMakeLists.txt
//!
//! A build directory that is, or contains, the working directory or the
//! source directory is never removed.

use super::build::default_output;
use crate::config;
use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub fn clean(all: bool) -> Result<()> {
    let config = config::load_config()?;
    let mut cleaned = false;

    let build_dir = &config.toolchain.build_dir;
    if build_dir.exists() {
        let resolved = build_dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", build_dir.display()))?;

        let mut protected = vec![std::env::current_dir()?.canonicalize()?];
        if let Ok(source_dir) = config.toolchain.source_dir.canonicalize() {
            protected.push(source_dir);
        }
        if contains_any(&resolved, &protected) {
            bail!(
                "Refusing to remove {}: it contains the project sources. \
                 Set [toolchain] build_dir to a dedicated directory.",
                build_dir.display()
            );
        }

        fs::remove_dir_all(&resolved)
            .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
        println!("{} Removed {}", "🗑️".red(), build_dir.display());
        cleaned = true;
    }

    let generated = default_output(&config);
    if all && generated.exists() {
        fs::remove_file(&generated)
            .with_context(|| format!("Failed to remove {}", generated.display()))?;
        println!("{} Removed {}", "🗑️".red(), generated.display());
        cleaned = true;
    }

    if cleaned {
        println!("{} Clean complete.", "✓".green());
    } else {
        println!("{} Nothing to clean", "!".yellow());
    }
    Ok(())
}

/// True if `dir` is one of `paths` or an ancestor of any of them.
fn contains_any(dir: &Path, paths: &[PathBuf]) -> bool {
    paths.iter().any(|p| p.starts_with(dir))
}
