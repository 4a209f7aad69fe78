//! `cxm init` - write a starter `cxmake.toml`.

use crate::config::{MANIFEST_FILE, starter_manifest};
use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::Path;

pub fn init(name: Option<String>, compiler: &str) -> Result<()> {
    if Path::new(MANIFEST_FILE).exists() {
        bail!("{} already exists in this directory", MANIFEST_FILE);
    }

    let name = match name {
        Some(name) => name,
        None => {
            let current_dir = std::env::current_dir()?;
            current_dir
                .file_name()
                .map(|n| n.to_string_lossy().replace(' ', "_"))
                .unwrap_or_else(|| "app".to_string())
        }
    };

    let manifest =
        starter_manifest(&name, compiler).context("Failed to serialize starter manifest")?;
    fs::write(MANIFEST_FILE, manifest)
        .with_context(|| format!("Failed to write {}", MANIFEST_FILE))?;

    println!("{} Created {} for '{}'", "✓".green(), MANIFEST_FILE, name);
    println!("   Next: list your sources, then run {}", "cxm build".cyan());
    Ok(())
}
