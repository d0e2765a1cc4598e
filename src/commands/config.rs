// src/commands/config.rs

//! Configuration file commands

use anyhow::{Context, Result};
use recipebox::Config;
use recipebox::config::default_config_path;
use std::path::PathBuf;

/// Print the effective configuration
pub fn cmd_config_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(path: Option<&str>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => default_config_path()
            .ok_or_else(|| anyhow::anyhow!("No config directory on this platform; pass --path"))?,
    };

    if path.exists() && !force {
        println!("Config file already exists at {}", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
