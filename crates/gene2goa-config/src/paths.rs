//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gene2goa/`
//! - macOS: `~/Library/Application Support/gene2goa/`
//! - Windows: `%APPDATA%\gene2goa\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gene2goa";

/// Get the application config directory
///
/// Unlike a cache directory this is only read from, so it is not created.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
