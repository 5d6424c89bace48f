//! Configuration and file management for gene2goa
//!
//! This crate provides:
//! - File path utilities for config files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, ConfigSource, LoadedConfig};
pub use config_file::{load_config_file, ConfigFile, CONFIG_FILE};
pub use paths::{app_config_path, config_dir};
