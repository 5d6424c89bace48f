//! Application configuration
//!
//! Configuration loaded from .gene2goa.toml, with environment overrides.

use anyhow::{Context, Result};
use goa_client::{
    DEFAULT_ANNOTATION_LIMIT, DEFAULT_INCLUDE_FIELDS, DEFAULT_QUICKGO_URL, DEFAULT_UNIPROT_URL,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding `uniprot_base_url`
pub const UNIPROT_URL_ENV: &str = "GENE2GOA_UNIPROT_URL";

/// Environment variable overriding `quickgo_base_url`
pub const QUICKGO_URL_ENV: &str = "GENE2GOA_QUICKGO_URL";

/// Application configuration loaded from .gene2goa.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// UniProtKB search endpoint used to resolve gene ids
    #[serde(default = "default_uniprot_base_url")]
    pub uniprot_base_url: String,

    /// QuickGO annotation search endpoint
    #[serde(default = "default_quickgo_base_url")]
    pub quickgo_base_url: String,

    /// Maximum annotations requested from QuickGO
    #[serde(default = "default_annotation_limit")]
    pub annotation_limit: u32,

    /// Value of QuickGO's `includeFields` parameter
    #[serde(default = "default_include_fields")]
    pub include_fields: String,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Key reported by the save middleware
    #[serde(default = "default_save_key")]
    pub save_key: String,

    /// Namespace reported by the save middleware
    #[serde(default = "default_save_namespace")]
    pub save_namespace: String,
}

fn default_uniprot_base_url() -> String {
    DEFAULT_UNIPROT_URL.to_string()
}

fn default_quickgo_base_url() -> String {
    DEFAULT_QUICKGO_URL.to_string()
}

fn default_annotation_limit() -> u32 {
    DEFAULT_ANNOTATION_LIMIT
}

fn default_include_fields() -> String {
    DEFAULT_INCLUDE_FIELDS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_save_key() -> String {
    "user".to_string()
}

fn default_save_namespace() -> String {
    "user".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            uniprot_base_url: default_uniprot_base_url(),
            quickgo_base_url: default_quickgo_base_url(),
            annotation_limit: default_annotation_limit(),
            include_fields: default_include_fields(),
            log_level: default_log_level(),
            save_key: default_save_key(),
            save_namespace: default_save_namespace(),
        }
    }
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    /// An explicit path was given but no file exists there
    Missing(PathBuf),
    Defaults,
}

/// Result of [`AppConfig::load`]
///
/// Loading happens before the logger is set up, so the outcome is kept
/// here and reported with [`LoadedConfig::log`] afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
    /// Environment variables that replaced a configured value
    pub env_overrides: Vec<&'static str>,
}

impl LoadedConfig {
    pub fn log(&self) {
        match &self.source {
            ConfigSource::File(path) => {
                log::info!("Loaded app config from {}", path.display())
            }
            ConfigSource::Missing(path) => {
                log::warn!("Config file {} not found, using defaults", path.display())
            }
            ConfigSource::Defaults => log::debug!("Using default app config"),
        }
        for var in &self.env_overrides {
            log::debug!("{} overrides configured endpoint", var);
        }
    }
}

impl AppConfig {
    /// Load config from the given path, or discover one, or use defaults
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    /// Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
        let (mut config, source) = match crate::load_config_file(explicit)? {
            Some(file) => {
                let config: AppConfig = toml::from_str(&file.content).with_context(|| {
                    format!("Failed to parse gene2goa config {}", file.path.display())
                })?;
                (config, ConfigSource::File(file.path))
            }
            None => match explicit {
                Some(path) => (Self::default(), ConfigSource::Missing(path.to_path_buf())),
                None => (Self::default(), ConfigSource::Defaults),
            },
        };

        let env_overrides = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            source,
            env_overrides,
        })
    }

    /// Override endpoints from GENE2GOA_* environment variables
    ///
    /// Returns the names of the variables that were applied.
    pub fn apply_env_overrides(&mut self) -> Vec<&'static str> {
        let mut applied = Vec::new();
        if let Ok(url) = env::var(UNIPROT_URL_ENV) {
            self.uniprot_base_url = url;
            applied.push(UNIPROT_URL_ENV);
        }
        if let Ok(url) = env::var(QUICKGO_URL_ENV) {
            self.quickgo_base_url = url;
            applied.push(QUICKGO_URL_ENV);
        }
        applied
    }
}
