//! Wiring shared by the binaries: config to client, config to store

use crate::middleware::{LoggingMiddleware, SaveMiddleware};
use crate::state::AppState;
use crate::store::Store;
use gene2goa_config::{AppConfig, LoadedConfig};
use goa_client::{ClientError, Endpoints, ReqwestClient};

pub fn endpoints(config: &AppConfig) -> Endpoints {
    Endpoints {
        uniprot_url: config.uniprot_base_url.clone(),
        quickgo_url: config.quickgo_base_url.clone(),
        annotation_limit: config.annotation_limit,
        include_fields: config.include_fields.clone(),
    }
}

/// Fails when a configured endpoint is not a usable URL
pub fn build_client(config: &AppConfig) -> Result<ReqwestClient, ClientError> {
    ReqwestClient::new(endpoints(config))
}

/// Store with the action logger attached
pub fn build_store() -> Store {
    let mut store = Store::new(AppState::default());
    store.add_middleware(LoggingMiddleware::new());
    store
}

/// Store with the save middleware configured from `config`
pub fn build_audited_store(config: &AppConfig) -> Store {
    let mut store = Store::new(AppState::default());
    store.add_middleware(SaveMiddleware::new(
        config.save_key.as_str(),
        config.save_namespace.as_str(),
    ));
    store
}

/// Load `.env`, then the config file
///
/// Call [`LoadedConfig::log`] once the logger is up.
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<LoadedConfig> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {}", e);
        }
    }
    AppConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_follow_config() {
        let config = AppConfig {
            uniprot_base_url: "http://localhost:1/uniprot".to_string(),
            annotation_limit: 7,
            ..AppConfig::default()
        };

        let endpoints = endpoints(&config);

        assert_eq!(endpoints.uniprot_url, "http://localhost:1/uniprot");
        assert_eq!(endpoints.quickgo_url, config.quickgo_base_url);
        assert_eq!(endpoints.annotation_limit, 7);
        assert_eq!(endpoints.include_fields, "goName");
    }

    #[test]
    fn test_default_config_matches_client_defaults() {
        assert_eq!(endpoints(&AppConfig::default()), Endpoints::default());
    }

    #[test]
    fn test_bad_endpoint_fails_client_setup() {
        let config = AppConfig {
            quickgo_base_url: "quickgo".to_string(),
            ..AppConfig::default()
        };

        assert!(matches!(
            build_client(&config),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
