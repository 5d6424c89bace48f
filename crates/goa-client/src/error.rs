//! Client error type

use thiserror::Error;

/// Errors raised while talking to UniProt or QuickGO
///
/// HTTP status failures are not represented here; see [`crate::Reply`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid annotation response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
