//! GO annotation lookup actions

use crate::normalize::{normalize_goa, NormalizedGoa};
use goa_client::GoaResponse;

/// Tagged actions for the UniProt accession -> GO annotation lookup
#[derive(Debug, Clone, PartialEq)]
pub enum GoaAction {
    /// Lookup started for an accession
    Request { id: String },
    /// Annotations loaded and normalized
    Success { goa: NormalizedGoa },
    /// Lookup failed
    Failure { error: String },
}

/// Fields a GOA action writes into the slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoaPatch {
    pub is_fetching: Option<bool>,
    pub id: Option<String>,
    pub goa: Option<NormalizedGoa>,
    pub error: Option<String>,
}

impl GoaAction {
    pub fn request(id: impl Into<String>) -> Self {
        Self::Request { id: id.into() }
    }

    /// Normalize a raw QuickGO response into a success action
    pub fn success(response: &GoaResponse) -> Self {
        Self::Success {
            goa: normalize_goa(response),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request { .. } => "FETCH_GOA_REQUEST",
            Self::Success { .. } => "FETCH_GOA_SUCCESS",
            Self::Failure { .. } => "FETCH_GOA_FAILURE",
        }
    }

    pub fn payload(&self) -> GoaPatch {
        match self {
            Self::Request { id } => GoaPatch {
                is_fetching: Some(true),
                id: Some(id.clone()),
                ..GoaPatch::default()
            },
            Self::Success { goa } => GoaPatch {
                is_fetching: Some(false),
                goa: Some(goa.clone()),
                ..GoaPatch::default()
            },
            Self::Failure { error } => GoaPatch {
                is_fetching: Some(false),
                error: Some(error.clone()),
                ..GoaPatch::default()
            },
        }
    }
}
