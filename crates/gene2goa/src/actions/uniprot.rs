//! UniProt lookup actions

/// Tagged actions for the gene id -> UniProt accession lookup
#[derive(Debug, Clone, PartialEq)]
pub enum UniprotAction {
    /// Lookup started for a gene id
    Request { id: String },
    /// Lookup resolved to an accession
    Success { id: String, uniprot_id: String },
    /// Lookup failed (transport error, bad status or no accession)
    Failure { error: String },
}

/// Fields a UniProt action writes into the slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniprotPatch {
    pub is_fetching: Option<bool>,
    pub id: Option<String>,
    pub uniprot_id: Option<String>,
    pub error: Option<String>,
}

impl UniprotAction {
    pub fn request(id: impl Into<String>) -> Self {
        Self::Request { id: id.into() }
    }

    pub fn success(id: impl Into<String>, uniprot_id: impl Into<String>) -> Self {
        Self::Success {
            id: id.into(),
            uniprot_id: uniprot_id.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request { .. } => "FETCH_UNIPROT_REQUEST",
            Self::Success { .. } => "FETCH_UNIPROT_SUCCESS",
            Self::Failure { .. } => "FETCH_UNIPROT_FAILURE",
        }
    }

    pub fn payload(&self) -> UniprotPatch {
        match self {
            Self::Request { id } => UniprotPatch {
                is_fetching: Some(true),
                id: Some(id.clone()),
                ..UniprotPatch::default()
            },
            Self::Success { id, uniprot_id } => UniprotPatch {
                is_fetching: Some(false),
                id: Some(id.clone()),
                uniprot_id: Some(uniprot_id.clone()),
                ..UniprotPatch::default()
            },
            Self::Failure { error } => UniprotPatch {
                is_fetching: Some(false),
                error: Some(error.clone()),
                ..UniprotPatch::default()
            },
        }
    }
}
