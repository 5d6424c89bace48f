//! UniProt lookup state

use crate::actions::UniprotPatch;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniprotState {
    pub is_fetching: bool,
    /// Gene id of the most recent lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resolved accession
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniprot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UniprotState {
    /// Overwrite every field present in the patch
    pub fn merge(mut self, patch: UniprotPatch) -> Self {
        if let Some(is_fetching) = patch.is_fetching {
            self.is_fetching = is_fetching;
        }
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(uniprot_id) = patch.uniprot_id {
            self.uniprot_id = Some(uniprot_id);
        }
        if let Some(error) = patch.error {
            self.error = Some(error);
        }
        self
    }
}
