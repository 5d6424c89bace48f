//! GO annotation lookup state

use crate::actions::GoaPatch;
use crate::normalize::NormalizedGoa;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoaState {
    pub is_fetching: bool,
    /// Accession of the most recent lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goa: Option<NormalizedGoa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GoaState {
    /// Overwrite every field present in the patch
    pub fn merge(mut self, patch: GoaPatch) -> Self {
        if let Some(is_fetching) = patch.is_fetching {
            self.is_fetching = is_fetching;
        }
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(goa) = patch.goa {
            self.goa = Some(goa);
        }
        if let Some(error) = patch.error {
            self.error = Some(error);
        }
        self
    }

    /// Number of normalized annotations currently held
    pub fn annotation_count(&self) -> usize {
        self.goa.as_ref().map_or(0, |goa| goa.data.len())
    }
}
