//! Wire types returned by the remote services
//!
//! These mirror the QuickGO JSON shape. They are intentionally separate
//! from the normalized records the application keeps in its state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// 2xx response with its decoded body
    Ok(T),
    /// Any other status
    NotOk {
        status: u16,
        /// Canonical reason phrase, e.g. "Not Found"
        status_text: String,
    },
}

/// QuickGO annotation search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoaResponse {
    /// Total hits across all pages
    pub number_of_hits: u64,

    /// Annotations on this page
    pub results: Vec<GoaResult>,
}

/// A single annotation as returned by QuickGO
///
/// Fields are optional because QuickGO omits or nulls several of them
/// depending on the annotation source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoaResult {
    /// biological_process, molecular_function or cellular_component
    pub go_aspect: Option<String>,
    pub go_id: Option<String>,
    pub date: Option<String>,
    pub go_evidence: Option<String>,
    pub go_name: Option<String>,
    pub qualifier: Option<String>,
    pub reference: Option<String>,
    pub with_from: Value,
    pub extensions: Value,
    pub assigned_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_quickgo_page() {
        let json = r#"{
            "numberOfHits": 1,
            "results": [{
                "id": "UniProtKB:P69905!123",
                "geneProductId": "UniProtKB:P69905",
                "qualifier": "enables",
                "goId": "GO:0005344",
                "goName": "oxygen carrier activity",
                "goEvidence": "IDA",
                "goAspect": "molecular_function",
                "reference": "PMID:12345",
                "withFrom": null,
                "extensions": null,
                "assignedBy": "UniProt",
                "date": "20200131"
            }],
            "pageInfo": {"resultsPerPage": 100, "current": 1, "total": 1}
        }"#;

        let resp: GoaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.number_of_hits, 1);
        assert_eq!(resp.results.len(), 1);
        let hit = &resp.results[0];
        assert_eq!(hit.go_id.as_deref(), Some("GO:0005344"));
        assert_eq!(hit.go_aspect.as_deref(), Some("molecular_function"));
        assert_eq!(hit.assigned_by.as_deref(), Some("UniProt"));
        assert!(hit.with_from.is_null());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let resp: GoaResponse = serde_json::from_str(r#"{"numberOfHits": 0}"#).unwrap();
        assert_eq!(resp.number_of_hits, 0);
        assert!(resp.results.is_empty());
    }
}
