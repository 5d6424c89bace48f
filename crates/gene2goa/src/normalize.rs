//! QuickGO response normalization
//!
//! Turns the raw annotation search response into the record shape kept in
//! the `goa` slice. One raw result maps to exactly one record, in order.

use goa_client::{GoaResponse, GoaResult};
use serde::Serialize;
use serde_json::Value;

/// Normalized annotation list stored in state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedGoa {
    pub data: Vec<GoaRecord>,
}

/// One GO annotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoaRecord {
    /// GO aspect, e.g. "molecular_function"
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// GO term id, e.g. "GO:0005344"
    #[serde(rename = "id")]
    pub external_id: Option<String>,
    pub attributes: GoaAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoaAttributes {
    pub date: Option<String>,
    pub evidence_code: Option<String>,
    #[serde(rename = "goterm")]
    pub term: Option<String>,
    pub qualifier: Option<String>,
    pub publication: Option<String>,
    #[serde(rename = "with")]
    pub with_from: Value,
    pub extensions: Value,
    pub assigned_by: Option<String>,
}

/// Normalize a QuickGO response
///
/// A response reporting zero hits yields an empty list, whatever its
/// `results` array holds.
pub fn normalize_goa(response: &GoaResponse) -> NormalizedGoa {
    if response.number_of_hits == 0 {
        return NormalizedGoa::default();
    }

    NormalizedGoa {
        data: response.results.iter().map(normalize_result).collect(),
    }
}

fn normalize_result(result: &GoaResult) -> GoaRecord {
    GoaRecord {
        category: result.go_aspect.clone(),
        external_id: result.go_id.clone(),
        attributes: GoaAttributes {
            date: result.date.clone(),
            evidence_code: result.go_evidence.clone(),
            term: result.go_name.clone(),
            qualifier: result.qualifier.clone(),
            publication: result.reference.clone(),
            with_from: result.with_from.clone(),
            extensions: result.extensions.clone(),
            assigned_by: result.assigned_by.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(go_id: &str, aspect: &str) -> GoaResult {
        GoaResult {
            go_aspect: Some(aspect.to_string()),
            go_id: Some(go_id.to_string()),
            date: Some("20200131".to_string()),
            go_evidence: Some("IDA".to_string()),
            go_name: Some(format!("term for {}", go_id)),
            qualifier: Some("enables".to_string()),
            reference: Some("PMID:12345".to_string()),
            with_from: json!([{"connectedXrefs": [{"db": "UniProtKB", "id": "P68871"}]}]),
            extensions: Value::Null,
            assigned_by: Some("UniProt".to_string()),
        }
    }

    #[test]
    fn test_zero_hits_is_empty() {
        let response = GoaResponse {
            number_of_hits: 0,
            results: vec![],
        };
        assert!(normalize_goa(&response).data.is_empty());
    }

    #[test]
    fn test_zero_hits_ignores_stray_results() {
        let response = GoaResponse {
            number_of_hits: 0,
            results: vec![hit("GO:0005344", "molecular_function")],
        };
        assert!(normalize_goa(&response).data.is_empty());
    }

    #[test]
    fn test_order_and_field_mapping() {
        let response = GoaResponse {
            number_of_hits: 3,
            results: vec![
                hit("GO:0005344", "molecular_function"),
                hit("GO:0015671", "biological_process"),
                hit("GO:0005833", "cellular_component"),
            ],
        };

        let normalized = normalize_goa(&response);

        assert_eq!(normalized.data.len(), 3);
        for (record, raw) in normalized.data.iter().zip(&response.results) {
            assert_eq!(record.category, raw.go_aspect);
            assert_eq!(record.external_id, raw.go_id);
            assert_eq!(record.attributes.date, raw.date);
            assert_eq!(record.attributes.evidence_code, raw.go_evidence);
            assert_eq!(record.attributes.term, raw.go_name);
            assert_eq!(record.attributes.qualifier, raw.qualifier);
            assert_eq!(record.attributes.publication, raw.reference);
            assert_eq!(record.attributes.with_from, raw.with_from);
            assert_eq!(record.attributes.extensions, raw.extensions);
            assert_eq!(record.attributes.assigned_by, raw.assigned_by);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let response = GoaResponse {
            number_of_hits: 1,
            results: vec![hit("GO:0005344", "molecular_function")],
        };

        let value = serde_json::to_value(normalize_goa(&response)).unwrap();
        let record = &value["data"][0];

        assert_eq!(record["type"], "molecular_function");
        assert_eq!(record["id"], "GO:0005344");
        assert_eq!(record["attributes"]["goterm"], "term for GO:0005344");
        assert_eq!(record["attributes"]["evidence_code"], "IDA");
        assert_eq!(record["attributes"]["assigned_by"], "UniProt");
        assert!(record["attributes"]["with"].is_array());
        assert!(record["attributes"]["extensions"].is_null());
    }
}
