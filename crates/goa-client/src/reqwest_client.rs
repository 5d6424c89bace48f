//! reqwest-based client
//!
//! Direct implementation of the `BioClient` trait. One attempt per call,
//! no retries and no timeouts beyond reqwest's defaults.

use crate::client::BioClient;
use crate::error::ClientError;
use crate::types::{GoaResponse, Reply};
use crate::{
    DEFAULT_ANNOTATION_LIMIT, DEFAULT_INCLUDE_FIELDS, DEFAULT_QUICKGO_URL, DEFAULT_UNIPROT_URL,
};
use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, Url};

/// Service locations and query knobs
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub uniprot_url: String,
    pub quickgo_url: String,
    pub annotation_limit: u32,
    pub include_fields: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            quickgo_url: DEFAULT_QUICKGO_URL.to_string(),
            annotation_limit: DEFAULT_ANNOTATION_LIMIT,
            include_fields: DEFAULT_INCLUDE_FIELDS.to_string(),
        }
    }
}

/// Direct HTTP client for UniProt and QuickGO
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
    uniprot_url: Url,
    quickgo_url: Url,
    annotation_limit: u32,
    include_fields: String,
}

impl ReqwestClient {
    /// Build a client for `endpoints`
    ///
    /// Both base URLs are parsed up front, so a misconfigured endpoint is
    /// reported here rather than on the first lookup.
    pub fn new(endpoints: Endpoints) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            uniprot_url: parse_url(&endpoints.uniprot_url)?,
            quickgo_url: parse_url(&endpoints.quickgo_url)?,
            annotation_limit: endpoints.annotation_limit,
            include_fields: endpoints.include_fields,
        })
    }
}

#[async_trait]
impl BioClient for ReqwestClient {
    async fn fetch_uniprot_list(&self, gene_id: &str) -> Result<Reply<String>, ClientError> {
        debug!("Fetching UniProt accessions for gene {}", gene_id);

        let query = format!("gene:{}", gene_id);
        let response = self
            .http
            .get(self.uniprot_url.clone())
            .query(&[
                ("query", query.as_str()),
                ("fields", "accession"),
                ("format", "list"),
            ])
            .send()
            .await?;

        if let Some(reply) = not_ok(&response) {
            return Ok(reply);
        }

        let body = response.text().await?;
        debug!("UniProt answered {} bytes for gene {}", body.len(), gene_id);
        Ok(Reply::Ok(body))
    }

    async fn fetch_annotations(
        &self,
        uniprot_id: &str,
    ) -> Result<Reply<GoaResponse>, ClientError> {
        debug!("Fetching GO annotations for {}", uniprot_id);

        let limit = self.annotation_limit.to_string();
        let response = self
            .http
            .get(self.quickgo_url.clone())
            .header(ACCEPT, "application/json")
            .query(&[
                ("includeFields", self.include_fields.as_str()),
                ("limit", limit.as_str()),
                ("geneProductId", uniprot_id),
            ])
            .send()
            .await?;

        if let Some(reply) = not_ok(&response) {
            return Ok(reply);
        }

        let body = response.text().await?;
        let goa: GoaResponse = serde_json::from_str(&body)?;
        debug!(
            "QuickGO reported {} hits for {}",
            goa.number_of_hits, uniprot_id
        );
        Ok(Reply::Ok(goa))
    }
}

fn parse_url(url: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ClientError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

/// Map a non-success response to `Reply::NotOk`
fn not_ok<T>(response: &Response) -> Option<Reply<T>> {
    let status = response.status();
    if status.is_success() {
        return None;
    }

    debug!("Request to {} failed with {}", response.url(), status);
    Some(Reply::NotOk {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .unwrap_or(status.as_str())
            .to_string(),
    })
}
