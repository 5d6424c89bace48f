//! Client trait definition
//!
//! This module defines the `BioClient` trait that all client
//! implementations must satisfy.

use crate::error::ClientError;
use crate::types::{GoaResponse, Reply};
use async_trait::async_trait;

/// Gene / protein lookup client
///
/// Defines the interface for the two remote lookups. Implementations can
/// hit the real services or return scripted replies in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use goa_client::{BioClient, Reply};
///
/// async fn accession(client: &dyn BioClient, gene: &str) -> Option<String> {
///     match client.fetch_uniprot_list(gene).await.ok()? {
///         Reply::Ok(body) => Some(body.trim().to_string()),
///         Reply::NotOk { .. } => None,
///     }
/// }
/// ```
#[async_trait]
pub trait BioClient: Send + Sync {
    /// Look up UniProt accessions for a gene identifier
    ///
    /// # Arguments
    ///
    /// * `gene_id` - Gene name or identifier (e.g., "HBA1")
    ///
    /// # Returns
    ///
    /// The raw, untrimmed plain-text body on success. An empty body means
    /// the service knows no accession for the gene.
    async fn fetch_uniprot_list(&self, gene_id: &str) -> Result<Reply<String>, ClientError>;

    /// Search GO annotations for a gene product
    ///
    /// # Arguments
    ///
    /// * `uniprot_id` - UniProt accession used as `geneProductId`
    ///
    /// # Returns
    ///
    /// The decoded search response, or the HTTP status if the service
    /// did not answer with success.
    async fn fetch_annotations(&self, uniprot_id: &str)
        -> Result<Reply<GoaResponse>, ClientError>;
}
