//! Asynchronous action creators
//!
//! Each orchestrator dispatches a request action, performs one network
//! call, and dispatches a success or failure action. Errors never escape:
//! they end up in state as failure actions.
//!
//! ```text
//! fetch_annotations_for_gene(gene)
//!   ├─ fetch_uniprot_id(gene)      FETCH_UNIPROT_{REQUEST,SUCCESS,FAILURE}
//!   └─ fetch_goa(accession)        FETCH_GOA_{REQUEST,SUCCESS,FAILURE}
//!        only when an accession was resolved
//! ```

use crate::actions::{GoaAction, UniprotAction};
use crate::store::Store;
use goa_client::{BioClient, ClientError, GoaResponse, Reply};
use log::{debug, info, warn};
use thiserror::Error;

/// Why a lookup stage did not produce a result
///
/// The display text is what ends up in the slice's `error` field.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The service answered fine but knows no accession for the gene
    #[error("no uniprot id for {0}")]
    NoUniprotId(String),

    /// Non-success HTTP status; carries the reason phrase
    #[error("{0}")]
    Status(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Resolve a gene id to a UniProt accession, recording progress in the store
///
/// Returns the accession on success so callers can chain without reading
/// the store back.
pub async fn fetch_uniprot_id(
    store: &Store,
    client: &dyn BioClient,
    gene_id: &str,
) -> Option<String> {
    store.dispatch(UniprotAction::request(gene_id));

    match resolve_uniprot_id(client, gene_id).await {
        Ok(uniprot_id) => {
            info!("Resolved gene {} to {}", gene_id, uniprot_id);
            store.dispatch(UniprotAction::success(gene_id, uniprot_id.as_str()));
            Some(uniprot_id)
        }
        Err(err) => {
            warn!("UniProt lookup for {} failed: {}", gene_id, err);
            store.dispatch(UniprotAction::failure(err.to_string()));
            None
        }
    }
}

async fn resolve_uniprot_id(client: &dyn BioClient, gene_id: &str) -> Result<String, FetchError> {
    match client.fetch_uniprot_list(gene_id).await? {
        Reply::Ok(body) => {
            let uniprot_id = body.trim();
            if uniprot_id.is_empty() {
                Err(FetchError::NoUniprotId(gene_id.to_string()))
            } else {
                Ok(uniprot_id.to_string())
            }
        }
        Reply::NotOk { status_text, .. } => Err(FetchError::Status(status_text)),
    }
}

/// Fetch and normalize GO annotations for an accession
pub async fn fetch_goa(store: &Store, client: &dyn BioClient, uniprot_id: &str) {
    store.dispatch(GoaAction::request(uniprot_id));

    match load_annotations(client, uniprot_id).await {
        Ok(response) => {
            info!(
                "Loaded {} GO annotations for {}",
                response.number_of_hits, uniprot_id
            );
            store.dispatch(GoaAction::success(&response));
        }
        Err(err) => {
            warn!("QuickGO lookup for {} failed: {}", uniprot_id, err);
            store.dispatch(GoaAction::failure(err.to_string()));
        }
    }
}

async fn load_annotations(
    client: &dyn BioClient,
    uniprot_id: &str,
) -> Result<GoaResponse, FetchError> {
    match client.fetch_annotations(uniprot_id).await? {
        Reply::Ok(response) => Ok(response),
        Reply::NotOk { status_text, .. } => Err(FetchError::Status(status_text)),
    }
}

/// Resolve a gene id and fetch the GO annotations of its accession
///
/// Stage 2 only runs when stage 1 produced a non-empty accession. When it
/// did not, the UniProt failure already in state is the only signal and the
/// `goa` slice is left untouched.
pub async fn fetch_annotations_for_gene(store: &Store, client: &dyn BioClient, gene_id: &str) {
    let Some(uniprot_id) = fetch_uniprot_id(store, client, gene_id).await else {
        debug!("No accession for {}, skipping annotation lookup", gene_id);
        return;
    };

    fetch_goa(store, client, &uniprot_id).await;
}
