//! UniProt and QuickGO API client
//!
//! This crate provides a trait-based client for the two lookups the
//! gene annotation workflow needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                BioClient trait                   │
//! │  - fetch_uniprot_list()   gene id -> accession   │
//! │  - fetch_annotations()    accession -> GO hits   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ ReqwestClient   │         │ test doubles        │
//! │ (direct HTTP)   │         │ (scripted replies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! A non-2xx response is not an error at this layer: it comes back as
//! [`Reply::NotOk`] so callers can tell transport failures apart from
//! negative results.
//!
//! # Example
//!
//! ```rust,no_run
//! use goa_client::{BioClient, Endpoints, ReqwestClient, Reply};
//!
//! # async fn example() -> Result<(), goa_client::ClientError> {
//! let client = ReqwestClient::new(Endpoints::default())?;
//! if let Reply::Ok(body) = client.fetch_uniprot_list("HBA1").await? {
//!     println!("accession: {}", body.trim());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod reqwest_client;
pub mod types;

/// UniProtKB search endpoint (plain-text list format)
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org/uniprotkb/search";

/// QuickGO annotation search endpoint
pub const DEFAULT_QUICKGO_URL: &str = "https://www.ebi.ac.uk/QuickGO/services/annotation/search";

/// Maximum number of annotations requested per lookup
pub const DEFAULT_ANNOTATION_LIMIT: u32 = 100;

/// Extra fields QuickGO should include in each annotation
pub const DEFAULT_INCLUDE_FIELDS: &str = "goName";

pub use client::BioClient;
pub use error::ClientError;
pub use reqwest_client::{Endpoints, ReqwestClient};
pub use types::{GoaResponse, GoaResult, Reply};
