//! gene2goa - a small Redux-style store around two sequential lookups
//!
//! A gene id is resolved to a UniProt accession, and the accession is used
//! to fetch Gene Ontology annotations from QuickGO. Every step is recorded
//! in a single [`Store`] through actions and pure reducers.

pub mod actions;
pub mod logger;
pub mod middleware;
pub mod normalize;
pub mod orchestrator;
pub mod reducers;
pub mod report;
pub mod setup;
pub mod state;
pub mod store;

pub use actions::Action;
pub use orchestrator::{fetch_annotations_for_gene, fetch_goa, fetch_uniprot_id};
pub use state::AppState;
pub use store::Store;
