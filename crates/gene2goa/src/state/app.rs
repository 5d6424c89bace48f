//! Aggregate state tree

use super::{GoaState, HydrateState, UniprotState, UserState};
use serde::Serialize;

/// Application state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub uniprot: UniprotState,
    pub goa: GoaState,
    pub user: UserState,
    pub hydrate: HydrateState,
    pub items: Vec<String>,
}
