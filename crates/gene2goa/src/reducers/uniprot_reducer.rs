//! UniProt Reducer

use crate::actions::Action;
use crate::state::UniprotState;

/// Merge UniProt action payloads into the slice
pub fn reduce(state: UniprotState, action: &Action) -> UniprotState {
    log::trace!(
        "uniprot reducer called with state {:?} and action {}",
        state,
        action.kind()
    );

    match action {
        Action::Uniprot(action) => state.merge(action.payload()),
        _ => state,
    }
}
