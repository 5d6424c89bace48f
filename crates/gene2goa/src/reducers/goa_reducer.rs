//! GOA Reducer

use crate::actions::Action;
use crate::state::GoaState;

/// Merge GOA action payloads into the slice
pub fn reduce(state: GoaState, action: &Action) -> GoaState {
    log::trace!(
        "goa reducer called with state {:?} and action {}",
        state,
        action.kind()
    );

    match action {
        Action::Goa(action) => state.merge(action.payload()),
        _ => state,
    }
}
