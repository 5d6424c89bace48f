use crate::actions::Action;
use crate::reducers::{goa_reducer, uniprot_reducer, user_reducer};
use crate::state::AppState;

/// Root reducer - runs every slice reducer and assembles the new tree
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        uniprot: uniprot_reducer::reduce(state.uniprot, action),
        goa: goa_reducer::reduce(state.goa, action),
        user: user_reducer::reduce_user(state.user, action),
        hydrate: user_reducer::reduce_hydrate(state.hydrate, action),
        items: user_reducer::reduce_items(state.items, action),
    }
}
