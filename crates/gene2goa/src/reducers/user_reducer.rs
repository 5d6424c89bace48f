//! Reducers for the toy user, hydrate and items slices

use crate::actions::{Action, HydrateAction, ItemsAction, UserAction};
use crate::state::{HydrateState, UserState};

pub fn reduce_user(mut state: UserState, action: &Action) -> UserState {
    match action {
        Action::User(UserAction::SetName { name }) => {
            state.name = Some(name.clone());
            state
        }
        _ => state,
    }
}

pub fn reduce_hydrate(mut state: HydrateState, action: &Action) -> HydrateState {
    match action {
        Action::Hydrate(HydrateAction::HydrateName { name }) => {
            state.name = Some(name.clone());
            state.description = Some(name.to_uppercase());
            state
        }
        _ => state,
    }
}

/// Items is a list, so it appends rather than merges
pub fn reduce_items(mut state: Vec<String>, action: &Action) -> Vec<String> {
    match action {
        Action::Items(ItemsAction::AddItem { item }) => {
            state.push(item.clone());
            state
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_name() {
        let state = reduce_user(UserState::default(), &UserAction::set_name("bob").into());
        assert_eq!(state.name.as_deref(), Some("bob"));
    }

    #[test]
    fn test_set_name_ignored_by_hydrate() {
        let state = reduce_hydrate(HydrateState::default(), &UserAction::set_name("bob").into());
        assert_eq!(state, HydrateState::default());
    }

    #[test]
    fn test_hydrate_name_derives_description() {
        let state = reduce_hydrate(
            HydrateState::default(),
            &HydrateAction::hydrate_name("tucker").into(),
        );
        assert_eq!(state.name.as_deref(), Some("tucker"));
        assert_eq!(state.description.as_deref(), Some("TUCKER"));
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let items = reduce_items(vec![], &ItemsAction::add_item("apple").into());
        let items = reduce_items(items, &ItemsAction::add_item("pear").into());
        let items = reduce_items(items, &Action::other("AN_ACTION"));
        assert_eq!(items, vec!["apple".to_string(), "pear".to_string()]);
    }
}
