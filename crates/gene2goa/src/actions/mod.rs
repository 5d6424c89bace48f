//! Actions module
//!
//! Every state change is described by an [`Action`]. Actions are tagged by
//! domain, and each domain enum carries its own factories and payload.
//! Fetch actions expose their payload as a patch: present fields overwrite
//! the slice, absent fields leave it alone.

pub mod goa;
pub mod uniprot;
pub mod user;

pub use goa::{GoaAction, GoaPatch};
pub use uniprot::{UniprotAction, UniprotPatch};
pub use user::{HydrateAction, ItemsAction, UserAction};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Gene id -> UniProt accession lookup
    Uniprot(UniprotAction),
    /// UniProt accession -> GO annotation lookup
    Goa(GoaAction),

    // Toy domains
    User(UserAction),
    Hydrate(HydrateAction),
    Items(ItemsAction),

    /// An action no reducer handles, identified only by its kind
    Other(String),
}

impl Action {
    /// Descriptor kind, e.g. `FETCH_UNIPROT_REQUEST`
    pub fn kind(&self) -> &str {
        match self {
            Action::Uniprot(action) => action.kind(),
            Action::Goa(action) => action.kind(),
            Action::User(action) => action.kind(),
            Action::Hydrate(action) => action.kind(),
            Action::Items(action) => action.kind(),
            Action::Other(kind) => kind,
        }
    }

    /// Build an action none of the reducers recognize
    pub fn other(kind: impl Into<String>) -> Self {
        Action::Other(kind.into())
    }
}

impl From<UniprotAction> for Action {
    fn from(action: UniprotAction) -> Self {
        Action::Uniprot(action)
    }
}

impl From<GoaAction> for Action {
    fn from(action: GoaAction) -> Self {
        Action::Goa(action)
    }
}

impl From<UserAction> for Action {
    fn from(action: UserAction) -> Self {
        Action::User(action)
    }
}

impl From<HydrateAction> for Action {
    fn from(action: HydrateAction) -> Self {
        Action::Hydrate(action)
    }
}

impl From<ItemsAction> for Action {
    fn from(action: ItemsAction) -> Self {
        Action::Items(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            Action::from(UniprotAction::request("HBA1")).kind(),
            "FETCH_UNIPROT_REQUEST"
        );
        assert_eq!(
            Action::from(GoaAction::failure("Bad Gateway")).kind(),
            "FETCH_GOA_FAILURE"
        );
        assert_eq!(Action::from(UserAction::set_name("bob")).kind(), "SET_NAME");
        assert_eq!(
            Action::from(HydrateAction::hydrate_name("tucker")).kind(),
            "HYDRATE_NAME"
        );
        assert_eq!(Action::from(ItemsAction::add_item("apple")).kind(), "ADD_ITEM");
        assert_eq!(Action::other("AN_ACTION").kind(), "AN_ACTION");
    }
}
