//! Toy actions for the user, hydrate and items slices

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    SetName { name: String },
}

impl UserAction {
    pub fn set_name(name: impl Into<String>) -> Self {
        Self::SetName { name: name.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetName { .. } => "SET_NAME",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HydrateAction {
    /// Sets the name and derives an upper-cased description from it
    HydrateName { name: String },
}

impl HydrateAction {
    pub fn hydrate_name(name: impl Into<String>) -> Self {
        Self::HydrateName { name: name.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::HydrateName { .. } => "HYDRATE_NAME",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemsAction {
    AddItem { item: String },
}

impl ItemsAction {
    pub fn add_item(item: impl Into<String>) -> Self {
        Self::AddItem { item: item.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "ADD_ITEM",
        }
    }
}
