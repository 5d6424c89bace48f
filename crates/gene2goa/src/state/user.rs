use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HydrateState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Upper-cased name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
