//! SaveMiddleware - reports the state it would persist

use super::Middleware;
use crate::{actions::Action, state::AppState};

/// Logs the current tree together with its configured key and namespace
///
/// Purely observational: nothing is written anywhere and every action is
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub struct SaveMiddleware {
    key: String,
    namespace: String,
}

impl SaveMiddleware {
    pub fn new(key: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            namespace: namespace.into(),
        }
    }

    fn describe(&self, state: &AppState) -> String {
        let json = serde_json::to_string(state)
            .unwrap_or_else(|e| format!("<unserializable state: {}>", e));
        format!(
            "middleware got state {} to store {} with namespace {}",
            json, self.key, self.namespace
        )
    }
}

impl Middleware for SaveMiddleware {
    fn handle(&mut self, _action: &Action, state: &AppState) -> bool {
        log::info!("{}", self.describe(state));
        true
    }
}
