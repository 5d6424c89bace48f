//! LoggingMiddleware - logs all actions for debugging

use super::Middleware;
use crate::{actions::Action, state::AppState};

/// LoggingMiddleware - logs every action kind that passes through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState) -> bool {
        log::debug!("Action: {}", action.kind());
        true
    }
}
