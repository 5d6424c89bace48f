//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware sees the action and the state as it was before the
//! action is reduced. Middleware run in registration order.

use crate::actions::Action;
use crate::state::AppState;

mod logging;
mod save;

pub use logging::LoggingMiddleware;
pub use save::SaveMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState) -> bool;
}
