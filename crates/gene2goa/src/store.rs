use crate::actions::Action;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Redux-style Store that holds application state and dispatches actions
///
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is replaced, never mutated in place, on each action
///
/// The tree and the middleware chain share one lock, so a dispatch is a
/// single atomic step: concurrent orchestrator runs interleave only between
/// dispatches and `state()` never observes a half-applied action. The lock
/// is never held across an `.await`.
///
/// ```rust,ignore
/// let mut store = Store::new(AppState::default());
/// store.add_middleware(LoggingMiddleware::new());
/// let store = Arc::new(store);
///
/// store.dispatch(UniprotAction::request("HBA1"));
/// ```
pub struct Store {
    inner: Mutex<Inner>,
}

struct Inner {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: initial_state,
                middleware: Vec::new(),
            }),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.inner
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .middleware
            .push(Box::new(middleware));
    }

    /// Snapshot of the most recently committed state
    pub fn state(&self) -> AppState {
        self.lock().state.clone()
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let mut inner = self.lock();
        let Inner { state, middleware } = &mut *inner;

        let mut should_reduce = true;
        for middleware in middleware.iter_mut() {
            if !middleware.handle(&action, state) {
                log::debug!("Action {} consumed by middleware", action.kind());
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            *state = reduce(std::mem::take(state), &action);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Reducers are pure, so a panic mid-dispatch leaves the old tree intact
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{HydrateAction, UniprotAction, UserAction};
    use std::sync::Arc;

    /// Records the kinds it sees into a shared log
    struct Recorder {
        name: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
        pass: bool,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState) -> bool {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, action.kind()));
            self.pass
        }
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let store = Store::default();

        store.dispatch(UserAction::set_name("bob"));
        store.dispatch(HydrateAction::hydrate_name("tucker"));

        let state = store.state();
        assert_eq!(state.user.name.as_deref(), Some("bob"));
        assert_eq!(state.hydrate.description.as_deref(), Some("TUCKER"));
    }

    #[test]
    fn test_middleware_runs_in_order_before_reducer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Recorder {
            name: "first",
            seen: Arc::clone(&seen),
            pass: true,
        });
        store.add_middleware(Recorder {
            name: "second",
            seen: Arc::clone(&seen),
            pass: true,
        });

        store.dispatch(UniprotAction::request("HBA1"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:FETCH_UNIPROT_REQUEST", "second:FETCH_UNIPROT_REQUEST"]
        );
        assert!(store.state().uniprot.is_fetching);
    }

    #[test]
    fn test_consuming_middleware_blocks_reducer_and_rest_of_chain() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Recorder {
            name: "gate",
            seen: Arc::clone(&seen),
            pass: false,
        });
        store.add_middleware(Recorder {
            name: "after",
            seen: Arc::clone(&seen),
            pass: true,
        });

        store.dispatch(UserAction::set_name("bob"));

        assert_eq!(*seen.lock().unwrap(), vec!["gate:SET_NAME"]);
        assert_eq!(store.state(), AppState::default());
    }

    #[test]
    fn test_middleware_sees_state_before_action() {
        struct Snapshot(Arc<Mutex<Vec<Option<String>>>>);

        impl Middleware for Snapshot {
            fn handle(&mut self, _action: &Action, state: &AppState) -> bool {
                self.0.lock().unwrap().push(state.user.name.clone());
                true
            }
        }

        let names = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Snapshot(Arc::clone(&names)));

        store.dispatch(UserAction::set_name("bob"));
        store.dispatch(UserAction::set_name("alice"));

        assert_eq!(*names.lock().unwrap(), vec![None, Some("bob".to_string())]);
    }
}
