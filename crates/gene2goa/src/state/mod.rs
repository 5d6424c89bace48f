//! Application state
//!
//! The aggregate tree is one struct with a field per domain slice. Slices
//! start out empty and only change through reducers.

mod app;
mod goa;
mod uniprot;
mod user;

pub use app::AppState;
pub use goa::GoaState;
pub use uniprot::UniprotState;
pub use user::{HydrateState, UserState};
