//! Reducers
//!
//! Pure functions folding an [`Action`](crate::actions::Action) into a
//! slice. Each takes its slice by value and returns the next one; actions
//! outside a reducer's domain return the slice unchanged.

pub mod app_reducer;
pub mod goa_reducer;
pub mod uniprot_reducer;
pub mod user_reducer;

pub use app_reducer::reduce;
