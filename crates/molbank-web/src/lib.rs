//! molbank-web: HTTP surface of the Molbank molecule store.
//! Provides:
//!   - CRUD over stored molecules
//!   - bulk upload from a JSON file
//!   - substructure search

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};
