//! Axum surface of the account lifecycle service.
//!
//! Handlers stay thin: parse the request into domain types, build the
//! use case from the shared state, map its error onto a status code.
//! The lifecycle logic itself lives in `chirper_application`.

pub mod extract;
pub mod routes;
pub mod state;

pub use state::AppState;
