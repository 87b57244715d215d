//! Server crate for the ReelShelf catalog browser.
//!
//! Exposes the filtered catalog over HTTP: query parameters in, the
//! matching movie subset out (catalog order, no pagination), plus the two
//! enumerations the filter form needs. The catalog loads once in `main`
//! before the listener binds; every handler reads it through shared,
//! lock-free state.

pub mod config;
pub mod state;
pub mod query;
pub mod routes;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
