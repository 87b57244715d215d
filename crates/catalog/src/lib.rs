//! # Catalog Crate
//!
//! This crate loads and holds the in-memory movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog, CatalogSummary)
//! - **loader**: Parse the JSON data file into movie records
//! - **store**: Catalog construction, genre derivation, statistics
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load the catalog once at startup
//! let catalog = Catalog::load_from_file(Path::new("movies.json"))?;
//!
//! // Read-only access afterwards
//! println!("{} movies", catalog.all().len());
//! println!("genres: {:?}", catalog.genres());
//! ```
//!
//! The catalog is populated exactly once, before any request is served, and
//! never mutated afterwards. Shared behind an `Arc`, reads need no locking.

// Public modules
pub mod error;
pub mod types;
pub mod loader;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, CatalogSummary, Movie, MPAA_RATING_CHOICES};
