//! Error types for the catalog crate.
//!
//! Loading is one-shot: any of these errors at startup means the process
//! has no catalog to serve and must not start.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
///
/// The `#[derive(Error)]` macro from thiserror implements the
/// `std::error::Error` trait and `Display` based on the `#[error(...)]`
/// attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents could not be deserialized into a movie array
    ///
    /// This variant stores the underlying deserialization message so the
    /// startup log points at the offending position in the file.
    #[error("Malformed catalog data in {path}: {reason}")]
    MalformedData { path: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
