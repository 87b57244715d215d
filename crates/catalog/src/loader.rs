//! Loader for the catalog data file.
//!
//! The source is a single JSON array of movie records. Parsing happens once
//! at startup; any failure here is fatal to the process, so errors carry
//! the file path and the deserializer's own message.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse the movie array from a JSON file.
///
/// Distinguishes a missing file from other I/O failures so startup logs
/// name the actual problem. Record order in the file is preserved.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CatalogError::IoError(e)
        }
    })?;

    let reader = BufReader::new(file);
    let movies: Vec<Movie> =
        serde_json::from_reader(reader).map_err(|e| CatalogError::MalformedData {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(movies)
}
