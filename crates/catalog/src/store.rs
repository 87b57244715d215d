//! Catalog construction and derived data.
//!
//! This module builds the `Catalog` from parsed movie records:
//! - load the record array from the JSON source
//! - derive the distinct genre set
//! - compute aggregate statistics on demand

use crate::loader;
use crate::error::Result;
use crate::types::{Catalog, CatalogSummary, Movie};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// This is the single startup entry point. It runs exactly once per
    /// process; a missing or malformed file propagates as a fatal error so
    /// the process never serves a partial catalog.
    ///
    /// Steps:
    /// 1. Parse the movie array from disk
    /// 2. Derive the distinct genre set
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());

        let movies = loader::parse_movies(path)?;
        let catalog = Self::from_movies(movies);

        info!(
            "Loaded {} movies across {} genres",
            catalog.len(),
            catalog.genres().len()
        );
        Ok(catalog)
    }

    /// Build a catalog from an already-materialized movie sequence.
    ///
    /// Used by tests and benches to construct synthetic catalogs without
    /// touching the filesystem. Record order is kept as given.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genres = derive_genres(&movies);
        Self { movies, genres }
    }

    /// Compute aggregate statistics over the catalog.
    ///
    /// Counts fold in parallel per movie; the catalog itself is untouched.
    pub fn summary(&self) -> CatalogSummary {
        let (titled, imdb_rated, rt_rated, imdb_sum) = self
            .movies
            .par_iter()
            .map(|movie| {
                (
                    movie.title.is_some() as usize,
                    movie.imdb_rating.is_some() as usize,
                    movie.rotten_tomatoes_rating.is_some() as usize,
                    movie.imdb_rating.unwrap_or(0.0),
                )
            })
            .reduce(
                || (0, 0, 0, 0.0),
                |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2, a.3 + b.3),
            );

        let mean_imdb_rating = if imdb_rated > 0 {
            Some(imdb_sum / imdb_rated as f64)
        } else {
            None
        };

        CatalogSummary {
            movie_count: self.movies.len(),
            distinct_genres: self.genres.len(),
            titled,
            imdb_rated,
            rt_rated,
            mean_imdb_rating,
        }
    }
}

/// Collect distinct non-null genres, preserving first-seen order.
///
/// The source order is fixed, so the derived ordering is deterministic and
/// stable for the process lifetime.
fn derive_genres(movies: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut genres = Vec::new();
    for movie in movies {
        if let Some(genre) = &movie.major_genre {
            if seen.insert(genre.clone()) {
                genres.push(genre.clone());
            }
        }
    }
    genres
}
