//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - `Movie`: a single catalog record, immutable after load
//! - `Catalog`: the full ordered collection plus derived lookups
//! - `CatalogSummary`: aggregate statistics computed at load time

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// The fixed set of MPAA rating choices offered to filters.
///
/// This list is a policy choice, not derived from data: a movie carrying a
/// rating value outside this list (e.g. "Not Rated") is never matched by a
/// rating filter.
pub const MPAA_RATING_CHOICES: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

// =============================================================================
// Movie
// =============================================================================

/// A single movie record from the catalog file.
///
/// Every field the source data may omit is an `Option`; the filter stages
/// are written around that nullability rather than papering over it with
/// defaults. Fields not used by filtering are carried through unchanged for
/// the presentation layer.
///
/// Field names in the JSON source are camelCase ("majorGenre",
/// "imdbRating", ...); `rename_all` maps them onto snake_case here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default)]
    pub title: Option<String>,

    /// Primary genre label, one of an open set of categories
    #[serde(default)]
    pub major_genre: Option<String>,

    /// Content rating as it appears in the data. Open string; only the
    /// values in [`MPAA_RATING_CHOICES`] are ever offered as filter options.
    #[serde(default)]
    pub mpaa_rating: Option<String>,

    /// IMDB score, conventionally in [0.0, 10.0]
    #[serde(default)]
    pub imdb_rating: Option<f64>,

    /// Rotten Tomatoes score, conventionally in [0, 100]
    #[serde(default)]
    pub rotten_tomatoes_rating: Option<f64>,

    // Descriptive fields below are not consulted by any filter stage and
    // pass through to the response unchanged.
    #[serde(default)]
    pub director: Option<String>,

    #[serde(default)]
    pub distributor: Option<String>,

    #[serde(default)]
    pub creative_type: Option<String>,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub running_time_min: Option<f64>,

    #[serde(default)]
    pub imdb_votes: Option<f64>,
}

impl Movie {
    /// Shorthand constructor covering the filter-relevant fields.
    ///
    /// Descriptive pass-through fields start out as `None`. Mostly useful
    /// for building synthetic catalogs in tests and benches.
    pub fn new(
        title: Option<&str>,
        major_genre: Option<&str>,
        mpaa_rating: Option<&str>,
        imdb_rating: Option<f64>,
        rotten_tomatoes_rating: Option<f64>,
    ) -> Self {
        Self {
            title: title.map(str::to_string),
            major_genre: major_genre.map(str::to_string),
            mpaa_rating: mpaa_rating.map(str::to_string),
            imdb_rating,
            rotten_tomatoes_rating,
            director: None,
            distributor: None,
            creative_type: None,
            release_date: None,
            running_time_min: None,
            imdb_votes: None,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full in-memory movie collection, fixed for the process lifetime.
///
/// A `Catalog` is built exactly once at startup (or from an in-memory
/// sequence in tests), then shared read-only behind an `Arc`. The movie
/// order is the source-file order and is never changed; all filtering
/// downstream operates on borrowed views of this sequence.
#[derive(Debug)]
pub struct Catalog {
    /// All movies, in source order
    pub(crate) movies: Vec<Movie>,

    /// Distinct non-null `major_genre` values, first-seen order.
    /// Derived once during construction, stable afterwards.
    pub(crate) genres: Vec<String>,
}

impl Catalog {
    /// Full ordered sequence of movies. Callers must not assume anything
    /// beyond source order; they receive a read-only view.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Distinct genres observed in the catalog, in first-seen order.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// The fixed MPAA rating choice list. Static, independent of the
    /// loaded data.
    pub fn mpaa_rating_choices() -> &'static [&'static str] {
        &MPAA_RATING_CHOICES
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregate statistics over the whole catalog.
///
/// Computed on demand from the loaded data; consumed by the CLI `stats`
/// command and startup logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub movie_count: usize,
    pub distinct_genres: usize,
    /// Movies with a non-null title
    pub titled: usize,
    /// Movies with a non-null IMDB rating
    pub imdb_rated: usize,
    /// Movies with a non-null Rotten Tomatoes rating
    pub rt_rated: usize,
    /// Mean IMDB rating over rated movies, `None` if no movie is rated
    pub mean_imdb_rating: Option<f64>,
}
