//! Filter stage for title search.
//!
//! This is the first stage in the pipeline: a case-insensitive substring
//! match against the movie title.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose title contains the search text, case-insensitively.
///
/// ## Algorithm
/// 1. Absent or empty search text: return the input unchanged. Movies
///    with a null title pass too, since there is no text to match against.
/// 2. Otherwise lowercase the needle once, then keep movies whose title is
///    non-null and contains it.
pub struct TitleSearchFilter;

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        let needle = match criteria.search_terms.as_deref() {
            Some(terms) if !terms.is_empty() => terms.to_lowercase(),
            _ => return Ok(movies),
        };

        let filtered: Vec<&Movie> = movies
            .into_iter()
            .filter(|movie| {
                movie
                    .title
                    .as_ref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(filtered)
    }
}
