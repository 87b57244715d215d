//! Filter stage for genre membership.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose major genre is in the accepted set.
///
/// Same shape as the MPAA stage: empty set is a no-op, a null genre is
/// excluded once a set is present. The accepted values come from the genre
/// list the catalog derived at load time.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        if criteria.genres.is_empty() {
            return Ok(movies);
        }

        let filtered: Vec<&Movie> = movies
            .into_iter()
            .filter(|movie| {
                movie
                    .major_genre
                    .as_ref()
                    .is_some_and(|genre| criteria.genres.contains(genre))
            })
            .collect();
        Ok(filtered)
    }
}
