//! Filter stage for MPAA rating membership.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose MPAA rating is in the accepted set.
///
/// An empty accepted set is a no-op. A movie with a null rating, or a
/// rating value outside the accepted set, is excluded. The accepted set
/// normally comes from the fixed choice list, so a movie carrying a label
/// outside that list (e.g. "Not Rated") is never matched.
pub struct MpaaRatingFilter;

impl Filter for MpaaRatingFilter {
    fn name(&self) -> &str {
        "MpaaRatingFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        if criteria.mpaa_ratings.is_empty() {
            return Ok(movies);
        }

        let filtered: Vec<&Movie> = movies
            .into_iter()
            .filter(|movie| {
                movie
                    .mpaa_rating
                    .as_ref()
                    .is_some_and(|rating| criteria.mpaa_ratings.contains(rating))
            })
            .collect();
        Ok(filtered)
    }
}
