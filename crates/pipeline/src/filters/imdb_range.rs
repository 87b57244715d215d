//! Filter stage for the IMDB rating range.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose IMDB rating lies in the inclusive [min, max] range.
///
/// ## Algorithm
/// 1. Full-range detection: if (min absent or <= 0.0) and (max absent or
///    >= 10.0), the bounds cover the whole legal scale and the stage
///    returns its input unchanged. This path never inspects `imdb_rating`,
///    so movies with a null rating pass through.
/// 2. Otherwise every comparison goes through the movie's rating; a null
///    rating fails any bound comparison and the movie is excluded. This
///    holds for one-sided ranges as well and is part of the stage's
///    contract, not an accident to be patched over.
pub struct ImdbRangeFilter;

impl Filter for ImdbRangeFilter {
    fn name(&self) -> &str {
        "ImdbRangeFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        let min = criteria.imdb_min;
        let max = criteria.imdb_max;

        if min.map_or(true, |m| m <= 0.0) && max.map_or(true, |m| m >= 10.0) {
            return Ok(movies);
        }

        let filtered: Vec<&Movie> = match (min, max) {
            (None, Some(max)) => movies
                .into_iter()
                .filter(|movie| movie.imdb_rating.is_some_and(|r| r <= max))
                .collect(),
            (Some(min), None) => movies
                .into_iter()
                .filter(|movie| movie.imdb_rating.is_some_and(|r| min <= r))
                .collect(),
            (Some(min), Some(max)) => movies
                .into_iter()
                .filter(|movie| movie.imdb_rating.is_some_and(|r| min <= r && r <= max))
                .collect(),
            // Both absent is caught by the full-range check above
            (None, None) => movies,
        };
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Movie> {
        vec![
            Movie::new(Some("Alien"), Some("Horror"), Some("R"), Some(8.5), Some(97.0)),
            Movie::new(Some("Annie"), Some("Musical"), Some("G"), None, Some(54.0)),
            Movie::new(Some("Saw"), Some("Horror"), Some("R"), Some(7.6), Some(50.0)),
            Movie::new(Some("Exactly Seven"), Some("Drama"), Some("PG"), Some(7.0), None),
        ]
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_imdb_range(Some(7.0), None);

        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        let titles: Vec<_> = filtered.iter().map(|m| m.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["Alien", "Saw", "Exactly Seven"]);
    }

    #[test]
    fn test_null_rating_excluded_under_one_sided_bound() {
        let movies = sample();

        let lower_only = FilterCriteria::new().with_imdb_range(Some(7.0), None);
        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &lower_only)
            .unwrap();
        assert!(!filtered.iter().any(|m| m.title.as_deref() == Some("Annie")));

        let upper_only = FilterCriteria::new().with_imdb_range(None, Some(9.0));
        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &upper_only)
            .unwrap();
        assert!(!filtered.iter().any(|m| m.title.as_deref() == Some("Annie")));
    }

    #[test]
    fn test_full_range_passes_everything_through() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_imdb_range(Some(0.0), Some(10.0));

        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        // Including the movie with a null rating
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().any(|m| m.title.as_deref() == Some("Annie")));
    }

    #[test]
    fn test_out_of_scale_bounds_also_count_as_full_range() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_imdb_range(Some(-1.0), Some(11.0));

        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_two_sided_range() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_imdb_range(Some(7.5), Some(8.0));

        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("Saw"));
    }

    #[test]
    fn test_upper_bound_only() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_imdb_range(None, Some(7.5));

        let filtered = ImdbRangeFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        let titles: Vec<_> = filtered.iter().map(|m| m.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["Exactly Seven"]);
    }
}
