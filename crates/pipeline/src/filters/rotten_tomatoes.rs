//! Filter stage for the Rotten Tomatoes rating range.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose Rotten Tomatoes rating lies in the inclusive
/// [min, max] range.
///
/// Same contract as the IMDB stage with the scale swapped out: full-range
/// detection uses [0, 100], bounds arrive as integers, and a null rating
/// fails any effective bound comparison.
pub struct RottenTomatoesFilter;

impl Filter for RottenTomatoesFilter {
    fn name(&self) -> &str {
        "RottenTomatoesFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        let min = criteria.rt_min;
        let max = criteria.rt_max;

        if min.map_or(true, |m| m <= 0) && max.map_or(true, |m| m >= 100) {
            return Ok(movies);
        }

        let filtered: Vec<&Movie> = match (min, max) {
            (None, Some(max)) => movies
                .into_iter()
                .filter(|movie| {
                    movie
                        .rotten_tomatoes_rating
                        .is_some_and(|r| r <= max as f64)
                })
                .collect(),
            (Some(min), None) => movies
                .into_iter()
                .filter(|movie| {
                    movie
                        .rotten_tomatoes_rating
                        .is_some_and(|r| min as f64 <= r)
                })
                .collect(),
            (Some(min), Some(max)) => movies
                .into_iter()
                .filter(|movie| {
                    movie
                        .rotten_tomatoes_rating
                        .is_some_and(|r| min as f64 <= r && r <= max as f64)
                })
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
            Movie::new(Some("Unreviewed"), Some("Drama"), Some("PG"), Some(6.0), None),
        ]
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_rotten_tomatoes_range(Some(50), Some(97));

        let filtered = RottenTomatoesFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        let titles: Vec<_> = filtered.iter().map(|m| m.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["Alien", "Annie", "Saw"]);
    }

    #[test]
    fn test_null_rating_excluded_under_one_sided_bound() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_rotten_tomatoes_range(Some(40), None);

        let filtered = RottenTomatoesFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        assert!(!filtered.iter().any(|m| m.title.as_deref() == Some("Unreviewed")));
    }

    #[test]
    fn test_full_range_passes_everything_through() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_rotten_tomatoes_range(Some(0), Some(100));

        let filtered = RottenTomatoesFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        // Including the movie with a null rating
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_upper_bound_only() {
        let movies = sample();
        let criteria = FilterCriteria::new().with_rotten_tomatoes_range(None, Some(60));

        let filtered = RottenTomatoesFilter
            .apply(movies.iter().collect(), &criteria)
            .unwrap();

        let titles: Vec<_> = filtered.iter().map(|m| m.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["Annie", "Saw"]);
    }
}
