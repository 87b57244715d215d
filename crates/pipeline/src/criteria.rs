//! Filter criteria for a single request.
//!
//! One `FilterCriteria` value carries every dimension of filter input a
//! request may supply. Each field is independently optional; an absent
//! field means "no constraint on that dimension". The value is owned by a
//! single request and discarded after use.

use std::fmt;

/// All filter input for one pipeline invocation.
///
/// Built either directly (CLI flags, tests) or from bound query
/// parameters (server). The builder methods mirror the optional nature of
/// every dimension: start from `new()` and set only what the request
/// actually constrains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive title substring to search for
    pub search_terms: Option<String>,
    /// Accepted MPAA ratings; empty means no constraint
    pub mpaa_ratings: Vec<String>,
    /// Accepted genres; empty means no constraint
    pub genres: Vec<String>,
    /// Inclusive IMDB rating bounds, each side independently optional
    pub imdb_min: Option<f64>,
    pub imdb_max: Option<f64>,
    /// Inclusive Rotten Tomatoes bounds, each side independently optional
    pub rt_min: Option<i64>,
    pub rt_max: Option<i64>,
}

impl FilterCriteria {
    /// Criteria with no constraint on any dimension
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_terms(mut self, terms: impl Into<String>) -> Self {
        self.search_terms = Some(terms.into());
        self
    }

    pub fn with_mpaa_ratings(mut self, ratings: &[&str]) -> Self {
        self.mpaa_ratings = ratings.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_imdb_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.imdb_min = min;
        self.imdb_max = max;
        self
    }

    pub fn with_rotten_tomatoes_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.rt_min = min;
        self.rt_max = max;
        self
    }

    /// True when no dimension carries any constraint.
    ///
    /// Note this is a syntactic check; a range that happens to span the
    /// whole rating scale still counts as "constrained" here and is only
    /// collapsed to a no-op inside the range stages themselves.
    pub fn is_unconstrained(&self) -> bool {
        self.search_terms.as_deref().is_none_or(str::is_empty)
            && self.mpaa_ratings.is_empty()
            && self.genres.is_empty()
            && self.imdb_min.is_none()
            && self.imdb_max.is_none()
            && self.rt_min.is_none()
            && self.rt_max.is_none()
    }
}

impl fmt::Display for FilterCriteria {
    /// Compact single-line rendering for request logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "search={:?} ratings={:?} genres={:?} imdb=[{:?},{:?}] rt=[{:?},{:?}]",
            self.search_terms,
            self.mpaa_ratings,
            self.genres,
            self.imdb_min,
            self.imdb_max,
            self.rt_min,
            self.rt_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_criteria_are_unconstrained() {
        assert!(FilterCriteria::new().is_unconstrained());
    }

    #[test]
    fn test_any_dimension_marks_constrained() {
        assert!(!FilterCriteria::new()
            .with_search_terms("alien")
            .is_unconstrained());
        assert!(!FilterCriteria::new()
            .with_mpaa_ratings(&["PG"])
            .is_unconstrained());
        assert!(!FilterCriteria::new()
            .with_genres(&["Horror"])
            .is_unconstrained());
        assert!(!FilterCriteria::new()
            .with_imdb_range(Some(7.0), None)
            .is_unconstrained());
        assert!(!FilterCriteria::new()
            .with_rotten_tomatoes_range(None, Some(80))
            .is_unconstrained());
    }

    #[test]
    fn test_empty_search_terms_count_as_unconstrained() {
        assert!(FilterCriteria::new()
            .with_search_terms("")
            .is_unconstrained());
    }
}
