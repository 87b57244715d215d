//! The FilterPipeline orchestrates multiple filter stages.
//!
//! This module provides the main FilterPipeline struct that chains
//! stages together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{
    GenreFilter, ImdbRangeFilter, MpaaRatingFilter, RottenTomatoesFilter, TitleSearchFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use tracing;

/// Chains multiple filter stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard();
/// let results = pipeline.apply(catalog.all().iter().collect(), &criteria)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The fixed stage order every catalog query goes through:
    /// title search, then MPAA rating, genre, IMDB range, Rotten Tomatoes
    /// range.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TitleSearchFilter)
            .add_filter(MpaaRatingFilter)
            .add_filter(GenreFilter)
            .add_filter(ImdbRangeFilter)
            .add_filter(RottenTomatoesFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all stages in sequence to the candidate movies.
    ///
    /// ## Algorithm
    /// 1. Start with the input sequence
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Apply the stage
    ///    c. Log output count
    /// 3. Return the final narrowed sequence
    ///
    /// Each stage consumes the previous stage's output; survivors keep
    /// their original relative order throughout.
    pub fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
