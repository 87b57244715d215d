//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent stages to be applied to a movie sequence.

use crate::criteria::FilterCriteria;
use anyhow::Result;
use catalog::Movie;

/// Core trait for filter stages.
///
/// All stages must implement this trait to be used in the FilterPipeline.
///
/// ## Contract
/// - A stage whose criterion is absent/empty returns its input unchanged
/// - Stages only narrow: no stage adds records or changes the relative
///   order of survivors
/// - Each stage reads exactly one criterion and never observes another
///   stage's criterion
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline instance serve concurrent requests
/// - Stages pass `Vec<&Movie>` through, so filtering borrows from the
///   catalog instead of cloning records
/// - The lifetime parameter sits on `apply`, keeping the trait usable as
///   `Box<dyn Filter>`
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a sequence of candidate movies.
    ///
    /// # Arguments
    /// * `movies` - The candidates to filter (takes ownership of the view)
    /// * `criteria` - The request's filter criteria
    ///
    /// # Returns
    /// * `Ok(Vec<&Movie>)` - The surviving movies, input order preserved
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        movies: Vec<&'a Movie>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&'a Movie>>;
}
