//! Pipeline for filtering the movie catalog against request criteria.
//!
//! This crate provides:
//! - Filter trait and the five filter stage implementations
//! - FilterPipeline for composing stages
//! - FilterCriteria carrying one request's filter input
//!
//! ## Architecture
//! A request's criteria pass through the stages in a fixed order, each
//! stage narrowing the candidate sequence:
//! 1. Title search (case-insensitive substring)
//! 2. MPAA rating membership
//! 3. Genre membership
//! 4. IMDB rating range
//! 5. Rotten Tomatoes rating range
//!
//! Every stage is a no-op when its criterion is absent, and surviving
//! movies always keep their catalog order. One pipeline instance serves
//! any number of concurrent requests; applying it is pure and touches no
//! shared mutable state.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, FilterPipeline};
//!
//! let pipeline = FilterPipeline::standard();
//!
//! let criteria = FilterCriteria::new()
//!     .with_search_terms("alien")
//!     .with_imdb_range(Some(7.0), None);
//!
//! let results = pipeline.apply(catalog.all().iter().collect(), &criteria)?;
//! ```

pub mod traits;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
