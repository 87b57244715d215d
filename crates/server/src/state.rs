//! Shared application state.

use catalog::Catalog;
use pipeline::FilterPipeline;
use std::sync::Arc;

/// Shared application state.
///
/// Constructed once in `main` after the catalog load succeeds. Cloning is
/// cheap (two `Arc`s). The catalog is immutable after construction and the
/// pipeline is stateless, so any number of handlers read both concurrently
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub pipeline: Arc<FilterPipeline>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            pipeline: Arc::new(FilterPipeline::standard()),
        }
    }
}
