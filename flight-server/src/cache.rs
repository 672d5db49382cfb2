//! Caching layer for built route graphs.
//!
//! A graph is a pure function of the dataset and the airline filter, and
//! the dataset is fixed for the process lifetime, so graphs are cached by
//! the normalized filter. Rebuilds produce a fresh `Arc<RouteGraph>`;
//! readers holding the old one keep a consistent view.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::dataset::Dataset;
use crate::network::{AirlineFilter, RouteGraph, build_graph};

/// Configuration for the graph cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached graphs (one per distinct filter).
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 16 }
    }
}

/// Route graphs built from one dataset, cached per airline filter.
pub struct NetworkCache {
    dataset: Arc<Dataset>,
    graphs: MokaCache<String, Arc<RouteGraph>>,
}

impl NetworkCache {
    /// Create a new cache over the given dataset.
    pub fn new(dataset: Arc<Dataset>, config: &CacheConfig) -> Self {
        let graphs = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { dataset, graphs }
    }

    /// The graph for a filter, building it on first use.
    pub fn graph(&self, filter: &AirlineFilter) -> Arc<RouteGraph> {
        let key = filter_key(filter);
        self.graphs
            .get_with(key, || Arc::new(build_graph(&self.dataset, filter)))
    }

    /// Number of cached graphs.
    pub fn entry_count(&self) -> u64 {
        self.graphs.run_pending_tasks();
        self.graphs.entry_count()
    }
}

/// Normalize a filter into a cache key: `*` for unrestricted, otherwise
/// the sorted codes joined with `,`.
fn filter_key(filter: &AirlineFilter) -> String {
    match filter.selected() {
        None => "*".to_string(),
        Some(codes) => codes
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(","),
    }
}
