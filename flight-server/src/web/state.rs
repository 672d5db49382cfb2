//! Application state for the web layer.

use std::sync::Arc;

use crate::advice::AdviceClient;
use crate::cache::NetworkCache;
use crate::dataset::AirportDirectory;
use crate::estimator::ModelRegistry;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Popularity-ordered airport directory
    pub directory: Arc<AirportDirectory>,

    /// Route graphs, cached per airline filter
    pub networks: Arc<NetworkCache>,

    /// Trained price/delay models
    pub registry: Arc<ModelRegistry>,

    /// Travel-advice API client
    pub advice: Arc<AdviceClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: AirportDirectory,
        networks: NetworkCache,
        registry: ModelRegistry,
        advice: AdviceClient,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            networks: Arc::new(networks),
            registry: Arc::new(registry),
            advice: Arc::new(advice),
        }
    }
}
