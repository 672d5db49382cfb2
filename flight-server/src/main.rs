use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use flight_server::advice::{AdviceClient, AdviceConfig};
use flight_server::cache::{CacheConfig, NetworkCache};
use flight_server::dataset::{AirportDirectory, Dataset};
use flight_server::estimator::{EstimatorConfig, ModelRegistry};
use flight_server::network::AirlineFilter;
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flight_server=info")),
        )
        .init();

    // Data directory holding airports.dat, airlines.dat, routes.dat,
    // and optionally fares.csv.
    let data_dir = std::env::var("FLIGHT_DATA_DIR").unwrap_or_else(|_| "data".to_string());

    // Advice API key is optional; without it the offline knowledge base
    // answers advice questions.
    let api_key = std::env::var("ADVICE_API_KEY").ok();
    if api_key.is_none() {
        eprintln!("Warning: ADVICE_API_KEY not set. Travel advice runs offline.");
    }

    println!("Loading dataset from {data_dir}...");
    let dataset = Dataset::load(&data_dir).expect("Failed to load dataset");
    let directory = AirportDirectory::from_dataset(&dataset);
    println!("Indexed {} airports", directory.len());

    // Build the unfiltered graph up front so the first query is fast;
    // filtered variants are built on demand and cached.
    let networks = NetworkCache::new(Arc::new(dataset), &CacheConfig::default());
    let graph = networks.graph(&AirlineFilter::all());
    println!(
        "Route network ready: {} airports, {} routes",
        graph.node_count(),
        graph.edge_count()
    );

    // Train (or load) the estimator models before serving.
    let registry = ModelRegistry::new(EstimatorConfig::new(&data_dir));
    if let Err(e) = registry.ensure_ready() {
        eprintln!("Warning: estimator training failed ({e}). Price predictions will use fallbacks.");
    }

    let advice = AdviceClient::new(AdviceConfig::new(api_key)).expect("Failed to create advice client");

    let state = AppState::new(directory, networks, registry, advice);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health               - Health check");
    println!("  GET  /api/airports/search  - Search airports by name");
    println!("  GET  /api/route            - Plan the shortest route");
    println!("  POST /api/query            - Resolve a free-text route query");
    println!("  POST /api/advice           - Ask for travel advice");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
