//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::advice::{AdviceError, offline_advice};
use crate::domain::{AirlineCode, IataCode, Itinerary};
use crate::emissions::calculate_emissions;
use crate::network::AirlineFilter;
use crate::planner::{PathResult, find_shortest_path};

use super::dto::*;
use super::state::AppState;

/// Weather condition assumed for delay risk when the request does not
/// supply one.
const DEFAULT_WEATHER: &str = "rain";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/airports/search", get(search_airports))
        .route("/api/route", get(plan_route))
        .route("/api/query", post(resolve_query))
        .route("/api/advice", post(travel_advice))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
        }
    }
}

/// Search airports by label substring.
async fn search_airports(
    State(state): State<AppState>,
    Query(req): Query<AirportSearchRequest>,
) -> Json<AirportSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);

    let airports = state
        .directory
        .search(&req.q, limit)
        .into_iter()
        .map(|entry| AirportResult {
            code: entry.airport.code.to_string(),
            label: entry.label.clone(),
        })
        .collect();

    Json(AirportSearchResponse { airports })
}

/// Plan the shortest route between two airports and decorate each leg
/// with price, delay risk, and the totals.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = IataCode::parse_normalized(&req.origin).map_err(|_| AppError::BadRequest {
        message: format!("invalid origin code: {}", req.origin),
    })?;
    let dest = IataCode::parse_normalized(&req.dest).map_err(|_| AppError::BadRequest {
        message: format!("invalid destination code: {}", req.dest),
    })?;

    let filter = parse_airline_filter(req.airlines.as_deref())?;
    let weather = req.weather.as_deref().unwrap_or(DEFAULT_WEATHER);

    let graph = state.networks.graph(&filter);

    match find_shortest_path(&graph, origin, dest) {
        // Unreachable queries are a normal outcome, reported in-band.
        PathResult::NoPath => Ok(Json(RouteResponse::no_path())),
        PathResult::Found(itinerary) => Ok(Json(decorate(&state, &itinerary, weather))),
    }
}

/// Attach per-leg estimates and compute the totals.
fn decorate(state: &AppState, itinerary: &Itinerary, weather: &str) -> RouteResponse {
    let mut legs = Vec::with_capacity(itinerary.len());
    let mut total_price = 0.0;

    for leg in itinerary.legs() {
        let duration_mins = leg.duration_estimate().num_minutes();
        let price = state.registry.predict_price(duration_mins, 0, &leg.airline);

        let delay_risk = match state
            .registry
            .predict_delay(leg.distance_km, weather, &leg.airline)
        {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(error = %e, "delay prediction unavailable for leg");
                None
            }
        };

        total_price += price;
        legs.push(LegResult::from_leg(leg, price, delay_risk));
    }

    let total_distance = itinerary.total_distance_km();

    RouteResponse {
        found: true,
        legs,
        total_distance_km: total_distance,
        total_price_usd: (total_price * 100.0).round() / 100.0,
        total_emissions_kg: calculate_emissions(total_distance),
    }
}

/// Parse the comma-separated airline codes of a route request.
fn parse_airline_filter(airlines: Option<&str>) -> Result<AirlineFilter, AppError> {
    let Some(raw) = airlines else {
        return Ok(AirlineFilter::all());
    };
    if raw.trim().is_empty() {
        return Ok(AirlineFilter::all());
    }

    let mut codes = Vec::new();
    for part in raw.split(',') {
        let code = AirlineCode::parse_normalized(part).map_err(|_| AppError::BadRequest {
            message: format!("invalid airline code: {part}"),
        })?;
        codes.push(code);
    }

    Ok(AirlineFilter::only(codes))
}

/// Resolve a free-text route query to airport codes.
async fn resolve_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Json<QueryResponse> {
    let phrases = crate::query::parse_route_query(&req.text);

    let (origin, dest) = match phrases {
        None => (None, None),
        Some((origin_phrase, dest_phrase)) => (
            crate::query::resolve_phrase(&state.directory, &origin_phrase),
            crate::query::resolve_phrase(&state.directory, &dest_phrase),
        ),
    };

    Json(QueryResponse {
        origin: origin.map(|c| c.to_string()),
        dest: dest.map(|c| c.to_string()),
    })
}

/// Answer a travel question, live when a key is configured, otherwise
/// from the offline knowledge base.
async fn travel_advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Json<AdviceResponse> {
    match state.advice.get_advice(&req.destination, &req.question).await {
        Ok(advice) => Json(AdviceResponse {
            advice,
            source: "live".to_string(),
        }),
        Err(AdviceError::NotConfigured) => Json(AdviceResponse {
            advice: offline_advice(&req.destination, &req.question),
            source: "offline".to_string(),
        }),
        Err(e) => Json(AdviceResponse {
            advice: advice_failure_message(&e),
            source: "error".to_string(),
        }),
    }
}

/// A user-facing message for each advice failure mode.
fn advice_failure_message(error: &AdviceError) -> String {
    match error {
        AdviceError::NotConfigured => "No advice API key is configured.".to_string(),
        AdviceError::RateLimited => {
            "The advice service is currently rate limited; try again shortly.".to_string()
        }
        AdviceError::Unauthorized => "The advice API key was rejected.".to_string(),
        AdviceError::Http(e) => format!("Could not reach the advice service: {e}"),
        AdviceError::Api { status, .. } => {
            format!("The advice service returned an error (status {status}).")
        }
        AdviceError::Json { .. } => "The advice service returned an unreadable reply.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{AdviceClient, AdviceConfig};
    use crate::cache::{CacheConfig, NetworkCache};
    use crate::dataset::records::{AirlineRecord, AirportRecord, RouteRecord};
    use crate::dataset::{AirportDirectory, Dataset};
    use crate::estimator::{EstimatorConfig, ModelRegistry};
    use std::sync::Arc;

    fn airport(iata: &str, city: &str, lat: f64, lon: f64) -> AirportRecord {
        AirportRecord {
            id: 0,
            name: Some(format!("{city} International")),
            city: Some(city.to_string()),
            country: Some("Testland".to_string()),
            iata: Some(iata.to_string()),
            icao: None,
            latitude: lat,
            longitude: lon,
            altitude: 0.0,
            timezone: None,
            dst: None,
            tz: None,
            kind: None,
            source: None,
        }
    }

    fn airline(iata: &str, name: &str) -> AirlineRecord {
        AirlineRecord {
            id: 0,
            name: Some(name.to_string()),
            alias: None,
            iata: Some(iata.to_string()),
            icao: None,
            callsign: None,
            country: None,
            active: Some("Y".to_string()),
        }
    }

    fn route(airline: &str, src: &str, dst: &str) -> RouteRecord {
        RouteRecord {
            airline: Some(airline.to_string()),
            airline_id: None,
            source_airport: Some(src.to_string()),
            source_airport_id: None,
            dest_airport: Some(dst.to_string()),
            dest_airport_id: None,
            codeshare: None,
            stops: Some("0".to_string()),
            equipment: None,
        }
    }

    fn test_state(model_dir: &std::path::Path) -> AppState {
        let dataset = Dataset {
            airports: vec![
                airport("AAA", "Alpha", 0.0, 0.0),
                airport("BBB", "Beta", 0.0, 9.0),
                airport("CCC", "Gamma", 0.0, 27.0),
            ],
            airlines: vec![airline("XA", "Airline X")],
            routes: vec![route("XA", "AAA", "BBB"), route("XA", "BBB", "CCC")],
        };

        let directory = AirportDirectory::from_dataset(&dataset);
        let networks = NetworkCache::new(Arc::new(dataset), &CacheConfig::default());
        let registry = ModelRegistry::new(EstimatorConfig::new(model_dir));
        let advice = AdviceClient::new(AdviceConfig::new(None)).unwrap();

        AppState::new(directory, networks, registry, advice)
    }

    #[tokio::test]
    async fn plan_route_returns_decorated_legs() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let response = plan_route(
            State(state),
            Query(RouteRequest {
                origin: "AAA".to_string(),
                dest: "CCC".to_string(),
                airlines: None,
                weather: None,
            }),
        )
        .await
        .unwrap();

        assert!(response.found);
        assert_eq!(response.legs.len(), 2);
        assert!(response.total_distance_km > 0.0);
        assert!(response.total_price_usd > 0.0);
        assert_eq!(
            response.total_emissions_kg,
            calculate_emissions(response.total_distance_km)
        );
        for leg in &response.legs {
            assert!(leg.price_usd >= 0.0);
            let risk = leg.delay_risk.expect("delay model should be available");
            assert!((0.0..=1.0).contains(&risk));
        }
    }

    #[tokio::test]
    async fn plan_route_reports_no_path_in_band() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let response = plan_route(
            State(state),
            Query(RouteRequest {
                origin: "AAA".to_string(),
                dest: "ZZZ".to_string(),
                airlines: None,
                weather: None,
            }),
        )
        .await
        .unwrap();

        assert!(!response.found);
        assert_eq!(response.total_distance_km, 0.0);
    }

    #[tokio::test]
    async fn plan_route_rejects_malformed_codes() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let result = plan_route(
            State(state),
            Query(RouteRequest {
                origin: "not a code".to_string(),
                dest: "CCC".to_string(),
                airlines: None,
                weather: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn airline_filter_narrows_the_network() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        // A filter selecting a carrier with no routes disconnects everything.
        let response = plan_route(
            State(state),
            Query(RouteRequest {
                origin: "AAA".to_string(),
                dest: "CCC".to_string(),
                airlines: Some("ZZ".to_string()),
                weather: None,
            }),
        )
        .await
        .unwrap();

        assert!(!response.found);
    }

    #[tokio::test]
    async fn search_airports_matches_labels() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let response = search_airports(
            State(state),
            Query(AirportSearchRequest {
                q: "beta".to_string(),
                limit: None,
            }),
        )
        .await;

        assert_eq!(response.airports.len(), 1);
        assert_eq!(response.airports[0].code, "BBB");
    }

    #[tokio::test]
    async fn resolve_query_finds_codes() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let response = resolve_query(
            State(state),
            Json(QueryRequest {
                text: "from Alpha to Gamma".to_string(),
            }),
        )
        .await;

        assert_eq!(response.origin.as_deref(), Some("AAA"));
        assert_eq!(response.dest.as_deref(), Some("CCC"));
    }

    #[tokio::test]
    async fn advice_without_key_uses_offline_knowledge() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path());

        let response = travel_advice(
            State(state),
            Json(AdviceRequest {
                destination: "London".to_string(),
                question: "what should I eat?".to_string(),
            }),
        )
        .await;

        assert_eq!(response.source, "offline");
        assert!(response.advice.contains("Brick Lane"));
    }

    #[test]
    fn failure_messages_distinguish_causes() {
        assert!(advice_failure_message(&AdviceError::RateLimited).contains("rate limited"));
        assert!(advice_failure_message(&AdviceError::Unauthorized).contains("rejected"));
        assert!(
            advice_failure_message(&AdviceError::Api {
                status: 503,
                message: String::new()
            })
            .contains("503")
        );
    }
}
