//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Leg;

/// Request to search airports by label.
#[derive(Debug, Deserialize)]
pub struct AirportSearchRequest {
    /// Search text, matched against airport labels
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// An airport in search results.
#[derive(Debug, Serialize)]
pub struct AirportResult {
    /// IATA code
    pub code: String,

    /// Display label: "City, Country (IATA) - Name"
    pub label: String,
}

/// Response for airport search.
#[derive(Debug, Serialize)]
pub struct AirportSearchResponse {
    /// Matching airports, most popular first
    pub airports: Vec<AirportResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin IATA code
    pub origin: String,

    /// Destination IATA code
    pub dest: String,

    /// Optional comma-separated airline codes restricting the network
    pub airlines: Option<String>,

    /// Weather condition used for delay risk (defaults to "rain")
    pub weather: Option<String>,
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Departure airport code
    pub from: String,

    /// Arrival airport code
    pub to: String,

    /// Operating airline display name
    pub airline: String,

    /// Great-circle distance in kilometres
    pub distance_km: f64,

    /// Estimated block time in minutes
    pub duration_mins: i64,

    /// Estimated ticket price in USD
    pub price_usd: f64,

    /// Probability of delay in [0, 1]; null when the delay model could
    /// not be consulted
    pub delay_risk: Option<f64>,

    /// Departure airport latitude
    pub from_lat: f64,

    /// Departure airport longitude
    pub from_lon: f64,

    /// Arrival airport latitude
    pub to_lat: f64,

    /// Arrival airport longitude
    pub to_lon: f64,
}

impl LegResult {
    /// Build a leg result from a planned leg and its estimates.
    pub fn from_leg(leg: &Leg, price_usd: f64, delay_risk: Option<f64>) -> Self {
        Self {
            from: leg.from.to_string(),
            to: leg.to.to_string(),
            airline: leg.airline.clone(),
            distance_km: leg.distance_km,
            duration_mins: leg.duration_estimate().num_minutes(),
            price_usd,
            delay_risk,
            from_lat: leg.from_position.latitude,
            from_lon: leg.from_position.longitude,
            to_lat: leg.to_position.latitude,
            to_lon: leg.to_position.longitude,
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether a route was found. An unreachable pair is a normal
    /// outcome, not an error status.
    pub found: bool,

    /// Legs in travel order (empty when no route was found)
    pub legs: Vec<LegResult>,

    /// Total distance in kilometres
    pub total_distance_km: f64,

    /// Total estimated price in USD
    pub total_price_usd: f64,

    /// Total estimated CO2 emissions in kilograms
    pub total_emissions_kg: f64,
}

impl RouteResponse {
    /// The response for an unreachable query.
    pub fn no_path() -> Self {
        Self {
            found: false,
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_price_usd: 0.0,
            total_emissions_kg: 0.0,
        }
    }
}

/// Request for free-text route resolution.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Free text, e.g. "fly from Mumbai to Paris"
    pub text: String,
}

/// Response for free-text route resolution.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Resolved origin code, when found
    pub origin: Option<String>,

    /// Resolved destination code, when found
    pub dest: Option<String>,
}

/// Request for travel advice.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// Destination label or city name
    pub destination: String,

    /// The traveller's question
    pub question: String,
}

/// Response for travel advice.
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    /// The advice text, or a descriptive failure message
    pub advice: String,

    /// Where the answer came from: "live", "offline", or "error"
    pub source: String,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
