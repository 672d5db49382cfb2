//! Raw rows of the OpenFlights-style data tables.
//!
//! The tables are headerless CSV with `\N` as the missing-value sentinel.
//! Sentinel normalization happens at deserialization time, so the rest of
//! the crate only ever sees `Option`s.

use serde::{Deserialize, Deserializer};

use crate::domain::{Airline, AirlineCode, Airport, IataCode};

/// Deserialize a string field, mapping the `\N` sentinel (and empty
/// strings) to `None`.
fn sentinel<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() || raw == "\\N" {
        Ok(None)
    } else {
        Ok(Some(raw))
    }
}

/// One row of the airports table.
///
/// Column order matches `airports.dat`: id, name, city, country, IATA,
/// ICAO, latitude, longitude, altitude, timezone, DST, tz, type, source.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportRecord {
    pub id: i32,
    #[serde(deserialize_with = "sentinel")]
    pub name: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub city: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub country: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub icao: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    #[serde(deserialize_with = "sentinel")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub dst: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub tz: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub source: Option<String>,
}

impl AirportRecord {
    /// Convert to a validated [`Airport`].
    ///
    /// Returns `None` when the code, city, or name is missing or the code
    /// is not a well-formed IATA code. Such rows are excluded from the
    /// network entirely.
    pub fn to_airport(&self) -> Option<Airport> {
        let code = IataCode::parse(self.iata.as_deref()?).ok()?;
        let city = self.city.clone()?;
        let name = self.name.clone()?;

        Some(Airport {
            code,
            name,
            city,
            country: self.country.clone().unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

/// One row of the airlines table.
///
/// Column order matches `airlines.dat`: id, name, alias, IATA, ICAO,
/// callsign, country, active.
#[derive(Debug, Clone, Deserialize)]
pub struct AirlineRecord {
    pub id: i32,
    #[serde(deserialize_with = "sentinel")]
    pub name: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub alias: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub icao: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub callsign: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub country: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub active: Option<String>,
}

impl AirlineRecord {
    /// Convert to a validated [`Airline`].
    ///
    /// Returns `None` when the code is missing or malformed. A missing
    /// display name falls back to the code itself.
    pub fn to_airline(&self) -> Option<Airline> {
        let code = AirlineCode::parse(self.iata.as_deref()?).ok()?;
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| code.as_str().to_string());

        Some(Airline {
            code,
            name,
            active: self.active.as_deref() == Some("Y"),
        })
    }
}

/// One row of the routes table.
///
/// Column order matches `routes.dat`: airline, airline id, source airport,
/// source airport id, destination airport, destination airport id,
/// codeshare, stops, equipment.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    #[serde(deserialize_with = "sentinel")]
    pub airline: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub airline_id: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub source_airport: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub source_airport_id: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub dest_airport: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub dest_airport_id: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub codeshare: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub stops: Option<String>,
    #[serde(deserialize_with = "sentinel")]
    pub equipment: Option<String>,
}

impl RouteRecord {
    /// The route's endpoint codes, when both parse.
    pub fn endpoints(&self) -> Option<(IataCode, IataCode)> {
        let source = IataCode::parse(self.source_airport.as_deref()?).ok()?;
        let dest = IataCode::parse(self.dest_airport.as_deref()?).ok()?;
        Some((source, dest))
    }

    /// The operating airline's code, when present and well formed.
    pub fn airline_code(&self) -> Option<AirlineCode> {
        AirlineCode::parse(self.airline.as_deref()?).ok()
    }
}
