//! Free-text origin/destination resolution.
//!
//! Turns phrases like "fly from Mumbai to Paris" into a pair of airport
//! codes by matching against the popularity-ordered directory labels, so
//! ambiguous city names resolve to the busiest matching airport.

use crate::dataset::AirportDirectory;
use crate::domain::IataCode;

/// Split a route query into origin and destination phrases.
///
/// Recognizes "from X to Y" first, then a bare "X to Y". Returns `None`
/// when neither pattern applies.
pub fn parse_route_query(text: &str) -> Option<(String, String)> {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let after_from = lowered
        .split_once("from ")
        .map(|(_, rest)| rest.to_string());
    let candidate = after_from.unwrap_or(lowered);

    let (origin, dest) = candidate.split_once(" to ")?;
    let origin = origin.trim();
    let dest = dest.trim();

    if origin.is_empty() || dest.is_empty() {
        return None;
    }

    Some((origin.to_string(), dest.to_string()))
}

/// Resolve a phrase to an airport code by label substring, most popular
/// airport first.
pub fn resolve_phrase(directory: &AirportDirectory, phrase: &str) -> Option<IataCode> {
    let needle = phrase.to_lowercase();
    directory
        .entries()
        .iter()
        .find(|e| e.label.to_lowercase().contains(&needle))
        .map(|e| e.airport.code)
}

/// Resolve a full route query to an origin/destination code pair.
pub fn resolve_route_query(
    directory: &AirportDirectory,
    text: &str,
) -> Option<(IataCode, IataCode)> {
    let (origin_phrase, dest_phrase) = parse_route_query(text)?;
    let origin = resolve_phrase(directory, &origin_phrase)?;
    let dest = resolve_phrase(directory, &dest_phrase)?;
    Some((origin, dest))
}
