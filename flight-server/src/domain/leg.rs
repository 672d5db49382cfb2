//! Itinerary legs and multi-leg itineraries.

use chrono::Duration;

use crate::geo::GeoPoint;

use super::IataCode;

/// Assumed average cruising speed used for duration estimates (km/h).
const CRUISE_SPEED_KMH: f64 = 800.0;

/// Fixed ground-handling overhead added to every leg (minutes).
const GROUND_OVERHEAD_MINS: i64 = 45;

/// One direct flight segment in a multi-hop itinerary.
///
/// Legs are produced by the planner and never mutated afterwards; the
/// estimator and the web layer only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Departure airport code.
    pub from: IataCode,

    /// Arrival airport code.
    pub to: IataCode,

    /// Display name of the operating airline.
    pub airline: String,

    /// Great-circle distance of this segment in kilometres.
    pub distance_km: f64,

    /// Departure airport position.
    pub from_position: GeoPoint,

    /// Arrival airport position.
    pub to_position: GeoPoint,
}

impl Leg {
    /// Estimated block time for this leg.
    ///
    /// Distance at the assumed cruising speed plus the fixed
    /// ground-handling overhead, truncated to whole minutes.
    pub fn duration_estimate(&self) -> Duration {
        let airborne = (self.distance_km / CRUISE_SPEED_KMH) * 60.0;
        Duration::minutes(airborne as i64 + GROUND_OVERHEAD_MINS)
    }
}

/// Error returned when legs do not form a connected itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItinerary {
    /// A leg departs from somewhere other than where the previous one
    /// arrived.
    #[error("leg {position} departs from {found}, expected {expected}")]
    BrokenChain {
        position: usize,
        expected: IataCode,
        found: IataCode,
    },
}

/// An ordered sequence of legs with the cumulative distance.
///
/// The total always equals the sum of the per-leg distances; the
/// constructor computes it, so the two cannot drift apart. An itinerary
/// with no legs (origin equals destination) has zero total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
    total_distance_km: f64,
}

impl Itinerary {
    /// Build an itinerary from legs, validating that they chain.
    pub fn new(legs: Vec<Leg>) -> Result<Self, InvalidItinerary> {
        for (i, pair) in legs.windows(2).enumerate() {
            if pair[0].to != pair[1].from {
                return Err(InvalidItinerary::BrokenChain {
                    position: i + 1,
                    expected: pair[0].to,
                    found: pair[1].from,
                });
            }
        }

        let total_distance_km = legs.iter().map(|l| l.distance_km).sum();

        Ok(Self {
            legs,
            total_distance_km,
        })
    }

    /// The legs, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total great-circle distance in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Departure airport of the first leg, if any.
    pub fn origin(&self) -> Option<IataCode> {
        self.legs.first().map(|l| l.from)
    }

    /// Arrival airport of the last leg, if any.
    pub fn destination(&self) -> Option<IataCode> {
        self.legs.last().map(|l| l.to)
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// True when the itinerary has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}
