//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types that represent
//! validated airline data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airline;
mod airport;
mod leg;

pub use airline::{Airline, AirlineCode, InvalidAirlineCode};
pub use airport::{Airport, IataCode, InvalidIata};
pub use leg::{Itinerary, InvalidItinerary, Leg};
