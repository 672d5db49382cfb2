//! Minimum-distance itinerary planning.
//!
//! Answers: "what is the shortest multi-leg routing between these two
//! airports over the current network?" Search is Dijkstra over the
//! distance-weighted graph; the result is expanded into read-only legs
//! for the estimator and the web layer.

mod search;


pub use search::{PathResult, find_shortest_path};
