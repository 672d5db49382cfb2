//! The weighted airport route network.
//!
//! Joins the airport, airline, and route tables into an undirected graph
//! whose edge weights are great-circle distances. The graph is rebuilt
//! wholesale whenever the airline filter changes; it is never mutated in
//! place after construction.

mod builder;
mod graph;

pub use builder::{AirlineFilter, build_graph};
pub use graph::{RouteEdge, RouteGraph};
