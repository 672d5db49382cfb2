//! Building the route graph from the raw tables.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dataset::Dataset;
use crate::domain::{Airline, AirlineCode, Airport, IataCode};
use crate::geo;

use super::graph::{RouteEdge, RouteGraph};

/// Which airlines' routes participate in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineFilter(Option<HashSet<AirlineCode>>);

impl AirlineFilter {
    /// No restriction: every route participates.
    pub fn all() -> Self {
        Self(None)
    }

    /// Restrict to the given airline codes.
    pub fn only(codes: impl IntoIterator<Item = AirlineCode>) -> Self {
        Self(Some(codes.into_iter().collect()))
    }

    /// Whether a route operated by `code` passes the filter.
    ///
    /// A restricted filter rejects routes with no airline column, since
    /// they cannot be attributed to a selected carrier.
    pub fn allows(&self, code: Option<AirlineCode>) -> bool {
        match &self.0 {
            None => true,
            Some(selected) => code.is_some_and(|c| selected.contains(&c)),
        }
    }

    /// The selected codes in sorted order, or `None` when unrestricted.
    ///
    /// Sorting makes the selection usable as a cache key.
    pub fn selected(&self) -> Option<Vec<AirlineCode>> {
        self.0.as_ref().map(|set| {
            let mut codes: Vec<AirlineCode> = set.iter().copied().collect();
            codes.sort();
            codes
        })
    }
}

/// Join the three tables into a weighted undirected route graph.
///
/// - airports missing code/city/name are excluded (first occurrence of a
///   code wins);
/// - routes survive only if both endpoints are valid airports, the
///   operating airline is not known-inactive, and the filter allows it;
/// - each surviving route becomes an edge weighted by great-circle
///   distance, with the airline's display name attached (raw code when
///   the airline table has no entry for it).
///
/// Input tables are not mutated; the graph is built fresh on every call.
pub fn build_graph(dataset: &Dataset, filter: &AirlineFilter) -> RouteGraph {
    let airports = index_airports(dataset);
    let airlines = index_airlines(dataset);

    let mut graph = RouteGraph::new();
    let mut dropped_endpoint = 0usize;
    let mut dropped_inactive = 0usize;
    let mut dropped_filtered = 0usize;

    for route in &dataset.routes {
        let Some((source_code, dest_code)) = route.endpoints() else {
            dropped_endpoint += 1;
            continue;
        };

        let (Some(source), Some(dest)) = (airports.get(&source_code), airports.get(&dest_code))
        else {
            dropped_endpoint += 1;
            continue;
        };

        let airline_code = route.airline_code();
        let known = airline_code.and_then(|c| airlines.get(&c));
        if known.is_some_and(|a| !a.active) {
            dropped_inactive += 1;
            continue;
        }

        if !filter.allows(airline_code) {
            dropped_filtered += 1;
            continue;
        }

        let airline_name = match known {
            Some(airline) => airline.name.clone(),
            None => route.airline.clone().unwrap_or_default(),
        };

        let distance_km = geo::haversine_km(source.position(), dest.position());

        graph.insert_edge(
            source,
            dest,
            RouteEdge {
                distance_km,
                airline: airline_name,
            },
        );
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped_endpoint,
        dropped_inactive,
        dropped_filtered,
        "route graph built"
    );

    graph
}

/// Index valid airports by code, first occurrence winning.
fn index_airports(dataset: &Dataset) -> HashMap<IataCode, Airport> {
    let mut index = HashMap::new();
    for record in &dataset.airports {
        if let Some(airport) = record.to_airport() {
            index.entry(airport.code).or_insert(airport);
        }
    }
    index
}

/// Index airlines by code, first occurrence winning.
fn index_airlines(dataset: &Dataset) -> HashMap<AirlineCode, Airline> {
    let mut index = HashMap::new();
    for record in &dataset.airlines {
        if let Some(airline) = record.to_airline() {
            index.entry(airline.code).or_insert(airline);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::records::{AirlineRecord, AirportRecord, RouteRecord};

    fn airport(iata: &str, lat: f64, lon: f64) -> AirportRecord {
        AirportRecord {
            id: 0,
            name: Some(format!("{iata} Airport")),
            city: Some(format!("{iata} City")),
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

    fn airline(iata: &str, name: &str, active: &str) -> AirlineRecord {
        AirlineRecord {
            id: 0,
            name: Some(name.to_string()),
            alias: None,
            iata: Some(iata.to_string()),
            icao: None,
            callsign: None,
            country: None,
            active: Some(active.to_string()),
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

    fn code(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    #[test]
    fn builds_weighted_edges_with_airline_names() {
        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), airport("JFK", 40.64, -73.78)],
            airlines: vec![airline("BA", "British Airways", "Y")],
            routes: vec![route("BA", "LHR", "JFK")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());

        assert_eq!(graph.node_count(), 2);
        let edge = graph.edge(&code("LHR"), &code("JFK")).unwrap();
        assert_eq!(edge.airline, "British Airways");
        assert!((5540.0..=5600.0).contains(&edge.distance_km));
    }

    #[test]
    fn route_to_unknown_airport_is_dropped() {
        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45)],
            airlines: vec![airline("BA", "British Airways", "Y")],
            routes: vec![route("BA", "LHR", "JFK")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn airport_excluded_by_filtering_never_becomes_a_node() {
        // JFK's record is missing its city, so it is not a valid airport
        // and neither endpoint of the route may appear in the graph.
        let mut broken = airport("JFK", 40.64, -73.78);
        broken.city = None;

        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), broken],
            airlines: vec![airline("BA", "British Airways", "Y")],
            routes: vec![route("BA", "LHR", "JFK")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());
        assert!(!graph.contains(&code("JFK")));
        assert!(!graph.contains(&code("LHR")));
    }

    #[test]
    fn inactive_airline_routes_are_dropped() {
        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), airport("JFK", 40.64, -73.78)],
            airlines: vec![airline("ZZ", "Defunct Air", "N")],
            routes: vec![route("ZZ", "LHR", "JFK")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unknown_airline_keeps_route_with_raw_code() {
        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), airport("JFK", 40.64, -73.78)],
            airlines: vec![],
            routes: vec![route("XX", "LHR", "JFK")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());
        let edge = graph.edge(&code("LHR"), &code("JFK")).unwrap();
        assert_eq!(edge.airline, "XX");
    }

    #[test]
    fn later_route_overwrites_earlier_for_same_pair() {
        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), airport("JFK", 40.64, -73.78)],
            airlines: vec![
                airline("BA", "British Airways", "Y"),
                airline("VS", "Virgin Atlantic", "Y"),
            ],
            routes: vec![route("BA", "LHR", "JFK"), route("VS", "JFK", "LHR")],
        };

        let graph = build_graph(&dataset, &AirlineFilter::all());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.edge(&code("LHR"), &code("JFK")).unwrap().airline,
            "Virgin Atlantic"
        );
    }

    #[test]
    fn narrower_filter_never_adds_nodes_or_edges() {
        let dataset = Dataset {
            airports: vec![
                airport("LHR", 51.47, -0.45),
                airport("JFK", 40.64, -73.78),
                airport("CDG", 49.01, 2.55),
            ],
            airlines: vec![
                airline("BA", "British Airways", "Y"),
                airline("AF", "Air France", "Y"),
            ],
            routes: vec![route("BA", "LHR", "JFK"), route("AF", "CDG", "JFK")],
        };

        let unfiltered = build_graph(&dataset, &AirlineFilter::all());
        let narrowed = build_graph(
            &dataset,
            &AirlineFilter::only([AirlineCode::parse("BA").unwrap()]),
        );

        assert!(narrowed.node_count() <= unfiltered.node_count());
        assert!(narrowed.edge_count() <= unfiltered.edge_count());
        for node in narrowed.nodes() {
            assert!(unfiltered.contains(&node.code));
        }
        assert!(!narrowed.contains(&code("CDG")));
    }

    #[test]
    fn restricted_filter_rejects_routes_without_airline() {
        let mut no_airline = route("XX", "LHR", "JFK");
        no_airline.airline = None;

        let dataset = Dataset {
            airports: vec![airport("LHR", 51.47, -0.45), airport("JFK", 40.64, -73.78)],
            airlines: vec![airline("BA", "British Airways", "Y")],
            routes: vec![no_airline],
        };

        let filter = AirlineFilter::only([AirlineCode::parse("BA").unwrap()]);
        let graph = build_graph(&dataset, &filter);
        assert_eq!(graph.edge_count(), 0);

        // Unrestricted, the same route survives.
        let graph = build_graph(&dataset, &AirlineFilter::all());
        assert_eq!(graph.edge_count(), 1);
    }
}
