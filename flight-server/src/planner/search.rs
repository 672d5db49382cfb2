//! Shortest-itinerary search over the route graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::domain::{IataCode, Itinerary, Leg};
use crate::network::RouteGraph;

/// Outcome of a shortest-path query.
///
/// An unreachable destination is a normal outcome of filtering, not an
/// error: a query between nodes the current airline selection removed
/// reports `NoPath` exactly like a genuinely disconnected pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    /// A minimum-distance itinerary was found.
    Found(Itinerary),

    /// Origin or destination is absent, or no connecting path exists.
    NoPath,
}

impl PathResult {
    /// The itinerary, when one was found.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            PathResult::Found(it) => Some(it),
            PathResult::NoPath => None,
        }
    }

    /// True when a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// Total distance of the result; zero for `NoPath`.
    pub fn total_distance_km(&self) -> f64 {
        self.itinerary().map_or(0.0, Itinerary::total_distance_km)
    }
}

/// Edge cost ordered by `f64::total_cmp`.
///
/// All edge weights are great-circle distances, so they are non-negative
/// and never NaN; total_cmp gives the heap a full ordering anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Find the minimum-distance itinerary between two airports.
///
/// Dijkstra over the non-negative distance weights. Among equal-cost
/// paths the returned one is implementation-defined; the airport code is
/// a secondary heap key, so repeated runs over the same graph explore in
/// the same order and return the same path.
pub fn find_shortest_path(
    graph: &RouteGraph,
    origin: IataCode,
    destination: IataCode,
) -> PathResult {
    // Absent endpoints are a normal outcome of airline filtering.
    if !graph.contains(&origin) || !graph.contains(&destination) {
        return PathResult::NoPath;
    }

    if origin == destination {
        return match Itinerary::new(Vec::new()) {
            Ok(it) => PathResult::Found(it),
            Err(_) => PathResult::NoPath,
        };
    }

    // dist[v] = best known cost to reach v.
    let mut dist: HashMap<IataCode, f64> = HashMap::new();
    // prev[v] = predecessor of v on the best known path.
    let mut prev: HashMap<IataCode, IataCode> = HashMap::new();

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key IataCode ensures deterministic exploration order.
    let mut heap: BinaryHeap<Reverse<(Cost, IataCode)>> = BinaryHeap::new();

    dist.insert(origin, 0.0);
    heap.push(Reverse((Cost(0.0), origin)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if node == destination {
            return expand(graph, &prev, origin, destination);
        }

        // Skip stale heap entries.
        if dist.get(&node).is_some_and(|&d| cost > d) {
            continue;
        }

        for (&neighbor, edge) in graph.neighbors(&node) {
            let next_cost = cost + edge.distance_km;
            let better = dist.get(&neighbor).is_none_or(|&d| next_cost < d);

            if better {
                dist.insert(neighbor, next_cost);
                prev.insert(neighbor, node);
                heap.push(Reverse((Cost(next_cost), neighbor)));
            }
        }
    }

    trace!(%origin, %destination, "no connecting path");
    PathResult::NoPath
}

/// Walk the predecessor chain back from the destination and expand the
/// node sequence into legs.
fn expand(
    graph: &RouteGraph,
    prev: &HashMap<IataCode, IataCode>,
    origin: IataCode,
    destination: IataCode,
) -> PathResult {
    let mut path = vec![destination];
    let mut current = destination;
    while current != origin {
        let Some(&p) = prev.get(&current) else {
            return PathResult::NoPath;
        };
        path.push(p);
        current = p;
    }
    path.reverse();

    let mut legs = Vec::with_capacity(path.len() - 1);
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (Some(edge), Some(from_node), Some(to_node)) =
            (graph.edge(&from, &to), graph.node(&from), graph.node(&to))
        else {
            return PathResult::NoPath;
        };

        legs.push(Leg {
            from,
            to,
            airline: edge.airline.clone(),
            distance_km: edge.distance_km,
            from_position: from_node.position(),
            to_position: to_node.position(),
        });
    }

    match Itinerary::new(legs) {
        Ok(it) => PathResult::Found(it),
        Err(_) => PathResult::NoPath,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Airport;
    use crate::network::{RouteEdge, RouteGraph};

    fn code(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn airport(s: &str) -> Airport {
        Airport {
            code: code(s),
            name: format!("{s} Airport"),
            city: format!("{s} City"),
            country: "Testland".to_string(),
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    fn add_edge(graph: &mut RouteGraph, a: &str, b: &str, distance_km: f64) {
        graph.insert_edge(
            &airport(a),
            &airport(b),
            RouteEdge {
                distance_km,
                airline: "Test Air".to_string(),
            },
        );
    }

    #[test]
    fn absent_origin_is_no_path() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "BBB", "CCC", 100.0);

        let result = find_shortest_path(&graph, code("AAA"), code("CCC"));
        assert_eq!(result, PathResult::NoPath);
        assert_eq!(result.total_distance_km(), 0.0);
    }

    #[test]
    fn absent_destination_is_no_path() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "AAA", "BBB", 100.0);

        let result = find_shortest_path(&graph, code("AAA"), code("ZZZ"));
        assert_eq!(result, PathResult::NoPath);
    }

    #[test]
    fn disconnected_nodes_are_no_path() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "AAA", "BBB", 100.0);
        add_edge(&mut graph, "XXX", "YYY", 100.0);

        let result = find_shortest_path(&graph, code("AAA"), code("YYY"));
        assert_eq!(result, PathResult::NoPath);
    }

    #[test]
    fn direct_edge_total_equals_weight() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "AAA", "BBB", 1234.5);

        let result = find_shortest_path(&graph, code("AAA"), code("BBB"));
        let it = result.itinerary().unwrap();
        assert_eq!(it.len(), 1);
        assert_eq!(it.total_distance_km(), 1234.5);
    }

    #[test]
    fn origin_equals_destination_yields_empty_itinerary() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "AAA", "BBB", 100.0);

        let result = find_shortest_path(&graph, code("AAA"), code("AAA"));
        let it = result.itinerary().unwrap();
        assert!(it.is_empty());
        assert_eq!(it.total_distance_km(), 0.0);
    }

    #[test]
    fn picks_shorter_of_two_routes() {
        let mut graph = RouteGraph::new();
        // Direct is longer than the two-hop detour.
        add_edge(&mut graph, "AAA", "CCC", 5000.0);
        add_edge(&mut graph, "AAA", "BBB", 1000.0);
        add_edge(&mut graph, "BBB", "CCC", 2000.0);

        let result = find_shortest_path(&graph, code("AAA"), code("CCC"));
        let it = result.itinerary().unwrap();
        assert_eq!(it.len(), 2);
        assert_eq!(it.total_distance_km(), 3000.0);
        assert_eq!(it.origin(), Some(code("AAA")));
        assert_eq!(it.destination(), Some(code("CCC")));
    }

    #[test]
    fn legs_carry_edge_data_and_positions() {
        let mut graph = RouteGraph::new();
        add_edge(&mut graph, "AAA", "BBB", 750.0);

        let result = find_shortest_path(&graph, code("AAA"), code("BBB"));
        let it = result.itinerary().unwrap();
        let leg = &it.legs()[0];

        assert_eq!(leg.airline, "Test Air");
        assert_eq!(leg.distance_km, 750.0);
        assert_eq!(leg.from_position.latitude, 10.0);
        assert_eq!(leg.to_position.longitude, 20.0);
    }
}
