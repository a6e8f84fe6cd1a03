//! Shortest-hop route finding over the village graph.
//!
//! [`find_route`] runs a breadth-first search from the origin. The work list
//! is a FIFO queue of `(location, route so far)` pairs and a visited set keyed
//! by location. Neighbors are expanded in the order the graph lists them and
//! the first entry that reaches the target wins, so among equally short
//! routes the earliest-discovered one is returned.

use std::collections::{BTreeSet, VecDeque};

use courier_types::{Location, Route};

use crate::village_graph::VillageGraph;

/// Find a shortest route (by hop count) from `from` to `to`.
///
/// The returned route excludes `from` and ends at `to`. Returns an empty
/// route when `from == to`, and `None` when `to` cannot be reached from
/// `from` or either location is not part of the graph.
pub fn find_route(graph: &VillageGraph, from: &Location, to: &Location) -> Option<Route> {
    if from == to {
        return Some(Route::new());
    }
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }

    let mut visited: BTreeSet<&Location> = BTreeSet::new();
    let mut work: VecDeque<(&Location, Route)> = VecDeque::new();
    visited.insert(from);
    work.push_back((from, Route::new()));

    while let Some((at, route)) = work.pop_front() {
        for place in graph.neighbors(at) {
            if place == to {
                return Some(route.extended(place.clone()));
            }
            if visited.insert(place) {
                work.push_back((place, route.extended(place.clone())));
            }
        }
    }

    None
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;
    use crate::starting_world::create_starting_village;

    fn loc(name: &str) -> Location {
        Location::from(name)
    }

    fn names(route: &Route) -> Vec<&str> {
        route.steps().iter().map(Location::as_str).collect()
    }

    /// Hop distances from `from` to every reachable location, computed
    /// layer by layer without tracking routes.
    fn distance_oracle(graph: &VillageGraph, from: &Location) -> BTreeMap<Location, usize> {
        let mut dist = BTreeMap::new();
        dist.insert(from.clone(), 0_usize);
        let mut frontier = vec![from.clone()];
        let mut depth = 0;
        while !frontier.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for at in &frontier {
                for n in graph.neighbors(at) {
                    if !dist.contains_key(n) {
                        dist.insert(n.clone(), depth);
                        next.push(n.clone());
                    }
                }
            }
            frontier = next;
        }
        dist
    }

    fn assert_valid_walk(graph: &VillageGraph, from: &Location, to: &Location, route: &Route) {
        let mut at = from;
        for step in route.steps() {
            assert!(graph.is_adjacent(at, step), "{at} -> {step} is not a road");
            at = step;
        }
        assert_eq!(at, to);
    }

    #[test]
    fn same_location_gives_empty_route() {
        let graph = VillageGraph::from_roads(&["A-B"]).unwrap();
        assert_eq!(find_route(&graph, &loc("A"), &loc("A")), Some(Route::new()));
    }

    #[test]
    fn same_location_empty_even_when_isolated() {
        let graph = VillageGraph::from_roads(&["A-B"]).unwrap();
        assert_eq!(find_route(&graph, &loc("Z"), &loc("Z")), Some(Route::new()));
    }

    #[test]
    fn adjacent_location_is_one_hop() {
        let graph = VillageGraph::from_roads(&["A-B", "B-C"]).unwrap();
        let route = find_route(&graph, &loc("A"), &loc("B")).unwrap();
        assert_eq!(names(&route), vec!["B"]);
    }

    #[test]
    fn multi_hop_excludes_start_and_ends_at_target() {
        let graph = VillageGraph::from_roads(&["A-B", "B-C"]).unwrap();
        let route = find_route(&graph, &loc("A"), &loc("C")).unwrap();
        assert_eq!(names(&route), vec!["B", "C"]);
        let back = find_route(&graph, &loc("C"), &loc("A")).unwrap();
        assert_eq!(names(&back), vec!["B", "A"]);
    }

    #[test]
    fn ties_broken_by_neighbor_order() {
        // A-B-D and A-C-D are both two hops; B is listed before C.
        let graph = VillageGraph::from_roads(&["A-B", "A-C", "B-D", "C-D"]).unwrap();
        let route = find_route(&graph, &loc("A"), &loc("D")).unwrap();
        assert_eq!(names(&route), vec!["B", "D"]);

        let swapped = VillageGraph::from_roads(&["A-C", "A-B", "B-D", "C-D"]).unwrap();
        let route = find_route(&swapped, &loc("A"), &loc("D")).unwrap();
        assert_eq!(names(&route), vec!["C", "D"]);
    }

    #[test]
    fn prefers_short_cut_over_long_way_round() {
        let graph = VillageGraph::from_roads(&["A-B", "B-C", "C-D", "D-E", "A-E"]).unwrap();
        let route = find_route(&graph, &loc("A"), &loc("D")).unwrap();
        assert_eq!(names(&route), vec!["E", "D"]);
    }

    #[test]
    fn disconnected_target_is_none() {
        let graph = VillageGraph::from_roads(&["A-B", "C-D"]).unwrap();
        assert_eq!(find_route(&graph, &loc("A"), &loc("D")), None);
    }

    #[test]
    fn unknown_endpoints_are_none() {
        let graph = VillageGraph::from_roads(&["A-B"]).unwrap();
        assert_eq!(find_route(&graph, &loc("A"), &loc("Z")), None);
        assert_eq!(find_route(&graph, &loc("Z"), &loc("A")), None);
    }

    #[test]
    fn village_routes_match_oracle_for_every_pair() {
        let graph = create_starting_village().unwrap();
        for from in graph.locations() {
            let dist = distance_oracle(&graph, from);
            for to in graph.locations() {
                let route = find_route(&graph, from, to).unwrap();
                assert_eq!(route.len(), dist[to], "{from} -> {to}");
                assert_valid_walk(&graph, from, to, &route);
            }
        }
    }

    #[test]
    fn village_known_route() {
        let graph = create_starting_village().unwrap();
        let route = find_route(&graph, &loc("Post Office"), &loc("Daria's House")).unwrap();
        assert_eq!(names(&route), vec!["Marketplace", "Town Hall", "Daria's House"]);
    }

    fn arb_graph() -> impl Strategy<Value = VillageGraph> {
        prop::collection::vec((0_u8..8, 0_u8..8), 0..16).prop_map(|pairs| {
            let edges: Vec<(String, String)> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (format!("L{a}"), format!("L{b}")))
                .collect();
            VillageGraph::from_edges(edges).unwrap()
        })
    }

    proptest! {
        #[test]
        fn route_length_matches_bfs_oracle(graph in arb_graph()) {
            for from in graph.locations() {
                let dist = distance_oracle(&graph, from);
                for to in graph.locations() {
                    match (find_route(&graph, from, to), dist.get(to)) {
                        (Some(route), Some(&d)) => {
                            prop_assert_eq!(route.len(), d);
                            assert_valid_walk(&graph, from, to, &route);
                        }
                        (None, None) => {}
                        (found, expected) => {
                            prop_assert!(false, "{} -> {}: got {:?}, oracle {:?}", from, to, found, expected);
                        }
                    }
                }
            }
        }
    }
}
