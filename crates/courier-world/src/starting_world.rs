//! Default starting village for the Courier simulation.
//!
//! Eleven locations connected by fourteen roads, plus the fixed mail tour
//! that visits every location at least once and returns to the post office.

use courier_types::Location;

use crate::error::WorldError;
use crate::village_graph::VillageGraph;

/// Where the robot starts in the default village.
pub const POST_OFFICE: &str = "Post Office";

/// Roads of the default village as `"From-To"` strings.
pub const VILLAGE_ROADS: &[&str] = &[
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// A tour starting next to the post office that passes every location.
///
/// Walking it twice from the post office is enough to pick up and deliver
/// any parcel set.
pub const MAIL_ROUTE: &[&str] = &[
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

/// Build the default village graph.
///
/// # Errors
///
/// Returns [`WorldError`] if the road table is malformed (should not happen
/// with the hard-coded data).
pub fn create_starting_village() -> Result<VillageGraph, WorldError> {
    VillageGraph::from_roads(VILLAGE_ROADS)
}

/// The mail tour as owned locations.
pub fn mail_route() -> Vec<Location> {
    MAIL_ROUTE.iter().copied().map(Location::from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn village_shape() {
        let graph = create_starting_village().unwrap();
        assert_eq!(graph.location_count(), 11);
        assert_eq!(graph.road_count(), 14);
        assert!(graph.is_undirected());
        assert!(graph.contains(&Location::from(POST_OFFICE)));
    }

    #[test]
    fn mail_route_is_a_walk_from_post_office() {
        let graph = create_starting_village().unwrap();
        let mut at = Location::from(POST_OFFICE);
        for stop in mail_route() {
            assert!(graph.is_adjacent(&at, &stop), "{at} -> {stop}");
            at = stop;
        }
        assert_eq!(at, Location::from(POST_OFFICE));
    }

    #[test]
    fn mail_route_covers_every_location() {
        let graph = create_starting_village().unwrap();
        let visited: BTreeSet<Location> = mail_route().into_iter().collect();
        let all: BTreeSet<Location> = graph.locations().cloned().collect();
        assert_eq!(visited, all);
    }
}
