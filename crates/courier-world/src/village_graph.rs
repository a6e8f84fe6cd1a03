//! Village graph: locations as nodes, roads as undirected edges.
//!
//! The [`VillageGraph`] is built once from a static road list and never
//! mutated afterwards. Each location maps to the ordered list of its direct
//! neighbors; the order is the order in which roads were listed, and the
//! route finder relies on it to break ties between equally short routes.

use std::collections::BTreeMap;

use courier_types::Location;
use serde::Serialize;
use tracing::debug;

use crate::error::WorldError;

/// Undirected adjacency structure over named locations.
///
/// Invariant: if `b` is a neighbor of `a`, then `a` is a neighbor of `b`.
/// Only the constructors can add roads, so the invariant holds for every
/// value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VillageGraph {
    /// Location -> neighbors in road-list order.
    adjacency: BTreeMap<Location, Vec<Location>>,
}

impl VillageGraph {
    /// Build a graph from `"From-To"` road strings.
    ///
    /// Each road is split on its first `-` and both halves are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::MalformedRoad`] for a road without a separator
    /// or with an empty endpoint, and [`WorldError::SelfLoop`] for a road
    /// whose endpoints are equal.
    pub fn from_roads<S: AsRef<str>>(roads: &[S]) -> Result<Self, WorldError> {
        let mut edges = Vec::with_capacity(roads.len());
        for road in roads {
            let road = road.as_ref();
            let Some((from, to)) = road.split_once('-') else {
                return Err(WorldError::MalformedRoad(road.to_owned()));
            };
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                return Err(WorldError::MalformedRoad(road.to_owned()));
            }
            edges.push((Location::from(from), Location::from(to)));
        }
        Self::from_edges(edges)
    }

    /// Build a graph from location pairs.
    ///
    /// Both directions of every edge are registered. Repeated edges are
    /// idempotent: a neighbor is only listed once.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SelfLoop`] if an edge connects a location to
    /// itself.
    pub fn from_edges<I, A, B>(edges: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Location>,
        B: Into<Location>,
    {
        let mut graph = Self::default();
        for (from, to) in edges {
            let (from, to) = (from.into(), to.into());
            if from == to {
                return Err(WorldError::SelfLoop(from));
            }
            graph.connect(from.clone(), to.clone());
            graph.connect(to, from);
        }
        debug!(
            locations = graph.location_count(),
            roads = graph.road_count(),
            "Village graph built"
        );
        Ok(graph)
    }

    fn connect(&mut self, from: Location, to: Location) {
        let neighbors = self.adjacency.entry(from).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }

    /// Direct neighbors of a location, in road-list order.
    ///
    /// Unknown locations have no neighbors.
    pub fn neighbors(&self, location: &Location) -> &[Location] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Return `true` if the location is part of the graph.
    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Return `true` if a road connects `from` directly to `to`.
    pub fn is_adjacent(&self, from: &Location, to: &Location) -> bool {
        self.neighbors(from).contains(to)
    }

    /// Iterate over all locations in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.adjacency.keys()
    }

    /// Number of locations in the graph.
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected roads.
    pub fn road_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(Vec::len).sum();
        directed.checked_div(2).unwrap_or(0)
    }

    /// Check that every neighbor relation has its reverse.
    pub fn is_undirected(&self) -> bool {
        self.adjacency.iter().all(|(from, neighbors)| {
            neighbors.iter().all(|to| self.is_adjacent(to, from))
        })
    }
}
