//! Immutable world snapshot: where the robot is and which parcels remain.
//!
//! A [`VillageState`] is never mutated. [`VillageState::move_to`] computes
//! the successor state for a one-hop move, carrying every parcel at the
//! robot's location along and dropping parcels that reach their address.

use courier_types::{Location, Parcel};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::WorldError;
use crate::parcels::random_parcels;
use crate::random::RandomPick;
use crate::village_graph::VillageGraph;

/// Robot location plus the ordered list of undelivered parcels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageState {
    place: Location,
    parcels: Vec<Parcel>,
}

impl VillageState {
    /// Create a state at `place` holding `parcels`.
    ///
    /// Parcels that are already at their address are dropped, so every
    /// parcel in a state is still outstanding.
    pub fn new(place: impl Into<Location>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels: parcels.into_iter().filter(|p| !p.is_delivered()).collect(),
        }
    }

    /// Create a state at `start` with `count` randomly scattered parcels.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::LocationNotFound`] if `start` is not in the
    /// graph, or any error from [`random_parcels`].
    pub fn random<P: RandomPick>(
        graph: &VillageGraph,
        start: impl Into<Location>,
        count: usize,
        picker: &mut P,
    ) -> Result<Self, WorldError> {
        let start = start.into();
        if !graph.contains(&start) {
            return Err(WorldError::LocationNotFound(start));
        }
        let parcels = random_parcels(graph, count, picker)?;
        Ok(Self::new(start, parcels))
    }

    /// The robot's current location.
    pub const fn place(&self) -> &Location {
        &self.place
    }

    /// Outstanding parcels in their original order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Return `true` once every parcel has been delivered.
    pub fn is_finished(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Move the robot one hop to `destination`.
    ///
    /// If `destination` is not a direct neighbor of the current place the
    /// move is illegal and the returned state equals `self`. Otherwise every
    /// parcel at the current place travels with the robot, then every parcel
    /// addressed to `destination` is delivered and removed, whether it was
    /// carried or not. Remaining parcels keep their relative order.
    #[must_use]
    pub fn move_to(&self, graph: &VillageGraph, destination: &Location) -> Self {
        if !graph.is_adjacent(&self.place, destination) {
            trace!(from = %self.place, to = %destination, "Ignoring move to non-neighbor");
            return self.clone();
        }

        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel {
                        place: destination.clone(),
                        address: p.address.clone(),
                    }
                } else {
                    p.clone()
                }
            })
            .filter(|p| p.address != *destination)
            .collect();

        Self {
            place: destination.clone(),
            parcels,
        }
    }
}
