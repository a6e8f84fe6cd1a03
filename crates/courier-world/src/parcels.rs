//! Random parcel generation.

use courier_types::{Location, Parcel};

use crate::error::WorldError;
use crate::random::RandomPick;
use crate::village_graph::VillageGraph;

/// Generate `count` parcels with a random place and a different random
/// address.
///
/// The address is re-drawn until it differs from the place, so a picker
/// that can only ever return one location will not terminate. Any uniform
/// picker over two or more locations finishes with probability one.
///
/// # Errors
///
/// Returns [`WorldError::TooFewLocations`] if the graph has fewer than two
/// locations, or [`WorldError::NoChoice`] if the picker returns nothing.
pub fn random_parcels<P: RandomPick>(
    graph: &VillageGraph,
    count: usize,
    picker: &mut P,
) -> Result<Vec<Parcel>, WorldError> {
    let locations: Vec<Location> = graph.locations().cloned().collect();
    if locations.len() < 2 {
        return Err(WorldError::TooFewLocations {
            found: locations.len(),
        });
    }

    let mut parcels = Vec::with_capacity(count);
    for _ in 0..count {
        let place = picker.pick(&locations).ok_or(WorldError::NoChoice)?;
        let address = loop {
            let candidate = picker.pick(&locations).ok_or(WorldError::NoChoice)?;
            if candidate != place {
                break candidate;
            }
        };
        parcels.push(Parcel {
            place: place.clone(),
            address: address.clone(),
        });
    }
    Ok(parcels)
}
