//! Parcel and route value types.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A parcel waiting somewhere in the village.
///
/// `place` is where the parcel currently sits (or the robot's location while
/// it is being carried), `address` is where it must be delivered. A parcel
/// with `place == address` has been delivered and must not exist in a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parcel {
    /// Current location of the parcel.
    pub place: Location,
    /// Delivery destination.
    pub address: Location,
}

impl Parcel {
    /// Create a parcel at `place` addressed to `address`.
    pub fn new(place: impl Into<Location>, address: impl Into<Location>) -> Self {
        Self {
            place: place.into(),
            address: address.into(),
        }
    }

    /// Return `true` if the parcel is already at its address.
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}

/// An ordered list of locations to visit, excluding the starting location
/// and ending at the target.
///
/// An empty route means "already at the target".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    steps: Vec<Location>,
}

impl Route {
    /// Create an empty route.
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the route.
    pub fn push(&mut self, location: Location) {
        self.steps.push(location);
    }

    /// Return a copy of this route extended by one step.
    #[must_use]
    pub fn extended(&self, location: Location) -> Self {
        let mut next = self.clone();
        next.push(location);
        next
    }

    /// Number of hops in the route.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Return `true` if the route has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The locations in visiting order.
    pub fn steps(&self) -> &[Location] {
        &self.steps
    }

    /// The first hop, if any.
    pub fn first(&self) -> Option<&Location> {
        self.steps.first()
    }

    /// The final location (the target), if any.
    pub fn last(&self) -> Option<&Location> {
        self.steps.last()
    }

    /// Consume the route and return its steps.
    pub fn into_steps(self) -> Vec<Location> {
        self.steps
    }
}

impl From<Vec<Location>> for Route {
    fn from(steps: Vec<Location>) -> Self {
        Self { steps }
    }
}

impl FromIterator<Location> for Route {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parcel_delivered_when_place_matches_address() {
        assert!(Parcel::new("Farm", "Farm").is_delivered());
        assert!(!Parcel::new("Farm", "Shop").is_delivered());
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let base = Route::from(vec![Location::from("A")]);
        let longer = base.extended(Location::from("B"));
        assert_eq!(base.len(), 1);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.last(), Some(&Location::from("B")));
        assert_eq!(longer.first(), Some(&Location::from("A")));
    }

    #[test]
    fn empty_route_has_no_first_step() {
        let route = Route::new();
        assert!(route.is_empty());
        assert!(route.first().is_none());
    }

    #[test]
    fn route_serializes_as_list() {
        let route: Route = ["A", "B"].into_iter().map(Location::from).collect();
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, "[\"A\",\"B\"]");
    }
}
