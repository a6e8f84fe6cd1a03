//! Robot memory and the per-turn action.

use courier_types::{Location, Route};
use serde::{Deserialize, Serialize};

/// Residual strategy state threaded between turns: the remaining planned
/// locations, front first.
///
/// Memory is replaced wholesale every turn; robots consume the incoming
/// value and hand back a new one in their [`Action`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory {
    plan: Vec<Location>,
}

impl Memory {
    /// Memory with nothing planned.
    pub const fn empty() -> Self {
        Self { plan: Vec::new() }
    }

    /// Return `true` if nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Number of planned locations.
    pub fn len(&self) -> usize {
        self.plan.len()
    }

    /// Split off the first planned location, returning it together with
    /// the memory for the rest of the plan.
    pub fn next_step(self) -> Option<(Location, Self)> {
        let mut rest = self.plan.into_iter();
        let first = rest.next()?;
        Some((first, Self { plan: rest.collect() }))
    }
}

impl From<Vec<Location>> for Memory {
    fn from(plan: Vec<Location>) -> Self {
        Self { plan }
    }
}

impl From<Route> for Memory {
    fn from(route: Route) -> Self {
        Self {
            plan: route.into_steps(),
        }
    }
}

/// What a robot decided this turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Location to move to.
    pub direction: Location,
    /// Memory to pass into the next turn.
    pub memory: Memory,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn plan(names: &[&str]) -> Memory {
        Memory::from(names.iter().copied().map(Location::from).collect::<Vec<_>>())
    }

    #[test]
    fn next_step_splits_front() {
        let (first, rest) = plan(&["X", "Y", "Z"]).next_step().unwrap();
        assert_eq!(first, Location::from("X"));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest, plan(&["Y", "Z"]));
    }

    #[test]
    fn next_step_on_empty_is_none() {
        assert!(Memory::empty().next_step().is_none());
    }

    #[test]
    fn last_step_leaves_empty_memory() {
        let (_, rest) = plan(&["X"]).next_step().unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn from_route_keeps_order() {
        let route: Route = ["A", "B"].into_iter().map(Location::from).collect();
        assert_eq!(Memory::from(route), plan(&["A", "B"]));
    }
}
