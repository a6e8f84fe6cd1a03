//! The robot trait and robot construction by kind.
//!
//! The driver presents a robot with the current [`VillageState`] and the
//! memory it returned last turn, and gets back an [`Action`]. The
//! [`Robot`] trait abstracts how that decision is made -- random wandering,
//! a fixed tour, or route planning -- so the driver never knows which
//! variant it is running.

use std::sync::Arc;

use courier_world::{RngPicker, VillageGraph, VillageState, mail_route};
use serde::{Deserialize, Serialize};

use crate::error::RobotError;
use crate::goal_robot::GoalRobot;
use crate::memory::{Action, Memory};
use crate::random_robot::RandomRobot;
use crate::route_robot::RouteRobot;

/// A decision strategy.
pub trait Robot {
    /// Which strategy this robot implements.
    fn kind(&self) -> RobotKind;

    /// Choose the next move.
    ///
    /// `memory` is whatever the robot returned in the previous turn (empty
    /// on the first turn). The returned [`Action`] carries the memory for
    /// the next turn.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError`] when no direction can be chosen, e.g. the
    /// robot is stranded or its target is unreachable.
    fn decide(&mut self, state: &VillageState, memory: Memory) -> Result<Action, RobotError>;
}

/// The available robot strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotKind {
    /// Uniformly random neighbor every turn.
    Random,
    /// Fixed mail tour.
    Route,
    /// Shortest route to the oldest parcel.
    Goal,
}

impl RobotKind {
    /// Every kind, in comparison order.
    pub const ALL: [Self; 3] = [Self::Random, Self::Route, Self::Goal];

    /// Short lowercase name, matching the config spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Route => "route",
            Self::Goal => "goal",
        }
    }
}

impl core::fmt::Display for RobotKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a boxed robot of the given kind for `graph`.
///
/// The random robot is seeded from `seed`; the route robot follows the
/// default mail tour, which must be a closed walk in `graph`.
///
/// # Errors
///
/// Returns [`RobotError::BrokenTour`] or [`RobotError::EmptyTour`] if the
/// mail tour does not fit `graph`.
pub fn build_robot(
    kind: RobotKind,
    graph: &Arc<VillageGraph>,
    seed: u64,
) -> Result<Box<dyn Robot>, RobotError> {
    let robot: Box<dyn Robot> = match kind {
        RobotKind::Random => Box::new(RandomRobot::new(
            Arc::clone(graph),
            RngPicker::seeded(seed),
        )),
        RobotKind::Route => Box::new(RouteRobot::checked(graph, mail_route())?),
        RobotKind::Goal => Box::new(GoalRobot::new(Arc::clone(graph))),
    };
    Ok(robot)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use courier_world::create_starting_village;

    use super::*;

    #[test]
    fn factory_builds_requested_kind() {
        let graph = Arc::new(create_starting_village().unwrap());
        for kind in RobotKind::ALL {
            let robot = build_robot(kind, &graph, 1).unwrap();
            assert_eq!(robot.kind(), kind);
        }
    }

    #[test]
    fn route_robot_rejected_on_foreign_graph() {
        let graph = Arc::new(VillageGraph::from_roads(&["A-B"]).unwrap());
        assert!(build_robot(RobotKind::Route, &graph, 1).is_err());
    }

    #[test]
    fn kind_names_round_trip_through_serde() {
        for kind in RobotKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let back: RobotKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
