//! Robot that follows a fixed tour, oblivious to parcels.
//!
//! Because the tour passes every location, any parcel is picked up within
//! one lap and delivered within the next, so a run takes at most two laps.

use courier_types::Location;
use courier_world::{VillageGraph, VillageState};

use crate::error::RobotError;
use crate::memory::{Action, Memory};
use crate::robot::{Robot, RobotKind};

/// Walks a predetermined sequence of locations, restarting it whenever the
/// remaining memory runs out.
#[derive(Debug, Clone)]
pub struct RouteRobot {
    tour: Vec<Location>,
}

impl RouteRobot {
    /// Create a robot following `tour`.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::EmptyTour`] if `tour` has no stops.
    pub fn new(tour: Vec<Location>) -> Result<Self, RobotError> {
        if tour.is_empty() {
            return Err(RobotError::EmptyTour);
        }
        Ok(Self { tour })
    }

    /// Create a robot following `tour`, checking that consecutive stops are
    /// joined by roads in `graph`.
    ///
    /// The robot restarts the tour once it reaches the end, so the hop from
    /// the last stop back to the first must be a road too. An open walk is
    /// rejected even if it visits every location.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::EmptyTour`] or [`RobotError::BrokenTour`].
    pub fn checked(graph: &VillageGraph, tour: Vec<Location>) -> Result<Self, RobotError> {
        let robot = Self::new(tour)?;
        let hops = robot.tour.iter().zip(robot.tour.iter().cycle().skip(1));
        for (from, to) in hops {
            if !graph.is_adjacent(from, to) {
                return Err(RobotError::BrokenTour {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        Ok(robot)
    }

    /// The stops of one lap.
    pub fn tour(&self) -> &[Location] {
        &self.tour
    }
}

impl Robot for RouteRobot {
    fn kind(&self) -> RobotKind {
        RobotKind::Route
    }

    fn decide(&mut self, _state: &VillageState, memory: Memory) -> Result<Action, RobotError> {
        let memory = if memory.is_empty() {
            Memory::from(self.tour.clone())
        } else {
            memory
        };
        let (direction, memory) = memory.next_step().ok_or(RobotError::EmptyTour)?;
        Ok(Action { direction, memory })
    }
}
