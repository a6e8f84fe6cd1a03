//! Goal-directed robot that plans shortest routes parcel by parcel.
//!
//! Parcels are handled strictly in their original order: the robot always
//! works on the first outstanding parcel, fetching it if it is elsewhere
//! and delivering it once carried. A plan is only recomputed when the
//! previous one has been walked to the end.

use std::sync::Arc;

use courier_world::{VillageGraph, VillageState, find_route};
use tracing::debug;

use crate::error::RobotError;
use crate::memory::{Action, Memory};
use crate::robot::{Robot, RobotKind};

/// Plans with the route finder toward the oldest undelivered parcel.
#[derive(Debug, Clone)]
pub struct GoalRobot {
    graph: Arc<VillageGraph>,
}

impl GoalRobot {
    /// Create a goal-directed robot for `graph`.
    pub const fn new(graph: Arc<VillageGraph>) -> Self {
        Self { graph }
    }

    fn plan(&self, state: &VillageState) -> Result<Memory, RobotError> {
        let parcel = state.parcels().first().ok_or(RobotError::NoParcels)?;
        let target = if parcel.place == *state.place() {
            &parcel.address
        } else {
            &parcel.place
        };
        let route = find_route(&self.graph, state.place(), target).ok_or_else(|| {
            RobotError::NoRoute {
                from: state.place().clone(),
                to: target.clone(),
            }
        })?;
        debug!(
            from = %state.place(),
            to = %target,
            hops = route.len(),
            "Planned route"
        );
        Ok(Memory::from(route))
    }
}

impl Robot for GoalRobot {
    fn kind(&self) -> RobotKind {
        RobotKind::Goal
    }

    fn decide(&mut self, state: &VillageState, memory: Memory) -> Result<Action, RobotError> {
        let memory = if memory.is_empty() {
            self.plan(state)?
        } else {
            memory
        };
        let (direction, memory) = memory
            .next_step()
            .ok_or_else(|| RobotError::EmptyPlan(state.place().clone()))?;
        Ok(Action { direction, memory })
    }
}
