//! Robot that wanders to a random neighbor every turn.

use std::sync::Arc;

use courier_world::{RandomPick, VillageGraph, VillageState};

use crate::error::RobotError;
use crate::memory::{Action, Memory};
use crate::robot::{Robot, RobotKind};

/// Picks a uniformly random neighbor of the current location. Ignores
/// memory entirely.
#[derive(Debug, Clone)]
pub struct RandomRobot<P> {
    graph: Arc<VillageGraph>,
    picker: P,
}

impl<P: RandomPick> RandomRobot<P> {
    /// Create a random robot drawing its choices from `picker`.
    pub const fn new(graph: Arc<VillageGraph>, picker: P) -> Self {
        Self { graph, picker }
    }
}

impl<P: RandomPick> Robot for RandomRobot<P> {
    fn kind(&self) -> RobotKind {
        RobotKind::Random
    }

    fn decide(&mut self, state: &VillageState, _memory: Memory) -> Result<Action, RobotError> {
        let direction = self
            .picker
            .pick(self.graph.neighbors(state.place()))
            .ok_or_else(|| RobotError::Stranded(state.place().clone()))?
            .clone();
        Ok(Action {
            direction,
            memory: Memory::empty(),
        })
    }
}
