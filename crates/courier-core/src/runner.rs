//! The turn loop that drives a robot until every parcel is delivered.
//!
//! [`run_robot`] is a two-state machine: RUNNING until the state holds no
//! parcels, then FINISHED with the number of turns taken. Each turn asks the
//! robot for an [`Action`], applies the move, replaces the memory, and
//! reports a [`TurnEvent`] to the caller's [`TurnCallback`].
//!
//! The loop itself imposes no turn limit. A robot that never makes progress
//! (for instance one that keeps choosing illegal moves) runs forever unless
//! the callback stops it; [`TurnLimit`] is the stock way to do that.
//!
//! [`Action`]: courier_robots::Action

use courier_robots::{Memory, Robot, RobotError};
use courier_types::Location;
use courier_world::{VillageGraph, VillageState};
use serde::Serialize;
use tracing::{debug, info};

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The robot could not choose a direction.
    #[error("robot failed on turn {turn}: {source}")]
    Robot {
        /// The turn being decided (1-based).
        turn: u64,
        /// The underlying robot error.
        #[source]
        source: RobotError,
    },
}

/// What happened in one turn.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TurnEvent<'a> {
    /// Turn number, starting at 1.
    pub turn: u64,
    /// The direction the robot chose.
    pub direction: &'a Location,
    /// The state after the move.
    pub state: &'a VillageState,
}

/// Whether the driver should keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnControl {
    /// Run the next turn.
    Continue,
    /// End the run now.
    Stop,
}

/// Callback invoked after every turn.
pub trait TurnCallback {
    /// Observe a completed turn and decide whether to continue.
    fn on_turn(&mut self, event: &TurnEvent<'_>) -> TurnControl;
}

/// A callback that observes nothing and never stops the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl TurnCallback for NoOpCallback {
    fn on_turn(&mut self, _event: &TurnEvent<'_>) -> TurnControl {
        TurnControl::Continue
    }
}

/// Stops a run once it has taken `max_turns` turns (0 = unlimited).
#[derive(Debug, Clone, Copy)]
pub struct TurnLimit {
    max_turns: u64,
}

impl TurnLimit {
    /// Create a limit of `max_turns` turns.
    pub const fn new(max_turns: u64) -> Self {
        Self { max_turns }
    }

    /// The configured limit.
    pub const fn max_turns(&self) -> u64 {
        self.max_turns
    }

    /// Return `true` once `turn` has reached the limit.
    pub const fn reached(&self, turn: u64) -> bool {
        self.max_turns > 0 && turn >= self.max_turns
    }
}

impl TurnCallback for TurnLimit {
    fn on_turn(&mut self, event: &TurnEvent<'_>) -> TurnControl {
        if self.reached(event.turn) {
            TurnControl::Stop
        } else {
            TurnControl::Continue
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEndReason {
    /// Every parcel was delivered.
    Delivered,
    /// The turn callback asked to stop.
    StoppedByCaller,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// The reason the run ended.
    pub end_reason: SimulationEndReason,
    /// Total number of turns taken.
    pub turns: u64,
    /// The state when the run ended.
    pub final_state: VillageState,
}

impl SimulationResult {
    /// Return `true` if every parcel was delivered.
    pub fn delivered(&self) -> bool {
        self.end_reason == SimulationEndReason::Delivered
    }
}

/// Drive `robot` from `state` until no parcels remain.
///
/// `memory` is the robot's starting memory, normally [`Memory::empty`].
/// After every turn `callback` sees the chosen direction and the new state;
/// returning [`TurnControl::Stop`] ends the run unless that turn delivered
/// the last parcel.
///
/// # Errors
///
/// Returns [`RunnerError::Robot`] if the robot cannot choose a direction.
pub fn run_robot(
    graph: &VillageGraph,
    state: VillageState,
    robot: &mut dyn Robot,
    memory: Memory,
    callback: &mut dyn TurnCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut state = state;
    let mut memory = memory;
    let mut turn: u64 = 0;

    info!(
        robot = %robot.kind(),
        start = %state.place(),
        parcels = state.parcels().len(),
        "Simulation starting"
    );

    loop {
        if state.is_finished() {
            info!(robot = %robot.kind(), turns = turn, "All parcels delivered");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::Delivered,
                turns: turn,
                final_state: state,
            });
        }

        let next_turn = turn.saturating_add(1);
        let action = robot
            .decide(&state, memory)
            .map_err(|source| RunnerError::Robot {
                turn: next_turn,
                source,
            })?;
        state = state.move_to(graph, &action.direction);
        memory = action.memory;
        turn = next_turn;

        debug!(
            turn,
            direction = %action.direction,
            parcels_left = state.parcels().len(),
            planned = memory.len(),
            "Moved"
        );

        let event = TurnEvent {
            turn,
            direction: &action.direction,
            state: &state,
        };
        if callback.on_turn(&event) == TurnControl::Stop && !state.is_finished() {
            info!(robot = %robot.kind(), turns = turn, "Run stopped by caller");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::StoppedByCaller,
                turns: turn,
                final_state: state,
            });
        }
    }
}

/// Log the outcome of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        turns = result.turns,
        final_place = %result.final_state.place(),
        parcels_left = result.final_state.parcels().len(),
        "Simulation ended"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use courier_robots::{Action, GoalRobot, RobotKind, RouteRobot};
    use courier_types::Parcel;

    use super::*;

    fn line() -> Arc<VillageGraph> {
        Arc::new(VillageGraph::from_roads(&["A-B", "B-C"]).unwrap())
    }

    /// Always asks to move somewhere that is not a road.
    struct StuckRobot;

    impl Robot for StuckRobot {
        fn kind(&self) -> RobotKind {
            RobotKind::Random
        }

        fn decide(&mut self, _state: &VillageState, memory: Memory) -> Result<Action, RobotError> {
            Ok(Action {
                direction: Location::from("Nowhere"),
                memory,
            })
        }
    }

    struct Recorder {
        events: Vec<(u64, String, usize)>,
    }

    impl TurnCallback for Recorder {
        fn on_turn(&mut self, event: &TurnEvent<'_>) -> TurnControl {
            self.events.push((
                event.turn,
                event.direction.to_string(),
                event.state.parcels().len(),
            ));
            TurnControl::Continue
        }
    }

    #[test]
    fn already_finished_takes_zero_turns() {
        let graph = line();
        let mut robot = GoalRobot::new(Arc::clone(&graph));
        let state = VillageState::new("A", Vec::new());
        let result =
            run_robot(&graph, state, &mut robot, Memory::empty(), &mut NoOpCallback).unwrap();
        assert_eq!(result.end_reason, SimulationEndReason::Delivered);
        assert_eq!(result.turns, 0);
    }

    #[test]
    fn goal_robot_two_turn_delivery() {
        let graph = line();
        let mut robot = GoalRobot::new(Arc::clone(&graph));
        let state = VillageState::new("A", vec![Parcel::new("A", "C")]);
        let mut recorder = Recorder { events: Vec::new() };
        let result = run_robot(&graph, state, &mut robot, Memory::empty(), &mut recorder).unwrap();
        assert!(result.delivered());
        assert_eq!(result.turns, 2);
        assert_eq!(result.final_state.place(), &Location::from("C"));
        assert_eq!(
            recorder.events,
            vec![(1, "B".to_owned(), 1), (2, "C".to_owned(), 0)]
        );
    }

    #[test]
    fn turn_limit_stops_stalled_robot() {
        let graph = line();
        let state = VillageState::new("A", vec![Parcel::new("A", "C")]);
        let mut limit = TurnLimit::new(25);
        let result = run_robot(&graph, state.clone(), &mut StuckRobot, Memory::empty(), &mut limit)
            .unwrap();
        assert_eq!(result.end_reason, SimulationEndReason::StoppedByCaller);
        assert_eq!(result.turns, 25);
        assert_eq!(result.final_state, state);
    }

    #[test]
    fn delivery_on_final_allowed_turn_counts_as_delivered() {
        let graph = line();
        let mut robot = GoalRobot::new(Arc::clone(&graph));
        let state = VillageState::new("A", vec![Parcel::new("A", "C")]);
        let mut limit = TurnLimit::new(2);
        let result = run_robot(&graph, state, &mut robot, Memory::empty(), &mut limit).unwrap();
        assert_eq!(result.end_reason, SimulationEndReason::Delivered);
        assert_eq!(result.turns, 2);
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let limit = TurnLimit::new(0);
        assert!(!limit.reached(u64::MAX));
        assert!(TurnLimit::new(3).reached(3));
        assert!(!TurnLimit::new(3).reached(2));
    }

    #[test]
    fn robot_error_carries_turn_number() {
        let graph = Arc::new(VillageGraph::from_roads(&["A-B", "C-D"]).unwrap());
        let mut robot = GoalRobot::new(Arc::clone(&graph));
        let state = VillageState::new("A", vec![Parcel::new("C", "D")]);
        let err = run_robot(&graph, state, &mut robot, Memory::empty(), &mut NoOpCallback)
            .unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Robot {
                turn: 1,
                source: RobotError::NoRoute { .. }
            }
        ));
    }

    #[test]
    fn route_robot_memory_is_threaded() {
        let graph = line();
        let tour = vec![Location::from("B"), Location::from("C"), Location::from("B"), Location::from("A")];
        let mut robot = RouteRobot::checked(&graph, tour).unwrap();
        let state = VillageState::new("A", vec![Parcel::new("C", "A")]);
        let mut recorder = Recorder { events: Vec::new() };
        let result = run_robot(&graph, state, &mut robot, Memory::empty(), &mut recorder).unwrap();
        assert_eq!(result.turns, 4);
        let directions: Vec<&str> = recorder.events.iter().map(|(_, d, _)| d.as_str()).collect();
        assert_eq!(directions, vec!["B", "C", "B", "A"]);
    }
}
