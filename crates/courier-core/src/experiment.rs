//! Robot comparison over a shared set of random tasks.
//!
//! Every robot is scored on the same list of initial states, generated
//! once from the world seed, so differences in turn counts come from the
//! strategies alone. Each task starts with empty memory and is bounded by
//! the experiment turn cap.

use std::sync::Arc;

use courier_robots::{Memory, RobotError, RobotKind, build_robot};
use courier_world::{RngPicker, VillageGraph, VillageState, WorldError};
use serde::Serialize;
use tracing::info;

use crate::config::SimulationConfig;
use crate::runner::{RunnerError, TurnLimit, run_robot};

/// Error type for experiment operations.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// Task generation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A robot could not be built.
    #[error("robot error: {source}")]
    Robot {
        /// The underlying robot error.
        #[from]
        source: RobotError,
    },

    /// A run failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: RunnerError,
    },
}

/// Aggregate result for one robot kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotScore {
    /// The robot that was scored.
    pub kind: RobotKind,
    /// Number of tasks run.
    pub runs: usize,
    /// Tasks finished before the turn cap.
    pub delivered: usize,
    /// Turns summed over the delivered tasks.
    pub total_turns: u64,
}

impl RobotScore {
    /// Mean turns over delivered tasks, or `None` if none were delivered.
    #[allow(clippy::cast_precision_loss)]
    pub const fn average_turns(&self) -> Option<f64> {
        if self.delivered == 0 {
            return None;
        }
        Some(self.total_turns as f64 / self.delivered as f64)
    }
}

/// Generate `count` random tasks starting at the configured location.
///
/// # Errors
///
/// Returns [`WorldError`] if the start location is unknown or the graph is
/// too small to place parcels.
pub fn generate_tasks(
    graph: &VillageGraph,
    config: &SimulationConfig,
    count: usize,
) -> Result<Vec<VillageState>, WorldError> {
    let mut picker = RngPicker::seeded(config.world.seed);
    (0..count)
        .map(|_| {
            VillageState::random(
                graph,
                config.world.start_location.as_str(),
                config.world.parcel_count,
                &mut picker,
            )
        })
        .collect()
}

/// Score every robot listed in `config.experiment.robots` on the same
/// `config.experiment.tasks` random tasks.
///
/// # Errors
///
/// Returns [`ExperimentError`] if task generation, robot construction, or
/// any run fails.
pub fn compare_robots(
    graph: &Arc<VillageGraph>,
    config: &SimulationConfig,
) -> Result<Vec<RobotScore>, ExperimentError> {
    let tasks = generate_tasks(graph, config, config.experiment.tasks)?;
    info!(
        tasks = tasks.len(),
        robots = config.experiment.robots.len(),
        max_turns = config.experiment.max_turns,
        "Comparing robots"
    );

    let mut scores = Vec::with_capacity(config.experiment.robots.len());
    for &kind in &config.experiment.robots {
        let mut robot = build_robot(kind, graph, config.world.seed)?;
        let mut score = RobotScore {
            kind,
            runs: 0,
            delivered: 0,
            total_turns: 0,
        };
        for task in &tasks {
            let mut limit = TurnLimit::new(config.experiment.max_turns);
            let result = run_robot(
                graph,
                task.clone(),
                robot.as_mut(),
                Memory::empty(),
                &mut limit,
            )?;
            score.runs = score.runs.saturating_add(1);
            if result.delivered() {
                score.delivered = score.delivered.saturating_add(1);
                score.total_turns = score.total_turns.saturating_add(result.turns);
            }
        }
        info!(
            robot = %kind,
            runs = score.runs,
            delivered = score.delivered,
            average_turns = score.average_turns(),
            "Robot scored"
        );
        scores.push(score);
    }
    Ok(scores)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use courier_world::create_starting_village;

    use super::*;

    fn small_config(tasks: usize) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.experiment.tasks = tasks;
        config
    }

    #[test]
    fn tasks_are_reproducible() {
        let graph = create_starting_village().unwrap();
        let config = small_config(10);
        let a = generate_tasks(&graph, &config, 10).unwrap();
        let b = generate_tasks(&graph, &config, 10).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|t| t.parcels().len() == 5));
    }

    #[test]
    fn unknown_start_is_world_error() {
        let graph = Arc::new(create_starting_village().unwrap());
        let mut config = small_config(3);
        config.world.start_location = "Lighthouse".to_owned();
        assert!(matches!(
            compare_robots(&graph, &config),
            Err(ExperimentError::World { .. })
        ));
    }

    #[test]
    fn scores_every_requested_robot_in_order() {
        let graph = Arc::new(create_starting_village().unwrap());
        let config = small_config(20);
        let scores = compare_robots(&graph, &config).unwrap();
        let kinds: Vec<RobotKind> = scores.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, RobotKind::ALL.to_vec());
        assert!(scores.iter().all(|s| s.runs == 20));
    }

    #[test]
    fn planning_robots_always_deliver_and_beat_two_laps() {
        let graph = Arc::new(create_starting_village().unwrap());
        let mut config = small_config(50);
        config.experiment.robots = vec![RobotKind::Route, RobotKind::Goal];
        let scores = compare_robots(&graph, &config).unwrap();
        for score in &scores {
            assert_eq!(score.delivered, 50, "{}", score.kind);
            let average = score.average_turns().unwrap();
            assert!(average <= 26.0, "{} averaged {average}", score.kind);
        }
    }

    #[test]
    fn average_is_none_without_deliveries() {
        let score = RobotScore {
            kind: RobotKind::Random,
            runs: 3,
            delivered: 0,
            total_turns: 0,
        };
        assert!(score.average_turns().is_none());
    }
}
