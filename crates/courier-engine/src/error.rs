//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and simulation.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: courier_core::config::ConfigError,
    },

    /// Village or task construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: courier_world::WorldError,
    },

    /// The configured robot could not be built.
    #[error("robot error: {source}")]
    Robot {
        /// The underlying robot error.
        #[from]
        source: courier_robots::RobotError,
    },

    /// A single run failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: courier_core::runner::RunnerError,
    },

    /// The robot comparison failed.
    #[error("experiment error: {source}")]
    Experiment {
        /// The underlying experiment error.
        #[from]
        source: courier_core::experiment::ExperimentError,
    },
}
