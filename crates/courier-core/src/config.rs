//! Configuration loading and typed config structures for the Courier
//! simulation.
//!
//! The configuration lives in `courier-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and provides a
//! loader that reads and validates the file. Every section and field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;

use courier_robots::RobotKind;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Village and task generation settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Which robot a single run uses.
    #[serde(default)]
    pub robot: RobotConfig,

    /// Caller-side bounds for a single run.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Robot comparison settings.
    #[serde(default)]
    pub experiment: ExperimentConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.parcel_count == 0 {
            return Err(ConfigError::Invalid {
                field: "world.parcel_count",
                reason: "must be at least 1",
            });
        }
        if self.world.start_location.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "world.start_location",
                reason: "must not be empty",
            });
        }
        if self.experiment.tasks == 0 {
            return Err(ConfigError::Invalid {
                field: "experiment.tasks",
                reason: "must be at least 1",
            });
        }
        if self.experiment.robots.is_empty() {
            return Err(ConfigError::Invalid {
                field: "experiment.robots",
                reason: "must list at least one robot",
            });
        }
        Ok(())
    }
}

/// Village and task generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Location the robot starts from.
    #[serde(default = "default_start_location")]
    pub start_location: String,

    /// Number of parcels generated for a run.
    #[serde(default = "default_parcel_count")]
    pub parcel_count: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_location: default_start_location(),
            parcel_count: default_parcel_count(),
        }
    }
}

/// Robot selection for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RobotConfig {
    /// Strategy to run.
    #[serde(default = "default_robot_kind")]
    pub kind: RobotKind,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            kind: default_robot_kind(),
        }
    }
}

/// Caller-side bounds for a single run.
///
/// The driver itself never stops a run early; these bounds are enforced by
/// the turn callback the caller installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum turns before the run is stopped (0 = unlimited).
    #[serde(default = "default_max_turns")]
    pub max_turns: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

/// Robot comparison settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperimentConfig {
    /// Run the comparison instead of a single simulation.
    #[serde(default)]
    pub enabled: bool,

    /// Number of random tasks every robot is scored on.
    #[serde(default = "default_tasks")]
    pub tasks: usize,

    /// Robots to compare, in report order.
    #[serde(default = "default_robots")]
    pub robots: Vec<RobotKind>,

    /// Turn cap per task (0 = unlimited).
    #[serde(default = "default_experiment_max_turns")]
    pub max_turns: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tasks: default_tasks(),
            robots: default_robots(),
            max_turns: default_experiment_max_turns(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

fn default_start_location() -> String {
    courier_world::POST_OFFICE.to_owned()
}

const fn default_parcel_count() -> usize {
    5
}

const fn default_robot_kind() -> RobotKind {
    RobotKind::Goal
}

const fn default_max_turns() -> u64 {
    1_000
}

const fn default_tasks() -> usize {
    100
}

fn default_robots() -> Vec<RobotKind> {
    RobotKind::ALL.to_vec()
}

const fn default_experiment_max_turns() -> u64 {
    10_000
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.world.start_location, "Post Office");
        assert_eq!(config.world.parcel_count, 5);
        assert_eq!(config.robot.kind, RobotKind::Goal);
        assert_eq!(config.simulation.max_turns, 1_000);
        assert!(!config.experiment.enabled);
        assert_eq!(config.experiment.robots.len(), 3);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SimulationConfig::parse("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  seed: 7
  start_location: "Town Hall"
  parcel_count: 12

robot:
  kind: route

simulation:
  max_turns: 0

experiment:
  enabled: true
  tasks: 25
  robots: [goal, random]
  max_turns: 500

logging:
  level: "courier_core=debug"
  format: json
"#;
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.world.seed, 7);
        assert_eq!(config.world.start_location, "Town Hall");
        assert_eq!(config.world.parcel_count, 12);
        assert_eq!(config.robot.kind, RobotKind::Route);
        assert_eq!(config.simulation.max_turns, 0);
        assert!(config.experiment.enabled);
        assert_eq!(config.experiment.tasks, 25);
        assert_eq!(
            config.experiment.robots,
            vec![RobotKind::Goal, RobotKind::Random]
        );
        assert_eq!(config.experiment.max_turns, 500);
        assert_eq!(config.logging.level, "courier_core=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = SimulationConfig::parse("world:\n  seed: 9\n").unwrap();
        assert_eq!(config.world.seed, 9);
        assert_eq!(config.world.parcel_count, 5);
        assert_eq!(config.experiment.tasks, 100);
    }

    #[test]
    fn unknown_robot_kind_rejected() {
        let result = SimulationConfig::parse("robot:\n  kind: teleporter\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn zero_parcels_rejected() {
        let result = SimulationConfig::parse("world:\n  parcel_count: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "world.parcel_count",
                ..
            })
        ));
    }

    #[test]
    fn empty_robot_list_rejected() {
        let result = SimulationConfig::parse("experiment:\n  robots: []\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "experiment.robots",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = SimulationConfig::from_file(Path::new("/nonexistent/courier-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
