//! Engine binary for the Courier simulation.
//!
//! Loads configuration, builds the starting village, and either runs one
//! robot on a random task or scores every configured robot on a shared
//! task list.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `courier-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create the starting village (11 locations, 14 roads)
//! 4. Run the robot comparison, or a single capped run
//! 5. Log the result

mod error;
mod turn_logger;

use std::path::Path;
use std::sync::Arc;

use courier_core::config::{LogFormat, LoggingConfig, SimulationConfig};
use courier_core::experiment::compare_robots;
use courier_core::runner::{log_simulation_end, run_robot};
use courier_robots::{Memory, build_robot};
use courier_world::{RngPicker, VillageGraph, VillageState, create_starting_village};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::turn_logger::TurnLogger;

/// Path of the optional configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "courier-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, village construction, or the run
/// itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so this comes first.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("courier-engine starting");
    info!(
        from_file,
        seed = config.world.seed,
        start = config.world.start_location,
        parcel_count = config.world.parcel_count,
        "Configuration loaded"
    );

    // 3. Create the starting village.
    let graph = Arc::new(create_starting_village()?);
    info!(
        locations = graph.location_count(),
        roads = graph.road_count(),
        "Village created"
    );

    // 4-5. Run and report.
    if config.experiment.enabled {
        run_comparison(&graph, &config)?;
    } else {
        run_single(&graph, &config)?;
    }

    info!("courier-engine finished");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Load configuration from [`CONFIG_PATH`].
///
/// Falls back to defaults when the file does not exist. The flag reports
/// whether the file was read.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

/// Run the configured robot once on a random task.
fn run_single(graph: &Arc<VillageGraph>, config: &SimulationConfig) -> Result<(), EngineError> {
    let mut picker = RngPicker::seeded(config.world.seed);
    let state = VillageState::random(
        graph,
        config.world.start_location.as_str(),
        config.world.parcel_count,
        &mut picker,
    )?;
    for parcel in state.parcels() {
        info!(place = %parcel.place, address = %parcel.address, "Parcel waiting");
    }

    let mut robot = build_robot(config.robot.kind, graph, config.world.seed)?;
    let mut logger = TurnLogger::new(config.simulation.max_turns);
    let result = run_robot(graph, state, robot.as_mut(), Memory::empty(), &mut logger)?;
    log_simulation_end(&result);
    Ok(())
}

/// Score every configured robot and log the best one.
fn run_comparison(
    graph: &Arc<VillageGraph>,
    config: &SimulationConfig,
) -> Result<(), EngineError> {
    let scores = compare_robots(graph, config)?;
    let best = scores
        .iter()
        .filter_map(|score| score.average_turns().map(|avg| (score.kind, avg)))
        .min_by(|a, b| a.1.total_cmp(&b.1));
    match best {
        Some((kind, average_turns)) => {
            info!(robot = %kind, average_turns, "Comparison finished");
        }
        None => info!("Comparison finished, no robot completed a task"),
    }
    Ok(())
}
