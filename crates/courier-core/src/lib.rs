//! Simulation driver, configuration, and experiments for the Courier
//! simulation.
//!
//! This crate owns the turn loop that drives a robot until every parcel is
//! delivered, the YAML configuration that selects what to run, and the
//! comparison experiment that scores robots on identical tasks.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `courier-config.yaml` into
//!   strongly-typed structs.
//! - [`runner`] -- [`run_robot`], turn events, and turn callbacks.
//! - [`experiment`] -- [`compare_robots`] over a shared set of random tasks.
//!
//! [`run_robot`]: runner::run_robot
//! [`compare_robots`]: experiment::compare_robots

pub mod config;
pub mod experiment;
pub mod runner;
