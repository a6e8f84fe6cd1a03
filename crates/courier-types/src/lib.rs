//! Shared type definitions for the Courier delivery simulation.
//!
//! This crate is the single source of truth for the value types passed
//! between the world model, the robots, and the simulation driver.
//!
//! # Modules
//!
//! - [`location`] -- The [`Location`] name wrapper used as graph node key
//! - [`structs`] -- [`Parcel`] and [`Route`] value types

pub mod location;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use location::Location;
pub use structs::{Parcel, Route};
