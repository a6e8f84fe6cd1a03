//! Village graph, route finding, and world state for the Courier simulation.
//!
//! This crate models the physical world the robots move through: an
//! undirected graph of named locations, a breadth-first route finder, the
//! immutable [`VillageState`] snapshot with its single transition, and the
//! random sources used to scatter parcels around the village.
//!
//! # Modules
//!
//! - [`error`] -- Error types for graph construction and parcel generation.
//! - [`village_graph`] -- [`VillageGraph`]: locations as nodes, roads as
//!   undirected edges, with neighbor queries.
//! - [`route`] -- Shortest-hop route finding over the graph.
//! - [`state`] -- [`VillageState`]: robot position plus outstanding parcels.
//! - [`random`] -- The [`RandomPick`] capability and its implementations.
//! - [`parcels`] -- Random parcel generation.
//! - [`starting_world`] -- The default 11-location village and mail tour.

pub mod error;
pub mod parcels;
pub mod random;
pub mod route;
pub mod starting_world;
pub mod state;
pub mod village_graph;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use parcels::random_parcels;
pub use random::{RandomPick, RngPicker, ScriptedPicker};
pub use route::find_route;
pub use starting_world::{MAIL_ROUTE, POST_OFFICE, VILLAGE_ROADS, create_starting_village, mail_route};
pub use state::VillageState;
pub use village_graph::VillageGraph;
