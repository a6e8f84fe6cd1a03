//! Decision strategies ("robots") for the Courier delivery simulation.
//!
//! Every robot maps `(state, memory)` to an [`Action`]: the next location to
//! move to plus the memory to carry into the following turn. The driver
//! owns the memory and threads it through by value, so robots hold no
//! per-run state of their own beyond configuration and a random source.
//!
//! # Modules
//!
//! - [`error`] -- [`RobotError`] for decisions that cannot be made.
//! - [`memory`] -- [`Memory`] (remaining plan) and [`Action`].
//! - [`robot`] -- The [`Robot`] trait, [`RobotKind`], and [`build_robot`].
//! - [`random_robot`] -- Picks a uniformly random neighbor each turn.
//! - [`route_robot`] -- Follows a fixed tour forever.
//! - [`goal_robot`] -- Plans shortest routes to the oldest parcel.

pub mod error;
pub mod goal_robot;
pub mod memory;
pub mod random_robot;
pub mod robot;
pub mod route_robot;

pub use error::RobotError;
pub use goal_robot::GoalRobot;
pub use memory::{Action, Memory};
pub use random_robot::RandomRobot;
pub use robot::{Robot, RobotKind, build_robot};
pub use route_robot::RouteRobot;
