//! Error types for robot decisions.

use courier_types::Location;

/// Errors a robot can raise instead of choosing a direction.
#[derive(Debug, thiserror::Error)]
pub enum RobotError {
    /// The robot stands on a location with no roads out.
    #[error("robot is stranded at {0}: no neighboring locations")]
    Stranded(Location),

    /// A fixed-route robot was configured with an empty tour.
    #[error("fixed route robot needs at least one stop")]
    EmptyTour,

    /// A fixed tour contains a hop that is not a road.
    #[error("tour hop {from} -> {to} is not a road")]
    BrokenTour {
        /// Stop the hop starts from.
        from: Location,
        /// Stop the hop leads to.
        to: Location,
    },

    /// A planning robot was asked to act with nothing left to deliver.
    #[error("no parcels left to plan for")]
    NoParcels,

    /// The route finder could not connect the robot to its target.
    #[error("no route from {from} to {to}")]
    NoRoute {
        /// Robot location.
        from: Location,
        /// Target location.
        to: Location,
    },

    /// Planning produced an empty route, so there is no next step.
    #[error("planned route at {0} is empty")]
    EmptyPlan(Location),
}
