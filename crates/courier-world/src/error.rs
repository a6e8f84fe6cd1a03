//! Error types for the `courier-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type.

use courier_types::Location;

/// Errors that can occur while building the village or generating parcels.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A road string did not have the form `"From-To"`.
    #[error("malformed road definition: {0:?}")]
    MalformedRoad(String),

    /// A road connects a location to itself.
    #[error("road from {0} to itself is not allowed")]
    SelfLoop(Location),

    /// A location was not found in the village graph.
    #[error("location not found: {0}")]
    LocationNotFound(Location),

    /// Parcel generation needs at least two distinct locations.
    #[error("need at least 2 locations to generate parcels, found {found}")]
    TooFewLocations {
        /// Number of locations present in the graph.
        found: usize,
    },

    /// The random source produced nothing from a non-empty selection.
    #[error("random source returned no choice")]
    NoChoice,
}
