//! Named locations in the village graph.
//!
//! A [`Location`] is an opaque, value-compared name. Locations are ordered
//! lexicographically so they can key `BTreeMap`s and give deterministic
//! iteration order.

use serde::{Deserialize, Serialize};

/// A named node in the village graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_name() {
        assert_eq!(Location::from("Farm"), Location::new(String::from("Farm")));
        assert_ne!(Location::from("Farm"), Location::from("Shop"));
    }

    #[test]
    fn display_prints_bare_name() {
        assert_eq!(Location::from("Post Office").to_string(), "Post Office");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Location::from("Cabin")).unwrap();
        assert_eq!(json, "\"Cabin\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "Cabin");
    }
}
