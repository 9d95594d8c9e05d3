//! Link header result types

use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// One direction of a parsed link header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkDescriptor {
    /// Opaque pagination token for this direction
    pub cursor: String,
    /// Whether further results exist in this direction
    pub results: bool,
    /// Full URL for this page (informational)
    pub href: String,
}

impl LinkDescriptor {
    /// Create a descriptor
    pub fn new(cursor: impl Into<String>, results: bool, href: impl Into<String>) -> Self {
        Self {
            cursor: cursor.into(),
            results,
            href: href.into(),
        }
    }

    /// The descriptor a missing direction resolves to: no results, empty
    /// cursor and href
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Parsed link header: both directions are always present.
///
/// A direction the source header lacks resolves to
/// [`LinkDescriptor::disabled`]. The result is immutable; recompute it from
/// each new header string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkHeaderResult {
    /// The page before the current one
    pub previous: LinkDescriptor,
    /// The page after the current one
    pub next: LinkDescriptor,
}

impl LinkHeaderResult {
    /// Result with both directions disabled
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Descriptor for a direction
    pub fn get(&self, direction: Direction) -> &LinkDescriptor {
        match direction {
            Direction::Previous => &self.previous,
            Direction::Next => &self.next,
        }
    }

    /// Whether a direction has further results
    pub fn has_results(&self, direction: Direction) -> bool {
        self.get(direction).results
    }
}
