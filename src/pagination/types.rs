//! Pagination control types
//!
//! Defines the control-state snapshot and the navigation callback contract.

use crate::types::{ControlSize, Direction, Query};
use serde::{Deserialize, Serialize};

/// Navigation callback: `(cursor, path, query, direction)`.
///
/// The query already has the target cursor merged in. Direction carries `-1`
/// for previous and `+1` for next via [`Direction::offset`]. Dispatch is
/// fire-and-forget; the controller neither awaits nor tracks completion.
pub type CursorCallback = Box<dyn Fn(&str, &str, &Query, Direction) + Send + Sync>;

/// State of one directional control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Whether activating this control dispatches a navigation request.
    /// Disabled exactly when the direction's `results` is false.
    pub enabled: bool,
    /// Cursor dispatched on activation
    pub cursor: String,
}

impl ControlState {
    /// Build a control from a direction's parsed descriptor
    pub fn new(enabled: bool, cursor: impl Into<String>) -> Self {
        Self {
            enabled,
            cursor: cursor.into(),
        }
    }

    /// A disabled control with no cursor
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            cursor: String::new(),
        }
    }
}

/// Snapshot of both directional controls, recomputed from each new header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    /// Previous-page control
    pub previous: ControlState,
    /// Next-page control
    pub next: ControlState,
    /// Cosmetic size hint, carried through unchanged
    pub size: ControlSize,
}

impl PaginationControls {
    /// Control for a direction
    pub fn get(&self, direction: Direction) -> &ControlState {
        match direction {
            Direction::Previous => &self.previous,
            Direction::Next => &self.next,
        }
    }
}
