//! Common types used throughout pagelink
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Query parameters carried alongside a navigation request.
///
/// Values are either a single string or a string array, matching the common
/// query-string model where a key can repeat.
pub type Query = HashMap<String, QueryValue>;

// ============================================================================
// Query Values
// ============================================================================

/// A query parameter value: a single string or a repeated key's values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Single value, e.g. `?cursor=0:100:0`
    Single(String),
    /// Repeated key, e.g. `?project=1&project=2`
    Multi(Vec<String>),
}

impl QueryValue {
    /// View this value as a flat list of strings
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multi(vs) => vs,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

/// Merge a new cursor into a query, replacing any existing `cursor` key.
///
/// This is the query the navigation callback receives: the caller's current
/// query parameters with the target page's cursor swapped in.
pub fn merge_cursor(query: &Query, cursor: &str) -> Query {
    let mut merged = query.clone();
    merged.insert("cursor".to_string(), QueryValue::from(cursor));
    merged
}

// ============================================================================
// Direction
// ============================================================================

/// Pagination direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward earlier results
    Previous,
    /// Toward later results
    Next,
}

impl Direction {
    /// Signed offset carried on the navigation callback: `-1` for previous,
    /// `+1` for next
    pub fn offset(self) -> i8 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

// ============================================================================
// Control Size
// ============================================================================

/// Cosmetic size hint for pagination controls.
///
/// Carried through to whatever renders the controls; has no effect on
/// navigation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    /// No padding
    Zero,
    /// Extra small
    XSmall,
    /// Small (default)
    #[default]
    Small,
}
