//! CLI module
//!
//! Command-line interface for inspecting paginated endpoints.
//!
//! # Commands
//!
//! - `parse` - Parse a link header string and print the structured result
//! - `fetch` - Fetch a page and follow its link header

mod commands;
mod runner;

pub use commands::{Cli, Commands, DirectionArg};
pub use runner::Runner;
