//! # pagelink
//!
//! A cursor-based pagination toolkit driven by HTTP link headers.
//!
//! Paginated APIs describe their neighboring pages with a link header of the
//! shape:
//!
//! ```text
//! <https://host/api/0/issues/?cursor=0:0:1>; rel="previous"; results="false"; cursor="0:0:1",
//! <https://host/api/0/issues/?cursor=0:100:0>; rel="next"; results="true"; cursor="0:100:0"
//! ```
//!
//! This crate parses that header into a structured [`link::LinkHeaderResult`],
//! derives previous/next navigation state from it, and dispatches
//! direction-tagged cursor requests through a caller-supplied callback. The
//! actual page transition is always the caller's job; nothing here holds
//! navigation state of its own.
//!
//! ## Features
//!
//! - **Link header parsing**: pure, panic-free parsing of the
//!   `rel`/`results`/`cursor` link header convention
//! - **Pagination control**: enabled/disabled state per direction, optional
//!   navigation callback with explicit path and query
//! - **Page fetching**: a small HTTP client that GETs a page and returns its
//!   body alongside the parsed link header
//! - **CLI**: `pagelink parse` and `pagelink fetch` for inspecting paginated
//!   endpoints from the command line
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelink::link::parse_link_header;
//! use pagelink::pagination::PaginationController;
//! use pagelink::types::Direction;
//!
//! let header = r#"<https://api.example.com/items/?cursor=0:0:1>; rel="previous"; results="false"; cursor="0:0:1", <https://api.example.com/items/?cursor=0:100:0>; rel="next"; results="true"; cursor="0:100:0""#;
//!
//! let links = parse_link_header(Some(header));
//! assert!(!links.previous.results);
//! assert!(links.next.results);
//!
//! let controller = PaginationController::new("/items/", Default::default())
//!     .with_page_links(Some(header.to_string()))
//!     .with_on_cursor(|cursor, _path, _query, direction| {
//!         assert_eq!(direction, Direction::Next);
//!         assert_eq!(cursor, "0:100:0");
//!     });
//!
//! controller.activate(Direction::Next);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Link header parsing
pub mod link;

/// Pagination state and navigation dispatch
pub mod pagination;

/// Page fetching over HTTP
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use link::{parse_link_header, LinkDescriptor, LinkHeaderResult};
pub use pagination::PaginationController;
pub use types::{ControlSize, Direction, Query, QueryValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
