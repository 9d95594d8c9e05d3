//! Link header parsing
//!
//! Converts a raw link header string into a structured previous/next pair.
//!
//! # Overview
//!
//! Paginated endpoints advertise their neighboring pages with a header of the
//! form:
//!
//! ```text
//! <url>; rel="previous"; results="true"; cursor="0:0:1"
//! ```
//!
//! with one comma-separated segment per direction. Parsing is pure and
//! panic-free: absent input, malformed segments, and unknown attributes all
//! degrade to disabled directions rather than errors.

mod parser;
mod types;

pub use parser::{from_header_map, parse_link_header};
pub use types::{LinkDescriptor, LinkHeaderResult};
