//! Page fetching over HTTP
//!
//! A thin client that GETs a paginated endpoint and returns the response body
//! alongside the parsed link header. This is the host side that produces the
//! header strings the pagination core consumes.
//!
//! Fetches are single-shot: no retry, rate limiting, or debouncing happens
//! here.

mod client;

pub use client::{Page, PageClient, PageClientConfig};
