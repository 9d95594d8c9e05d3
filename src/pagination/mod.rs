//! Pagination state and navigation dispatch
//!
//! # Overview
//!
//! [`PaginationController`] derives previous/next control state from a raw
//! link header and dispatches direction-tagged cursor requests through an
//! optional navigation callback. The controller holds no navigation state of
//! its own: the caller supplies the current path and query explicitly, and the
//! callback (the navigation sink) performs the actual page transition.
//!
//! Control state is two independent booleans recomputed from each new header;
//! there is no history or memory between updates.

mod controller;
mod types;

pub use controller::PaginationController;
pub use types::{ControlState, CursorCallback, PaginationControls};
