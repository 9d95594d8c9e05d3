//! Pagination controller
//!
//! Derives control state from a link header and dispatches navigation
//! requests.

use super::types::{ControlState, CursorCallback, PaginationControls};
use crate::link::parse_link_header;
use crate::types::{merge_cursor, ControlSize, Direction, Query};
use tracing::debug;

/// Derives previous/next navigation state from a link header and dispatches
/// cursor requests through an optional callback.
///
/// The caller supplies the target path and current query explicitly; the
/// controller never reads ambient routing state. Each call to [`controls`]
/// reparses the current header, so updating the header with
/// [`set_page_links`] is all that is needed between pages.
///
/// [`controls`]: PaginationController::controls
/// [`set_page_links`]: PaginationController::set_page_links
pub struct PaginationController {
    path: String,
    query: Query,
    page_links: Option<String>,
    size: ControlSize,
    on_cursor: Option<CursorCallback>,
}

impl PaginationController {
    /// Create a controller for a path and its current query parameters
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
            page_links: None,
            size: ControlSize::default(),
            on_cursor: None,
        }
    }

    /// Set the raw link header string
    #[must_use]
    pub fn with_page_links(mut self, page_links: Option<String>) -> Self {
        self.page_links = page_links;
        self
    }

    /// Set the cosmetic control size
    #[must_use]
    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set the navigation callback.
    ///
    /// The callback is optional; without one, activation is a no-op.
    #[must_use]
    pub fn with_on_cursor<F>(mut self, on_cursor: F) -> Self
    where
        F: Fn(&str, &str, &Query, Direction) + Send + Sync + 'static,
    {
        self.on_cursor = Some(Box::new(on_cursor));
        self
    }

    /// Replace the link header, e.g. after fetching a new page
    pub fn set_page_links(&mut self, page_links: Option<String>) {
        self.page_links = page_links;
    }

    /// Replace the current query parameters
    pub fn set_query(&mut self, query: Query) {
        self.query = query;
    }

    /// Target path navigation requests are dispatched with
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Derive the control snapshot from the current header.
    ///
    /// Returns `None` when no header is present: the caller should show no
    /// controls at all, not disabled ones. A present but malformed header
    /// yields both controls disabled instead.
    pub fn controls(&self) -> Option<PaginationControls> {
        let page_links = self.page_links.as_deref().filter(|s| !s.is_empty())?;

        let links = parse_link_header(Some(page_links));
        Some(PaginationControls {
            previous: ControlState::new(links.previous.results, links.previous.cursor),
            next: ControlState::new(links.next.results, links.next.cursor),
            size: self.size,
        })
    }

    /// Activate a directional control.
    ///
    /// Dispatches the navigation callback exactly once with the direction's
    /// cursor, the target path, and the current query merged with that
    /// cursor. Returns whether a dispatch happened: a disabled control, a
    /// missing header, or an absent callback all make this a no-op.
    pub fn activate(&self, direction: Direction) -> bool {
        let Some(controls) = self.controls() else {
            return false;
        };

        let control = controls.get(direction);
        if !control.enabled {
            debug!(%direction, "pagination control disabled, ignoring activation");
            return false;
        }

        let Some(on_cursor) = &self.on_cursor else {
            debug!(%direction, "no navigation callback configured");
            return false;
        };

        let query = merge_cursor(&self.query, &control.cursor);
        debug!(
            %direction,
            cursor = %control.cursor,
            path = %self.path,
            "dispatching cursor navigation"
        );
        on_cursor(&control.cursor, &self.path, &query, direction);
        true
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("page_links", &self.page_links)
            .field("size", &self.size)
            .field("on_cursor", &self.on_cursor.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
