//! Paged result window returned by member page fetches.

use serde::{Deserialize, Serialize};

/// One page of results together with the window that produced it.
///
/// Each fetch produces a fresh `Page`; pages are never merged. The previous
/// page is discarded once a newer fetch commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in listing order.
    pub items: Vec<T>,
    /// Page number of this window (1-based).
    pub current_page: u32,
    /// Requested items per page.
    pub items_per_page: u8,
    /// Total records across all pages.
    pub total_items: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` from the totals by ceiling
    /// division. A zero `items_per_page` yields zero pages rather than
    /// panicking.
    #[must_use]
    pub fn new(items: Vec<T>, current_page: u32, items_per_page: u8, total_items: u32) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            total_items.div_ceil(u32::from(items_per_page))
        };
        Self {
            items,
            current_page,
            items_per_page,
            total_items,
            total_pages,
        }
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Returns true if more pages exist after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns true if pages exist before this one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
