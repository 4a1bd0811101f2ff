//! Offset-based pagination math for the result list.

use serde::{Deserialize, Serialize};

use crate::search_const::{PAGE_SIZE, PAGINATION_WINDOW};

/// Position of the displayed page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageInfo {
    pub offset: u64,
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// One-based page number, as shown to the user.
    pub number: u64,
    pub offset: u64,
    pub is_current: bool,
}

impl PageInfo {
    pub fn new(offset: u64, total_count: u64) -> Self {
        Self { offset, total_count }
    }

    /// Zero-based index of the current page.
    pub fn current_page(&self) -> u64 {
        self.offset / PAGE_SIZE
    }

    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(PAGE_SIZE)
    }

    pub fn previous_offset(&self) -> Option<u64> {
        let page = self.current_page();
        if page == 0 {
            return None;
        }
        Some((page - 1).min(self.page_count().saturating_sub(1)) * PAGE_SIZE)
    }

    pub fn next_offset(&self) -> Option<u64> {
        let next = (self.current_page() + 1).checked_mul(PAGE_SIZE)?;
        if next < self.total_count {
            Some(next)
        } else {
            None
        }
    }

    /// Links to the pages around the current one.
    pub fn page_links(&self) -> Vec<PageLink> {
        let count = self.page_count();
        let current = self.current_page();
        let end = (current.saturating_sub(PAGINATION_WINDOW / 2) + PAGINATION_WINDOW).min(count);
        let start = end.saturating_sub(PAGINATION_WINDOW);
        (start..end)
            .map(|page| PageLink {
                number: page + 1,
                offset: page * PAGE_SIZE,
                is_current: page == current,
            })
            .collect()
    }

    /// Pagination is pointless when everything fits on one page.
    pub fn is_single_page(&self) -> bool {
        self.page_count() <= 1 && self.offset == 0
    }
}
