//! Client-side paging over the visible top-level rows.

use std::ops::Range;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 50, 100, 500];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page (zero based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows. An empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Moves to `page`, clamped to the last page.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Changes the page size, keeping the first row of the current page visible.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        let page_size = page_size.max(1);
        let first_row = self.page * self.page_size;
        self.page_size = page_size;
        self.set_page(first_row / page_size, total);
    }

    /// Pulls the current page back in range after rows were removed or filtered.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    /// Index range of the rows on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}
