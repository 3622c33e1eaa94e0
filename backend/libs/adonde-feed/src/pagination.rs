//! Pagination
//!
//! Offset window math for the store's inclusive `.range(from, to)` API and
//! a session wrapper tying page tracking to the sponsored merger, so the
//! infinite-scroll handlers stay a few lines of glue.

use tracing::debug;

use crate::context::DisplayContext;
use crate::error::{FeedError, Result};
use crate::merger::{FeedMerger, VariantSelector};
use crate::models::{FeedItem, Page};

/// Rows fetched per page across the listing screens.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Inclusive offset window for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: u32,
    pub to: u32,
}

impl PageWindow {
    pub fn new(page_number: u32, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(FeedError::InvalidPageSize { page_size });
        }
        let from = page_number * page_size;
        Ok(Self {
            from,
            to: from + page_size - 1,
        })
    }
}

/// One listing view's fetch state: which page comes next, whether the store
/// has more rows, and the sponsored cadence counter. Lives from first load
/// until the user changes filters or navigates away.
#[derive(Debug, Clone)]
pub struct FeedSession {
    merger: FeedMerger,
    next_page: u32,
    has_more: bool,
}

impl FeedSession {
    pub fn new(cadence: u32) -> Result<Self> {
        Ok(Self {
            merger: FeedMerger::new(cadence)?,
            next_page: 0,
            has_more: true,
        })
    }

    /// Window to request for the next page.
    pub fn next_window(&self, page_size: u32) -> Result<PageWindow> {
        PageWindow::new(self.next_page, page_size)
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn counter(&self) -> u64 {
        self.merger.counter()
    }

    /// Folds one fetched page into the session and returns the display rows
    /// to append, sponsored cards included.
    pub fn apply_page<S>(
        &mut self,
        page: Page,
        context: &DisplayContext,
        selector: &S,
    ) -> Vec<FeedItem>
    where
        S: VariantSelector + ?Sized,
    {
        self.has_more = page.has_more();
        self.next_page = page.page_number + 1;
        debug!(
            page = page.page_number,
            rows = page.items.len(),
            has_more = self.has_more,
            "applying feed page"
        );
        self.merger.merge(page.items, context, selector)
    }

    /// Fresh session: page zero, counter zero. Call on filter change.
    pub fn reset(&mut self) {
        self.merger.reset();
        self.next_page = 0;
        self.has_more = true;
    }
}
