use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// Page size used when the page does not provide a usable one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of items per page. Never zero, so page counts never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "usize")]
pub struct PageSize(NonZeroUsize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    #[error("page size `{0}` is not a positive number")]
    NotANumber(String),
    #[error("page size must be at least 1")]
    Zero,
}

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PageSizeError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PageSizeError::Zero)
    }

    /// Parse the raw value of a page-size control, falling back to `default`
    /// when the value is not a positive integer.
    pub fn parse_or(raw: &str, default: PageSize) -> PageSize {
        raw.parse().unwrap_or(default)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let size: usize = trimmed
            .parse()
            .map_err(|_| PageSizeError::NotANumber(trimmed.to_string()))?;
        Self::new(size)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current page (1-based) and page size of one list view.
///
/// Any change of the collection or of the page size resets the view to the
/// first page; there is no clamping. The current page is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: NonZeroUsize,
    page_size: PageSize,
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: NonZeroUsize::MIN,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// `max(1, ceil(item_count / page_size))`
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Item window `[start, end)` of the current page, cut to the collection.
    pub fn window(&self, item_count: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.current_page.get() - 1).saturating_mul(size);
        let end = start.saturating_add(size);
        start.min(item_count)..end.min(item_count)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > NonZeroUsize::MIN
    }

    pub fn has_next(&self, item_count: usize) -> bool {
        self.current_page() < self.total_pages(item_count)
    }

    /// Returns `false` when already on the first page.
    pub fn previous(&mut self) -> bool {
        match NonZeroUsize::new(self.current_page.get() - 1) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Returns `false` when already on the last page.
    pub fn next(&mut self, item_count: usize) -> bool {
        if !self.has_next(item_count) {
            return false;
        }
        self.current_page = self.current_page.saturating_add(1);
        true
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.current_page = NonZeroUsize::MIN;
    }

    /// Everything a renderer needs for the current page.
    pub fn view(&self, item_count: usize) -> PageView {
        let total_pages = self.total_pages(item_count);
        let current_page = self.current_page();
        PageView {
            window: self.window(item_count),
            current_page,
            total_pages,
            indicator: format!("Page {} of {}", current_page, total_pages),
            previous_disabled: !self.has_previous(),
            next_disabled: current_page == total_pages,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

/// Rendered form of a [`PageState`] over a collection of known length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub window: Range<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    pub indicator: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl PageView {
    pub fn is_visible(&self, index: usize) -> bool {
        self.window.contains(&index)
    }

    pub fn visible_count(&self) -> usize {
        self.window.len()
    }
}
