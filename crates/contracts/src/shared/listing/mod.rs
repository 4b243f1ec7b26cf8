//! Paging and sorting state of a server-rendered list.

pub mod paging;
pub mod query;
pub mod sorting;

pub use paging::{PageSize, PageSizeError, PageState, PageView, DEFAULT_PAGE_SIZE};
pub use query::QueryParams;
pub use sorting::{SortDirection, SortError, SortField, SortSchema, SortSelection, SortState};
