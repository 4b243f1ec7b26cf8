//! Client-side pagination over a server-rendered list, with server-driven
//! re-sorting by fragment replacement.

pub mod paginator;
pub mod session;
pub mod sort_sync;
pub mod surface;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use paginator::Paginator;
pub use session::ViewSession;
pub use sort_sync::{SelectionMode, SortOutcome, SortRequest, SortSync, StaleResponsePolicy};
pub use surface::{Handler, ItemNode, ListAction, ListSurface};
pub use view::{request_sort, ListView, SharedListView};
