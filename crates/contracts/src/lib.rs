//! Shared contracts for the catalog list view.
//!
//! Everything here is target-independent: the browser widget and any server
//! rendering sort fragments agree on these types.

pub mod domain;
pub mod shared;
