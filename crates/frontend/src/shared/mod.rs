pub mod api_utils;
pub mod config;
pub mod dom;
pub mod error;
pub mod paged_list;
pub mod task;
