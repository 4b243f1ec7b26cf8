//! `web-sys` implementation of the list surface.

pub mod binding;
pub mod surface;

pub use binding::DomBinding;
pub use surface::{DomItem, DomSurface};
