//! Shared UI primitive library for the desktop shell and its applications.
//!
//! The crate owns the centralized icon API consumed by the menu bar, dock,
//! desktop icon grid, and app surfaces. Apps compose these primitives instead
//! of emitting ad hoc SVG markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;

pub use icon::{Icon, IconName, IconSize};

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{Icon, IconName, IconSize};
}
