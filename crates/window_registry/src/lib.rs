//! Deterministic window-manager core: the window registry, stacking
//! authority, and command surface that every shell collaborator (chrome,
//! dock, keyboard dispatch) drives.
//!
//! The crate is framework-free and single-threaded by design: all commands
//! are applied synchronously from UI event callbacks, and observers are
//! notified after each mutation completes. Rendering, gesture handling, and
//! window content are external concerns; the registry stores whatever
//! geometry it is given and never inspects a window's payload.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod command;
mod model;
mod registry;
mod store;

pub use command::{apply, RegistryEffect, RegistryError, WindowCommand};
pub use model::{
    OpenWindowRequest, WindowId, WindowRecord, WindowRect, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
pub use registry::WindowRegistry;
pub use store::{RegistryStore, SubscriptionId};
