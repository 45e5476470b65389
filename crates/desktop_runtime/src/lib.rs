//! Desktop shell runtime: bridges the window registry into the reactive UI
//! layer and renders the menu bar, desktop, managed windows, and dock.

pub mod apps;
pub mod components;
pub mod host;
pub mod keyboard;
pub mod model;
pub mod runtime_context;

pub use components::DesktopShell;
pub use host::DesktopHostContext;
pub use model::*;
pub use runtime_context::{
    activate_app, dock_activation, use_desktop_runtime, DesktopProvider, DesktopRuntimeContext,
    DockActivation,
};
