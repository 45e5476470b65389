//! Record types shared by the registry and its callers.

use std::fmt;

/// Default window width when an open request carries no geometry.
pub const DEFAULT_WINDOW_WIDTH: i32 = 720;
/// Default window height when an open request carries no geometry.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 520;

/// Caller-chosen stable key for a logical window.
///
/// The key is stable for the lifetime of the window and is reused only when
/// the same logical window is reopened.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(String);

impl WindowId {
    /// Wraps a raw key. Emptiness is rejected at [`crate::apply`] time, not
    /// here, so ids can be built from constants without a fallible call.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Pixel rectangle for a window's position and size.
///
/// Values are stored verbatim; clamping against a viewport or a minimum size
/// is a chrome-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    /// Left edge in the caller's coordinate space.
    pub x: i32,
    /// Top edge in the caller's coordinate space.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the rect with width/height raised to the given minimums.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 80,
            y: 80,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One managed window.
///
/// `payload` is an opaque handle to caller-supplied content; the registry
/// never reads or rewrites it. `has_chrome` is likewise a pass-through flag
/// for the presentation layer (windows that draw their own frame open with it
/// cleared).
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord<P> {
    /// Stable window key.
    pub id: WindowId,
    /// Display label for the title bar and dock.
    pub title: String,
    /// Current position and size.
    pub rect: WindowRect,
    /// Stacking allocation; higher renders above lower. Not contiguous.
    pub stack_order: u64,
    /// Whether this window is the single focused window.
    pub is_focused: bool,
    /// Hidden from the visible stack but retained in the registry.
    pub is_minimized: bool,
    /// Whether the standard title bar should be rendered.
    pub has_chrome: bool,
    /// Opaque caller content handle.
    pub payload: P,
}

/// Caller-supplied fields for [`crate::WindowCommand::Open`].
///
/// Focus, minimize, and stacking state are assigned by the registry and are
/// deliberately absent here.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowRequest<P> {
    /// Stable window key; must be non-empty.
    pub id: WindowId,
    /// Display label.
    pub title: String,
    /// Initial geometry; defaults to [`WindowRect::default`] when `None`.
    pub rect: Option<WindowRect>,
    /// Title-bar pass-through flag.
    pub has_chrome: bool,
    /// Opaque content handle.
    pub payload: P,
}

impl<P> OpenWindowRequest<P> {
    /// Creates a request with default geometry and standard chrome.
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rect: None,
            has_chrome: true,
            payload,
        }
    }
}
