//! Shell-level model types: the registry payload, pointer gesture sessions,
//! and resize-edge math.
//!
//! Gesture state lives here, not in the registry: the core only ever sees
//! finished `Move`/`Resize` values, while the in-flight drag bookkeeping
//! (start rect, start pointer) is chrome-layer state.

use desktop_app_contract::ApplicationId;
use serde_json::Value;
use window_registry::{OpenWindowRequest, WindowCommand, WindowId, WindowRect, WindowRegistry};

/// Minimum width the chrome allows when committing a resize.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum height the chrome allows when committing a resize.
pub const MIN_WINDOW_HEIGHT: i32 = 300;

/// Opaque registry payload: which app renders the window, plus its launch
/// parameters. The registry never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowContent {
    /// Application that owns the window.
    pub app: ApplicationId,
    /// Launch parameters forwarded to the app on mount.
    pub launch_params: Value,
}

/// Registry specialized to the shell payload.
pub type DesktopRegistry = WindowRegistry<WindowContent>;
/// Command specialized to the shell payload.
pub type DesktopCommand = WindowCommand<WindowContent>;
/// Open request specialized to the shell payload.
pub type DesktopOpenRequest = OpenWindowRequest<WindowContent>;

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// Edge or corner grabbed during a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

/// In-flight titlebar drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer position at drag start.
    pub pointer_start: PointerPosition,
    /// Window rect at drag start.
    pub rect_start: WindowRect,
}

/// In-flight edge/corner resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
    /// Grabbed edge.
    pub edge: ResizeEdge,
    /// Pointer position at resize start.
    pub pointer_start: PointerPosition,
    /// Window rect at resize start.
    pub rect_start: WindowRect,
}

/// Chrome-layer pointer gesture state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Active titlebar drag, if any.
    pub dragging: Option<DragSession>,
    /// Active resize, if any.
    pub resizing: Option<ResizeSession>,
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn start() -> WindowRect {
        WindowRect {
            x: 100,
            y: 100,
            w: 600,
            h: 400,
        }
    }

    #[test]
    fn east_and_south_edges_grow_without_moving_origin() {
        let resized = resize_rect(start(), ResizeEdge::SouthEast, 30, 20);
        assert_eq!(
            resized,
            WindowRect {
                x: 100,
                y: 100,
                w: 630,
                h: 420,
            }
        );
    }

    #[test]
    fn west_and_north_edges_move_origin_while_shrinking() {
        let resized = resize_rect(start(), ResizeEdge::NorthWest, 10, 15);
        assert_eq!(
            resized,
            WindowRect {
                x: 110,
                y: 115,
                w: 590,
                h: 385,
            }
        );
    }

    #[test]
    fn opposite_edges_cancel_out() {
        let grown = resize_rect(start(), ResizeEdge::East, 25, 0);
        let shrunk = resize_rect(grown, ResizeEdge::East, -25, 0);
        assert_eq!(shrunk, start());
    }

    #[test]
    fn chrome_minimums_clamp_committed_sizes() {
        let tiny = resize_rect(start(), ResizeEdge::SouthEast, -500, -300)
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        assert_eq!(tiny.w, MIN_WINDOW_WIDTH);
        assert_eq!(tiny.h, MIN_WINDOW_HEIGHT);
    }
}
