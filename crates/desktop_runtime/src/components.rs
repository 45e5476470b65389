//! Shell UI composition: menu bar, desktop stage, window chrome, and dock.

mod dock;
mod icon_grid;
mod menu_bar;
mod shell;
mod window;

pub use shell::DesktopShell;

use window_registry::WindowRect;

use crate::model::{PointerPosition, ResizeEdge};

pub(crate) const MENU_BAR_HEIGHT_PX: i32 = 40;

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

/// Keeps a dragged window's origin inside the stage, mirroring the original
/// chrome's parent-bounds behavior. Size is untouched; oversized windows pin
/// to the stage origin.
pub(crate) fn clamp_to_viewport(rect: WindowRect, viewport: WindowRect) -> WindowRect {
    let max_x = viewport.x + viewport.w - rect.w;
    let max_y = viewport.y + viewport.h - rect.h;
    WindowRect {
        x: rect.x.min(max_x).max(viewport.x),
        y: rect.y.min(max_y).max(viewport.y),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 40,
        w: 1280,
        h: 760,
    };

    #[test]
    fn drag_clamp_keeps_windows_inside_the_stage() {
        let rect = WindowRect {
            x: -50,
            y: 0,
            w: 600,
            h: 400,
        };
        let clamped = clamp_to_viewport(rect, VIEWPORT);
        assert_eq!((clamped.x, clamped.y), (0, 40));

        let rect = WindowRect {
            x: 2000,
            y: 2000,
            w: 600,
            h: 400,
        };
        let clamped = clamp_to_viewport(rect, VIEWPORT);
        assert_eq!((clamped.x, clamped.y), (1280 - 600, 40 + 760 - 400));
    }

    #[test]
    fn oversized_windows_pin_to_the_stage_origin() {
        let rect = WindowRect {
            x: 500,
            y: 500,
            w: 2000,
            h: 2000,
        };
        let clamped = clamp_to_viewport(rect, VIEWPORT);
        assert_eq!((clamped.x, clamped.y), (VIEWPORT.x, VIEWPORT.y));
    }
}
