//! Fake video call: a canvas stage with a stand-in face and selectable
//! canvas-drawn filters.

mod filter;

pub use filter::{overlay_shapes, FaceLandmarks, FilterKind, Landmark, Shape, STAGE_FACE};

use desktop_app_contract::AppMountContext;
use leptos::*;

const STAGE_WIDTH: u32 = 640;
const STAGE_HEIGHT: u32 = 480;

/// FaceTime window view.
#[component]
pub fn FaceTimeApp(ctx: AppMountContext) -> impl IntoView {
    let _ = ctx;
    let active_filter = create_rw_signal(FilterKind::Cat);
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let kind = active_filter.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_stage(&canvas, kind);
        }
    });

    view! {
        <div class="facetime-shell">
            <div class="facetime-stage">
                <canvas
                    node_ref=canvas_ref
                    class="facetime-canvas"
                    width=STAGE_WIDTH
                    height=STAGE_HEIGHT
                    aria-label="Camera preview"
                ></canvas>
                <span class="facetime-badge">"Camera off — preview"</span>
            </div>

            <div class="facetime-controls" role="radiogroup" aria-label="Face filter">
                {FilterKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == kind {
                                        "filter-choice selected"
                                    } else {
                                        "filter-choice"
                                    }
                                }
                                role="radio"
                                aria-checked=move || active_filter.get() == kind
                                on:click=move |_| active_filter.set(kind)
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn draw_stage(canvas: &web_sys::HtmlCanvasElement, kind: FilterKind) {
    use wasm_bindgen::JsCast;

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let width = STAGE_WIDTH as f64;
    let height = STAGE_HEIGHT as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Backdrop and stand-in face.
    ctx.set_fill_style_str("#1d2733");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str("#e8c39e");
    ctx.begin_path();
    let _ = ctx.ellipse(
        width * STAGE_FACE.nose.x as f64,
        height * STAGE_FACE.nose.y as f64,
        width * 0.17,
        height * 0.26,
        0.0,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
    ctx.set_fill_style_str("#2c2c2c");
    for eye in [STAGE_FACE.left_eye, STAGE_FACE.right_eye] {
        ctx.begin_path();
        let _ = ctx.ellipse(
            width * eye.x as f64,
            height * eye.y as f64,
            7.0,
            7.0,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    // Filter overlay.
    ctx.set_fill_style_str("#f28bb4");
    ctx.set_stroke_style_str("#f2f2f2");
    ctx.set_line_width(2.5);
    for shape in overlay_shapes(kind, &STAGE_FACE, STAGE_WIDTH as f32, STAGE_HEIGHT as f32) {
        match shape {
            Shape::Ellipse {
                cx,
                cy,
                rx,
                ry,
                filled,
            } => {
                ctx.begin_path();
                let _ = ctx.ellipse(
                    cx as f64,
                    cy as f64,
                    rx as f64,
                    ry as f64,
                    0.0,
                    0.0,
                    std::f64::consts::TAU,
                );
                if filled {
                    ctx.fill();
                } else {
                    ctx.stroke();
                }
            }
            Shape::Triangle { points } => {
                ctx.begin_path();
                ctx.move_to(points[0].0 as f64, points[0].1 as f64);
                ctx.line_to(points[1].0 as f64, points[1].1 as f64);
                ctx.line_to(points[2].0 as f64, points[2].1 as f64);
                ctx.close_path();
                ctx.fill();
            }
            Shape::Line { from, to } => {
                ctx.begin_path();
                ctx.move_to(from.0 as f64, from.1 as f64);
                ctx.line_to(to.0 as f64, to.1 as f64);
                ctx.stroke();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn draw_stage(_canvas: &web_sys::HtmlCanvasElement, _kind: FilterKind) {}
