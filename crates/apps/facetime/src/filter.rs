//! Face-filter overlay geometry.
//!
//! Filters anchor to a fixed normalized landmark set (no detector runs in
//! this mockup) and produce plain drawable primitives, so the math tests
//! without a canvas.

/// Normalized point in the camera frame, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Horizontal position in `[0, 1]`.
    pub x: f32,
    /// Vertical position in `[0, 1]`.
    pub y: f32,
}

/// The facial anchor points the filters use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLandmarks {
    /// Top of the head region.
    pub forehead: Landmark,
    /// Nose tip.
    pub nose: Landmark,
    /// Bottom of the face.
    pub chin: Landmark,
    /// Left eye center (viewer's left).
    pub left_eye: Landmark,
    /// Right eye center.
    pub right_eye: Landmark,
    /// Left cheek edge.
    pub left_cheek: Landmark,
    /// Right cheek edge.
    pub right_cheek: Landmark,
}

/// The stand-in face rendered on the stage.
pub const STAGE_FACE: FaceLandmarks = FaceLandmarks {
    forehead: Landmark { x: 0.5, y: 0.28 },
    nose: Landmark { x: 0.5, y: 0.5 },
    chin: Landmark { x: 0.5, y: 0.72 },
    left_eye: Landmark { x: 0.42, y: 0.44 },
    right_eye: Landmark { x: 0.58, y: 0.44 },
    left_cheek: Landmark { x: 0.35, y: 0.54 },
    right_cheek: Landmark { x: 0.65, y: 0.54 },
};

/// Available filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Cat ears, nose, and whiskers.
    Cat,
    /// Round glasses.
    Glasses,
}

impl FilterKind {
    /// All filters, in picker order.
    pub const ALL: [FilterKind; 2] = [FilterKind::Cat, FilterKind::Glasses];

    /// Picker label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Glasses => "Glasses",
        }
    }
}

/// Drawable primitive in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Horizontal radius.
        rx: f32,
        /// Vertical radius.
        ry: f32,
        /// Fill instead of stroke.
        filled: bool,
    },
    /// Filled triangle.
    Triangle {
        /// Corner points.
        points: [(f32, f32); 3],
    },
    /// Stroked segment.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
    },
}

/// Computes the overlay for one filter over one face, in pixels.
pub fn overlay_shapes(
    kind: FilterKind,
    face: &FaceLandmarks,
    width: f32,
    height: f32,
) -> Vec<Shape> {
    let px = |landmark: Landmark| (landmark.x * width, landmark.y * height);
    let face_width = (face.right_cheek.x - face.left_cheek.x) * width;

    match kind {
        FilterKind::Cat => {
            let (forehead_x, forehead_y) = px(face.forehead);
            let (nose_x, nose_y) = px(face.nose);
            let ear_base = face_width * 0.35;
            let ear_height = face_width * 0.5;
            let ear_offset = face_width * 0.42;

            let mut shapes = vec![
                Shape::Triangle {
                    points: [
                        (forehead_x - ear_offset, forehead_y),
                        (forehead_x - ear_offset + ear_base, forehead_y),
                        (forehead_x - ear_offset + ear_base / 2.0, forehead_y - ear_height),
                    ],
                },
                Shape::Triangle {
                    points: [
                        (forehead_x + ear_offset - ear_base, forehead_y),
                        (forehead_x + ear_offset, forehead_y),
                        (forehead_x + ear_offset - ear_base / 2.0, forehead_y - ear_height),
                    ],
                },
                Shape::Ellipse {
                    cx: nose_x,
                    cy: nose_y,
                    rx: face_width * 0.08,
                    ry: face_width * 0.055,
                    filled: true,
                },
            ];

            let whisker_len = face_width * 0.55;
            for (side, cheek) in [(-1.0f32, face.left_cheek), (1.0, face.right_cheek)] {
                let (cheek_x, cheek_y) = px(cheek);
                for tilt in [-0.06f32, 0.0, 0.06] {
                    shapes.push(Shape::Line {
                        from: (cheek_x, cheek_y + tilt * height * 0.2),
                        to: (
                            cheek_x + side * whisker_len,
                            cheek_y + tilt * height,
                        ),
                    });
                }
            }
            shapes
        }
        FilterKind::Glasses => {
            let (left_x, left_y) = px(face.left_eye);
            let (right_x, right_y) = px(face.right_eye);
            let eye_distance = right_x - left_x;
            let lens = eye_distance * 0.38;

            vec![
                Shape::Ellipse {
                    cx: left_x,
                    cy: left_y,
                    rx: lens,
                    ry: lens,
                    filled: false,
                },
                Shape::Ellipse {
                    cx: right_x,
                    cy: right_y,
                    rx: lens,
                    ry: lens,
                    filled: false,
                },
                Shape::Line {
                    from: (left_x + lens, left_y),
                    to: (right_x - lens, right_y),
                },
                Shape::Line {
                    from: (left_x - lens, left_y),
                    to: (left_x - lens - eye_distance * 0.4, left_y - lens * 0.4),
                },
                Shape::Line {
                    from: (right_x + lens, right_y),
                    to: (right_x + lens + eye_distance * 0.4, right_y - lens * 0.4),
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const W: f32 = 640.0;
    const H: f32 = 480.0;

    #[test]
    fn cat_ears_rise_above_the_forehead() {
        let shapes = overlay_shapes(FilterKind::Cat, &STAGE_FACE, W, H);
        let forehead_y = STAGE_FACE.forehead.y * H;

        let apexes: Vec<f32> = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Triangle { points } => {
                    Some(points.iter().map(|p| p.1).fold(f32::MAX, f32::min))
                }
                _ => None,
            })
            .collect();
        assert_eq!(apexes.len(), 2);
        assert!(apexes.iter().all(|y| *y < forehead_y));
    }

    #[test]
    fn cat_nose_sits_on_the_nose_landmark() {
        let shapes = overlay_shapes(FilterKind::Cat, &STAGE_FACE, W, H);
        let nose = shapes.iter().find_map(|shape| match shape {
            Shape::Ellipse { cx, cy, filled: true, .. } => Some((*cx, *cy)),
            _ => None,
        });
        assert_eq!(nose, Some((STAGE_FACE.nose.x * W, STAGE_FACE.nose.y * H)));
    }

    #[test]
    fn whiskers_extend_to_both_sides() {
        let shapes = overlay_shapes(FilterKind::Cat, &STAGE_FACE, W, H);
        let nose_x = STAGE_FACE.nose.x * W;
        let (left, right): (Vec<_>, Vec<_>) = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Line { to, .. } => Some(to.0),
                _ => None,
            })
            .partition(|x| *x < nose_x);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn glasses_lenses_center_on_the_eyes_symmetrically() {
        let shapes = overlay_shapes(FilterKind::Glasses, &STAGE_FACE, W, H);
        let centers: Vec<(f32, f32)> = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Ellipse { cx, cy, filled: false, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect();

        assert_eq!(centers.len(), 2);
        let nose_x = STAGE_FACE.nose.x * W;
        let left_gap = nose_x - centers[0].0;
        let right_gap = centers[1].0 - nose_x;
        assert!((left_gap - right_gap).abs() < 1e-3);
        assert_eq!(centers[0].1, centers[1].1);
    }
}
