//! Geometry engine: oriented bounding boxes and aggregate bounds.
//!
//! Pure functions over scene objects. No state, no side effects.

use deskplan_core::{Bounds, Point};

use crate::scene::{Scene, SceneObject};

/// Minimal axis-aligned rectangle enclosing one or more objects'
/// visible extent, expressed as center plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes the bounding box of a set of scene objects.
///
/// For each object the half-size vector comes from the scaled,
/// unrotated dimensions. A rotated object's half-extents grow to
/// those of the axis-aligned box enclosing the rotated rectangle:
///
/// ```text
/// rx = |hx * cos(a)| + |hy * sin(a)|
/// ry = |hx * sin(a)| + |hy * cos(a)|
/// ```
///
/// which is exact for rectangles, not an approximation. The two
/// extreme corners of every object are accumulated into one point
/// set and the minimal enclosing rectangle of that set is returned.
///
/// Returns `None` for an empty input; a single object goes through
/// the same accumulation path as the general case.
pub fn bounding_box_of(objects: &[&SceneObject]) -> Option<BoundingBox> {
    if objects.is_empty() {
        return None;
    }

    let mut corners: Vec<Point> = Vec::with_capacity(objects.len() * 2);
    for object in objects {
        let center = object.center();
        let mut half = Point::new(object.scaled_width() / 2.0, object.scaled_height() / 2.0);
        if object.angle != 0.0 {
            let rad = object.angle.to_radians();
            let sine = rad.sin().abs();
            let cosine = rad.cos().abs();
            half = Point::new(
                half.x * cosine + half.y * sine,
                half.x * sine + half.y * cosine,
            );
        }
        corners.push(center - half);
        corners.push(center + half);
    }

    let bounds = Bounds::from_points(&corners)?;
    let center = bounds.center();
    Some(BoundingBox {
        center_x: center.x,
        center_y: center.y,
        width: bounds.width(),
        height: bounds.height(),
    })
}

/// The region a JSON/image export should cover, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl From<BoundingBox> for ExportFrame {
    fn from(b: BoundingBox) -> Self {
        Self {
            left: b.center_x - b.width / 2.0,
            top: b.center_y - b.height / 2.0,
            width: b.width,
            height: b.height,
            center: Point::new(b.center_x, b.center_y),
        }
    }
}

/// Computes the export frame for a scene.
///
/// The painter's box wins when present (exports are cropped to the
/// floor-plan surface); otherwise the box of all objects; otherwise
/// the raw canvas extent, which is the fallback for an empty
/// bounding-box result.
pub fn export_frame(scene: &Scene) -> ExportFrame {
    let all: Vec<&SceneObject> = scene.objects().iter().collect();
    let all_box = bounding_box_of(&all);

    let painter_box = scene
        .painter()
        .and_then(|painter| bounding_box_of(&[painter]));

    if let Some(b) = painter_box.or(all_box) {
        return b.into();
    }

    let props = scene.properties();
    ExportFrame {
        left: 0.0,
        top: 0.0,
        width: props.width,
        height: props.height,
        center: Point::new(props.width / 2.0, props.height / 2.0),
    }
}
