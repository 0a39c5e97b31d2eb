//! Selection projection: the UI-facing record of the active object
//! and the narrow setter family that writes edits back.
//!
//! Every setter is a silent no-op without an active object or a
//! current record, and raises the session's render request. History
//! commits are not triggered here; the host reports modification
//! completion separately.

use deskplan_core::constants::{
    DEFAULT_FILL, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, ROTATE_STEP_DEGREES,
};

use crate::scene::{ObjectKind, SceneObject};
use crate::session::EditorSession;

/// Flattened snapshot of the active object's attributes, consumed
/// by property-panel controls. Exists only while a selection is
/// active.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRecord {
    pub kind: ObjectKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Radius for circular objects.
    pub radius: Option<f64>,
    pub name: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub flip_x: bool,
    pub flip_y: bool,
    pub angle: f64,
}

/// Projects an object's live attributes into a selection record.
///
/// Width and height prefer the host-cached computed size over the
/// base dimensions; missing style falls back to fixed defaults.
pub fn project(obj: &SceneObject) -> SelectionRecord {
    SelectionRecord {
        kind: obj.kind,
        left: obj.left,
        top: obj.top,
        width: obj.cache_width.unwrap_or(obj.width),
        height: obj.cache_height.unwrap_or(obj.height),
        radius: (obj.kind == ObjectKind::Circle).then_some(obj.radius),
        name: obj.name.clone(),
        fill: obj.fill.clone().unwrap_or_else(|| DEFAULT_FILL.to_string()),
        stroke: obj
            .stroke
            .clone()
            .unwrap_or_else(|| DEFAULT_STROKE.to_string()),
        stroke_width: if obj.stroke_width != 0.0 {
            obj.stroke_width
        } else {
            DEFAULT_STROKE_WIDTH
        },
        flip_x: obj.flip_x,
        flip_y: obj.flip_y,
        angle: obj.angle,
    }
}

impl EditorSession {
    /// The current selection record, if any object is active.
    pub fn selection(&self) -> Option<&SelectionRecord> {
        self.selection.as_ref()
    }

    /// Re-projects the active object into the record. Clears the
    /// record when nothing is active.
    pub fn refresh_selection(&mut self) {
        self.selection = self.scene.active_object().map(project);
    }

    /// Updates the record after the host reports a completed
    /// modification gesture: geometry comes back rounded, the way
    /// the property panel displays it.
    pub fn refresh_selection_after_modification(&mut self) {
        let Some(obj) = self.scene.active_object() else {
            return;
        };
        if let Some(record) = self.selection.as_mut() {
            record.left = obj.left.round();
            record.top = obj.top.round();
            record.width = obj.scaled_width().round();
            record.height = obj.scaled_height().round();
            record.radius =
                (obj.kind == ObjectKind::Circle).then(|| (obj.scaled_width() / 2.0).round());
            record.angle = obj.angle;
            record.flip_x = obj.flip_x;
            record.flip_y = obj.flip_y;
        }
    }

    fn with_active(&mut self, apply: impl FnOnce(&mut SceneObject, &mut SelectionRecord)) {
        let Some(record) = self.selection.as_mut() else {
            return;
        };
        let Some(obj) = self.scene.active_object_mut() else {
            return;
        };
        apply(obj, record);
        self.request_render();
    }

    /// Sets the active object's fill color.
    pub fn set_fill(&mut self, color: &str) {
        self.with_active(|obj, record| {
            obj.fill = Some(color.to_string());
            record.fill = color.to_string();
        });
    }

    /// Sets the active object's stroke color.
    pub fn set_stroke(&mut self, color: &str) {
        self.with_active(|obj, record| {
            obj.stroke = Some(color.to_string());
            record.stroke = color.to_string();
        });
    }

    /// Sets the active object's stroke width.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.with_active(|obj, record| {
            obj.stroke_width = width;
            record.stroke_width = width;
        });
    }

    /// Sets the active object's name label.
    pub fn set_name(&mut self, name: &str) {
        self.with_active(|obj, record| {
            obj.name = name.to_string();
            record.name = name.to_string();
        });
    }

    /// Toggles horizontal flip.
    pub fn toggle_flip_x(&mut self) {
        self.with_active(|obj, record| {
            obj.flip_x = !obj.flip_x;
            record.flip_x = obj.flip_x;
        });
    }

    /// Toggles vertical flip.
    pub fn toggle_flip_y(&mut self) {
        self.with_active(|obj, record| {
            obj.flip_y = !obj.flip_y;
            record.flip_y = obj.flip_y;
        });
    }

    /// Sets the rotation angle in degrees.
    pub fn set_angle(&mut self, angle: f64) {
        self.with_active(|obj, record| {
            obj.angle = angle;
            record.angle = angle;
        });
    }

    /// Rotates the active object 45 degrees counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.with_active(|obj, record| {
            obj.angle -= ROTATE_STEP_DEGREES;
            record.angle = obj.angle;
        });
    }

    /// Rotates the active object 45 degrees clockwise.
    pub fn rotate_right(&mut self) {
        self.with_active(|obj, record| {
            obj.angle += ROTATE_STEP_DEGREES;
            record.angle = obj.angle;
        });
    }

    /// Sets the active object's absolute base size.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.with_active(|obj, record| {
            obj.width = width;
            obj.height = height;
            record.width = width;
            record.height = height;
        });
    }

    /// Sets the radius of a circular active object. No-op for
    /// other kinds.
    pub fn set_radius(&mut self, radius: f64) {
        self.with_active(|obj, record| {
            if obj.kind == ObjectKind::Circle {
                obj.radius = radius;
                record.radius = Some(radius);
            }
        });
    }
}
