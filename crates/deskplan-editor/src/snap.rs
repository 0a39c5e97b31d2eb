//! Snapping engine: grid and object alignment during drag.
//!
//! On every position update of a dragged object the engine resets
//! both guide lines, tries grid snapping per axis first, then
//! scans other objects for edge/opposite-edge/center alignment on
//! any axis the grid did not resolve. The first matching candidate
//! wins an axis; scanning stops once both axes are resolved.
//!
//! Guide lines are transient scene objects (excluded from
//! snapshots) plus engine-side overlay state with positions in
//! viewport pixel space (`scene * zoom + pan`).

use tracing::debug;

use deskplan_core::constants::{GUIDE_LINE_NAME, SNAP_GRID, SNAP_THRESHOLD};

use crate::scene::{ObjectKind, Scene, SceneObject};

/// Guide line orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Ephemeral overlay line indicating an active snap alignment.
/// `position` is in viewport pixels: the Y of the line for a
/// horizontal guide, the X for a vertical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub orientation: Orientation,
    pub position: f64,
    pub visible: bool,
}

impl GuideLine {
    fn hidden(orientation: Orientation) -> Self {
        Self {
            orientation,
            position: 0.0,
            visible: false,
        }
    }
}

/// Axis-aligned drag-time bounds of an object.
#[derive(Debug, Clone, Copy)]
struct ObjectBounds {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

impl ObjectBounds {
    fn of(obj: &SceneObject) -> Self {
        let width = obj.scaled_width();
        let height = obj.scaled_height();
        Self {
            left: obj.left,
            top: obj.top,
            right: obj.left + width,
            bottom: obj.top + height,
            width,
            height,
        }
    }
}

/// Snapping engine state for one editor session.
#[derive(Debug, Clone)]
pub struct SnapEngine {
    snap_enabled: bool,
    show_guides: bool,
    grid: f64,
    threshold: f64,
    horizontal: GuideLine,
    vertical: GuideLine,
    horizontal_guide_id: Option<u64>,
    vertical_guide_id: Option<u64>,
}

impl SnapEngine {
    /// Creates an engine with the fixed grid and threshold.
    pub fn new() -> Self {
        Self {
            snap_enabled: true,
            show_guides: true,
            grid: SNAP_GRID,
            threshold: SNAP_THRESHOLD,
            horizontal: GuideLine::hidden(Orientation::Horizontal),
            vertical: GuideLine::hidden(Orientation::Vertical),
            horizontal_guide_id: None,
            vertical_guide_id: None,
        }
    }

    /// Whether snapping mutates dragged positions.
    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    /// Whether guide lines are rendered. Snap mechanics still apply
    /// while guides are hidden.
    pub fn show_guides(&self) -> bool {
        self.show_guides
    }

    pub fn toggle_snap(&mut self) {
        self.snap_enabled = !self.snap_enabled;
    }

    pub fn toggle_guides(&mut self) {
        self.show_guides = !self.show_guides;
    }

    /// Current horizontal guide overlay state.
    pub fn horizontal_guide(&self) -> &GuideLine {
        &self.horizontal
    }

    /// Current vertical guide overlay state.
    pub fn vertical_guide(&self) -> &GuideLine {
        &self.vertical
    }

    /// (Re)creates the two guide-line objects in the scene.
    ///
    /// Called when the editing surface initializes and again after
    /// every full-state reload, which discards transient objects.
    /// Existing guides are removed first so exactly two ever exist.
    pub fn init_guide_lines(&mut self, scene: &mut Scene) {
        scene.remove_transient_objects();
        self.horizontal_guide_id = Some(scene.add_object(Self::guide_object()));
        self.vertical_guide_id = Some(scene.add_object(Self::guide_object()));
        self.horizontal = GuideLine::hidden(Orientation::Horizontal);
        self.vertical = GuideLine::hidden(Orientation::Vertical);
    }

    fn guide_object() -> SceneObject {
        let mut line = SceneObject::new(ObjectKind::Line);
        line.name = GUIDE_LINE_NAME.to_string();
        line.stroke = Some("#00aeff".to_string());
        line.stroke_width = 1.0;
        line.stroke_dash = Some(vec![5.0, 5.0]);
        line.selectable = false;
        line.evented = false;
        line.transient = true;
        line.visible = false;
        line
    }

    /// Hides both guide lines, e.g. when a drag gesture completes.
    pub fn hide_guide_lines(&mut self, scene: &mut Scene) {
        self.horizontal.visible = false;
        self.vertical.visible = false;
        self.sync_guide_objects(scene);
    }

    /// Handles a position update of the dragged object.
    ///
    /// Mutates the moving object's `left`/`top` when a snap
    /// resolves (respecting per-axis movement locks) and updates
    /// guide overlay state. With snapping disabled this is a pure
    /// pass-through that keeps the guides hidden.
    pub fn handle_object_moving(&mut self, scene: &mut Scene, moving_id: u64) {
        self.horizontal = GuideLine::hidden(Orientation::Horizontal);
        self.vertical = GuideLine::hidden(Orientation::Vertical);

        if !self.snap_enabled {
            self.sync_guide_objects(scene);
            return;
        }

        let Some(moving) = scene.get(moving_id) else {
            self.sync_guide_objects(scene);
            return;
        };
        if moving.transient || moving.is_painter() {
            self.sync_guide_objects(scene);
            return;
        }

        let obj = ObjectBounds::of(moving);
        let lock_x = moving.lock_movement_x;
        let lock_y = moving.lock_movement_y;
        let zoom = scene.viewport().zoom();
        let pan_x = scene.viewport().pan_x();
        let pan_y = scene.viewport().pan_y();

        // Candidate set: every other visible object that is neither
        // a guide line nor the background painter.
        let candidates: Vec<ObjectBounds> = scene
            .objects()
            .iter()
            .filter(|o| o.id != moving_id && !o.transient && !o.is_painter() && o.visible)
            .map(ObjectBounds::of)
            .collect();

        let mut snap_horizontal = false;
        let mut snap_vertical = false;
        let mut new_left = None;
        let mut new_top = None;

        // Grid snap, independent per axis, evaluated first.
        if self.grid > 0.0 {
            let grid_snap_x = (obj.left / self.grid).round() * self.grid;
            if !lock_x && (grid_snap_x - obj.left).abs() < self.threshold {
                new_left = Some(grid_snap_x);
                snap_vertical = true;
                self.vertical.position = grid_snap_x * zoom + pan_x;
                self.vertical.visible = true;
            }

            let grid_snap_y = (obj.top / self.grid).round() * self.grid;
            if !lock_y && (grid_snap_y - obj.top).abs() < self.threshold {
                new_top = Some(grid_snap_y);
                snap_horizontal = true;
                self.horizontal.position = grid_snap_y * zoom + pan_y;
                self.horizontal.visible = true;
            }
        }

        // Object-to-object snap for any axis the grid left open.
        // Per target, strict priority: leading edge, trailing edge,
        // center. First match wins the axis.
        for target in &candidates {
            if !snap_horizontal && !lock_y {
                if (obj.top - target.top).abs() < self.threshold {
                    new_top = Some(target.top);
                    snap_horizontal = true;
                    self.horizontal.position = target.top * zoom + pan_y;
                    self.horizontal.visible = true;
                } else if (obj.bottom - target.bottom).abs() < self.threshold {
                    new_top = Some(target.bottom - obj.height);
                    snap_horizontal = true;
                    self.horizontal.position = target.bottom * zoom + pan_y;
                    self.horizontal.visible = true;
                } else if ((obj.top + obj.height / 2.0) - (target.top + target.height / 2.0)).abs()
                    < self.threshold
                {
                    new_top = Some(target.top + target.height / 2.0 - obj.height / 2.0);
                    snap_horizontal = true;
                    self.horizontal.position = (target.top + target.height / 2.0) * zoom + pan_y;
                    self.horizontal.visible = true;
                }
            }

            if !snap_vertical && !lock_x {
                if (obj.left - target.left).abs() < self.threshold {
                    new_left = Some(target.left);
                    snap_vertical = true;
                    self.vertical.position = target.left * zoom + pan_x;
                    self.vertical.visible = true;
                } else if (obj.right - target.right).abs() < self.threshold {
                    new_left = Some(target.right - obj.width);
                    snap_vertical = true;
                    self.vertical.position = target.right * zoom + pan_x;
                    self.vertical.visible = true;
                } else if ((obj.left + obj.width / 2.0) - (target.left + target.width / 2.0)).abs()
                    < self.threshold
                {
                    new_left = Some(target.left + target.width / 2.0 - obj.width / 2.0);
                    snap_vertical = true;
                    self.vertical.position = (target.left + target.width / 2.0) * zoom + pan_x;
                    self.vertical.visible = true;
                }
            }

            if snap_horizontal && snap_vertical {
                break;
            }
        }

        if let Some(moving) = scene.get_mut(moving_id) {
            if let Some(left) = new_left {
                moving.left = left;
            }
            if let Some(top) = new_top {
                moving.top = top;
            }
        }

        if snap_horizontal || snap_vertical {
            debug!(
                moving_id,
                snap_horizontal, snap_vertical, "Snap resolved during drag"
            );
        }

        if !self.show_guides {
            self.horizontal.visible = false;
            self.vertical.visible = false;
        }
        self.sync_guide_objects(scene);
    }

    /// Mirrors overlay state onto the transient guide objects.
    fn sync_guide_objects(&self, scene: &mut Scene) {
        if let Some(obj) = self.horizontal_guide_id.and_then(|id| scene.get_mut(id)) {
            obj.top = self.horizontal.position;
            obj.visible = self.horizontal.visible;
        }
        if let Some(obj) = self.vertical_guide_id.and_then(|id| scene.get_mut(id)) {
            obj.left = self.vertical.position;
            obj.visible = self.vertical.visible;
        }
    }
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new()
    }
}
