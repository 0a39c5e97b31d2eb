//! Viewport and coordinate transformation for the editing surface.
//!
//! Handles conversion between scene coordinates (floor-plan units)
//! and viewport coordinates (screen pixels). Both axes point the
//! same way in both spaces; the transform is a uniform zoom plus a
//! pan offset:
//!
//! ```text
//! viewport = scene * zoom + pan
//! ```
//!
//! Guide lines are expressed in viewport space, so the snap engine
//! runs every snapped coordinate through this transform.

use std::fmt;

use deskplan_core::constants::{MAX_PAN, MAX_ZOOM, MIN_ZOOM};
use deskplan_core::Point;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom with no pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the permitted range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Gets the pan offset (X coordinate, viewport pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, viewport pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset, clamped on both axes.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x.clamp(-MAX_PAN, MAX_PAN);
        self.pan_y = y.clamp(-MAX_PAN, MAX_PAN);
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.set_pan(self.pan_x + dx, self.pan_y + dy);
    }

    /// Resets zoom and pan to the identity transform.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Converts a scene coordinate to viewport pixels.
    pub fn scene_to_viewport(&self, scene_x: f64, scene_y: f64) -> (f64, f64) {
        (
            scene_x * self.zoom + self.pan_x,
            scene_y * self.zoom + self.pan_y,
        )
    }

    /// Converts a viewport pixel position to scene coordinates.
    pub fn viewport_to_scene(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Zooms to a point, maintaining that point's screen position.
    ///
    /// Useful for "zoom to cursor" behavior on wheel events.
    pub fn zoom_to_point(&mut self, scene_point: &Point, new_zoom: f64) {
        let (pixel_x, pixel_y) = self.scene_to_viewport(scene_point.x, scene_point.y);
        self.set_zoom(new_zoom);
        self.set_pan(
            pixel_x - scene_point.x * self.zoom,
            pixel_y - scene_point.y * self.zoom,
        );
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut vp = Viewport::new();
        vp.set_zoom(100.0);
        assert_eq!(vp.zoom(), MAX_ZOOM);
        vp.set_zoom(0.0001);
        assert_eq!(vp.zoom(), MIN_ZOOM);
    }

    #[test]
    fn pan_is_clamped() {
        let mut vp = Viewport::new();
        vp.set_pan(5000.0, -5000.0);
        assert_eq!(vp.pan_x(), MAX_PAN);
        assert_eq!(vp.pan_y(), -MAX_PAN);
    }

    #[test]
    fn scene_viewport_round_trip() {
        let mut vp = Viewport::new();
        vp.set_zoom(2.0);
        vp.set_pan(100.0, -40.0);

        let (px, py) = vp.scene_to_viewport(30.0, 50.0);
        assert_eq!((px, py), (160.0, 60.0));

        let back = vp.viewport_to_scene(px, py);
        assert!((back.x - 30.0).abs() < 1e-9);
        assert!((back.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_to_point_keeps_anchor_fixed() {
        let mut vp = Viewport::new();
        vp.set_pan(20.0, 20.0);
        let anchor = Point::new(100.0, 80.0);
        let before = vp.scene_to_viewport(anchor.x, anchor.y);

        vp.zoom_to_point(&anchor, 3.0);
        let after = vp.scene_to_viewport(anchor.x, anchor.y);

        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }
}
