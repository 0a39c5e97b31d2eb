//! Editor-wide constants.
//!
//! Snap and history tuning values are fixed by design; callers that
//! need different values pass them through explicitly rather than
//! mutating globals.

/// Grid cell size for grid snapping, in scene units.
pub const SNAP_GRID: f64 = 20.0;

/// Maximum distance at which a snap candidate attracts the moving
/// object. Exclusive: a delta of exactly this value does not snap.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Maximum number of entries retained on the undo stack.
pub const MAX_HISTORY_LENGTH: usize = 20;

/// Default floor-plan surface width in scene units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;

/// Default floor-plan surface height in scene units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;

/// Default background fill of the painter object.
pub const DEFAULT_CANVAS_BACKGROUND: &str = "#F2F2F2";

/// Fallback fill color when an object carries none.
pub const DEFAULT_FILL: &str = "#000000";

/// Fallback stroke color when an object carries none.
pub const DEFAULT_STROKE: &str = "#000000";

/// Fallback stroke width when an object carries none.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Angle delta applied by the rotate-left / rotate-right shortcuts.
pub const ROTATE_STEP_DEGREES: f64 = 45.0;

/// Reserved name of the background painter object.
pub const PAINTER_NAME: &str = "painter";

/// Reserved name of guide-line overlay objects. Retained for
/// compatibility with documents written before the `transient`
/// flag existed.
pub const GUIDE_LINE_NAME: &str = "modifyPolyline";

/// Smallest permitted viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.01;

/// Largest permitted viewport zoom factor.
pub const MAX_ZOOM: f64 = 20.0;

/// Pan offset clamp, in viewport pixels, applied on both axes.
pub const MAX_PAN: f64 = 1000.0;
