//! # Deskplan Editor
//!
//! This crate provides the geometry, alignment, and history core of
//! the Deskplan office floor-plan editor. Users place, transform,
//! and arrange desks and other furniture objects on a bounded
//! canvas; this crate computes the geometry and state deltas that a
//! host renderer applies.
//!
//! ## Core Components
//!
//! ### Scene
//! - **Scene**: Ordered object list with a reserved background
//!   painter, active-object tracking, and z-order commands
//! - **Viewport**: Zoom and pan with scene/viewport conversion
//!
//! ### Engines
//! - **Geometry**: Oriented bounding boxes and aggregate bounds
//! - **Snapping**: Grid and object alignment during drag with
//!   guide-line overlay state
//! - **History**: Diff-based, bounded undo stack over full scene
//!   snapshots
//! - **Selection Projection**: Flattened attribute record for UI
//!   property panels, with narrow write-back setters
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (event dispatch, render requests)
//!   ├── Scene (objects, painter, viewport)
//!   ├── SnapEngine (guide lines, drag alignment)
//!   ├── HistoryStack (snapshots + positional diffs)
//!   └── SelectionRecord (UI-facing projection)
//! ```
//!
//! All operations run synchronously inside host UI event callbacks;
//! there is no background computation and no locking.

pub mod commands;
pub mod diff;
pub mod export;
pub mod geometry;
pub mod history;
pub mod scene;
pub mod selection;
pub mod serialization;
pub mod session;
pub mod snap;
pub mod viewport;

pub use commands::LayerCommand;
pub use diff::{apply_diff, calculate_diff, DiffChange, SceneDiff};
pub use geometry::{bounding_box_of, export_frame, BoundingBox, ExportFrame};
pub use history::{HistoryEntry, HistoryStack};
pub use scene::{CanvasProperties, ObjectKind, Scene, SceneObject};
pub use selection::SelectionRecord;
pub use serialization::{snapshot_scene, ObjectData, SceneSnapshot};
pub use session::{EditorEvent, EditorMode, EditorSession};
pub use snap::{GuideLine, Orientation, SnapEngine};
pub use viewport::Viewport;

pub use deskplan_core::{Bounds, Point};
