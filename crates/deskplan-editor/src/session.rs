//! Editor session: owns the scene, engines, and selection record,
//! and dispatches host UI events to them.
//!
//! The session is plain owned state handed to whoever drives the
//! editor. All coordination between the snapping engine, history
//! stack, and selection projection happens through it, so two
//! sessions never share state.

use tracing::debug;

use crate::history::HistoryStack;
use crate::scene::{CanvasProperties, Scene};
use crate::selection::SelectionRecord;
use crate::serialization::{restore_scene, snapshot_scene};
use crate::snap::SnapEngine;

/// Interaction mode of the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Objects can be selected, moved, and transformed.
    Editor,
    /// Read-only: every object is locked in place.
    View,
}

/// Host UI events forwarded into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The object with this id received a position update during a
    /// drag gesture.
    ObjectMoving { id: u64 },
    /// A selection came into existence.
    SelectionCreated,
    /// The active selection switched to a different object.
    SelectionChanged,
    /// The selection was dismissed.
    SelectionCleared,
    /// A modification gesture (move, scale, rotate) completed.
    ModificationCommitted,
}

/// One editing session over one floor plan.
#[derive(Debug)]
pub struct EditorSession {
    pub(crate) scene: Scene,
    pub(crate) snap: SnapEngine,
    pub(crate) history: HistoryStack,
    pub(crate) selection: Option<SelectionRecord>,
    mode: EditorMode,
    needs_render: bool,
}

impl EditorSession {
    /// Creates a session over a fresh scene and commits the initial
    /// state so the first user action can be undone.
    pub fn new() -> Self {
        Self::with_properties(CanvasProperties::default())
    }

    /// Creates a session with the given surface properties.
    pub fn with_properties(properties: CanvasProperties) -> Self {
        let mut scene = Scene::with_properties(properties);
        let mut snap = SnapEngine::new();
        snap.init_guide_lines(&mut scene);
        let mut history = HistoryStack::new();
        history.commit(snapshot_scene(&scene));
        Self {
            scene,
            snap,
            history,
            selection: None,
            mode: EditorMode::Editor,
            needs_render: false,
        }
    }

    /// Routes a host UI event to the engines it concerns.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::ObjectMoving { id } => {
                self.snap.handle_object_moving(&mut self.scene, id);
                self.request_render();
            }
            EditorEvent::SelectionCreated | EditorEvent::SelectionChanged => {
                self.refresh_selection();
            }
            EditorEvent::SelectionCleared => {
                self.selection = None;
            }
            EditorEvent::ModificationCommitted => {
                self.snap.hide_guide_lines(&mut self.scene);
                self.refresh_selection_after_modification();
                self.commit_history();
                self.request_render();
            }
        }
    }

    /// Commits a snapshot of the current scene to history.
    pub fn commit_history(&mut self) {
        self.history.commit(snapshot_scene(&self.scene));
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Restores the previous committed state.
    ///
    /// A restore replaces the object list wholesale, which discards
    /// the transient guide lines; they are recreated immediately.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        restore_scene(&mut self.scene, &snapshot);
        self.snap.init_guide_lines(&mut self.scene);
        self.selection = None;
        self.request_render();
        debug!("Restored previous state");
        true
    }

    /// Current interaction mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches interaction mode, locking or unlocking every
    /// user-editable object.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        let locked = mode == EditorMode::View;
        for obj in self.scene.objects_mut() {
            if obj.is_painter() || obj.transient {
                continue;
            }
            obj.lock_movement_x = locked;
            obj.lock_movement_y = locked;
            obj.lock_scaling_x = locked;
            obj.lock_scaling_y = locked;
            obj.lock_rotation = locked;
            obj.selectable = !locked;
            obj.evented = !locked;
        }
        if locked {
            self.scene.discard_active();
            self.selection = None;
        }
        self.request_render();
    }

    /// Selects an object and refreshes the projection record.
    pub fn select(&mut self, id: u64) {
        self.scene.set_active(Some(id));
        self.handle_event(if self.selection.is_some() {
            EditorEvent::SelectionChanged
        } else {
            EditorEvent::SelectionCreated
        });
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.scene.discard_active();
        self.handle_event(EditorEvent::SelectionCleared);
    }

    /// The scene under edit.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The snapping engine.
    pub fn snap(&self) -> &SnapEngine {
        &self.snap
    }

    /// Mutable access to the snapping engine, e.g. for the snap and
    /// guide-visibility toggles.
    pub fn snap_mut(&mut self) -> &mut SnapEngine {
        &mut self.snap
    }

    /// The undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Flags that the host should redraw.
    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Consumes the pending render request, if any.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
