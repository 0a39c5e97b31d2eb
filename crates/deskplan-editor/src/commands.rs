//! Stacking-order commands and object removal for the active
//! selection.

use crate::session::EditorSession;

/// Relative or absolute stacking move applied to the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerCommand {
    /// One step toward the top.
    Up,
    /// One step toward the bottom.
    Down,
    /// All the way to the top.
    Top,
    /// All the way to the bottom, directly above the painter.
    Bottom,
}

impl EditorSession {
    /// Applies a stacking command to the active object.
    ///
    /// Reordering counts as a content change for history purposes,
    /// so a snapshot is committed. No-op without a selection.
    pub fn layer_element(&mut self, command: LayerCommand) {
        let Some(id) = self.scene.active_id() else {
            return;
        };
        match command {
            LayerCommand::Up => self.scene.bring_forward(id),
            LayerCommand::Down => self.scene.send_backwards(id),
            LayerCommand::Top => self.scene.bring_to_front(id),
            LayerCommand::Bottom => self.scene.send_to_back(id),
        }
        self.commit_history();
        self.request_render();
    }

    /// Deletes the active object and commits the removal.
    /// No-op without a selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.scene.active_id() else {
            return;
        };
        if self.scene.remove_object(id).is_some() {
            self.selection = None;
            self.commit_history();
            self.request_render();
        }
    }
}
