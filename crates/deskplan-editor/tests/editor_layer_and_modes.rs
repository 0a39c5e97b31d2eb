//! Integration tests for stacking commands, deletion, and view mode

use deskplan_editor::{EditorMode, EditorSession, LayerCommand, SceneObject};

fn session_with_two_desks() -> (EditorSession, u64, u64) {
    let mut session = EditorSession::new();
    let a = session.scene_mut().add_object(SceneObject::desk(0.0, 0.0, 60.0, 40.0));
    let b = session.scene_mut().add_object(SceneObject::desk(100.0, 0.0, 60.0, 40.0));
    (session, a, b)
}

#[test]
fn test_layer_top_and_bottom_keep_painter_pinned() {
    let (mut session, a, _b) = session_with_two_desks();
    let painter_id = session.scene().painter().unwrap().id;
    session.select(a);

    session.layer_element(LayerCommand::Bottom);
    assert_eq!(session.scene().index_of(painter_id), Some(0));
    assert_eq!(session.scene().index_of(a), Some(1));

    session.layer_element(LayerCommand::Top);
    assert_eq!(session.scene().index_of(painter_id), Some(0));
    assert_eq!(
        session.scene().index_of(a),
        Some(session.scene().object_count() - 1)
    );
}

#[test]
fn test_layer_step_commands_swap_neighbors() {
    let (mut session, a, b) = session_with_two_desks();
    let index_a = session.scene().index_of(a).unwrap();
    session.select(a);

    session.layer_element(LayerCommand::Up);
    assert_eq!(session.scene().index_of(a), Some(index_a + 1));
    assert_eq!(session.scene().index_of(b), Some(index_a));

    session.layer_element(LayerCommand::Down);
    assert_eq!(session.scene().index_of(a), Some(index_a));
}

#[test]
fn test_layer_command_commits_history() {
    let (mut session, a, _b) = session_with_two_desks();
    session.select(a);
    let before = session.history().len();

    session.layer_element(LayerCommand::Top);
    assert_eq!(session.history().len(), before + 1);
}

#[test]
fn test_layer_command_without_selection_is_noop() {
    let (mut session, a, _b) = session_with_two_desks();
    let index_a = session.scene().index_of(a).unwrap();
    let before = session.history().len();

    session.layer_element(LayerCommand::Top);
    assert_eq!(session.scene().index_of(a), Some(index_a));
    assert_eq!(session.history().len(), before);
}

#[test]
fn test_delete_selected_removes_and_commits() {
    let (mut session, a, _b) = session_with_two_desks();
    session.select(a);
    let before = session.history().len();

    session.delete_selected();

    assert!(session.scene().get(a).is_none());
    assert!(session.selection().is_none());
    assert_eq!(session.history().len(), before + 1);
}

#[test]
fn test_view_mode_locks_objects_and_drops_selection() {
    let (mut session, a, b) = session_with_two_desks();
    session.select(a);

    session.set_mode(EditorMode::View);
    assert_eq!(session.mode(), EditorMode::View);
    assert!(session.selection().is_none());

    for id in [a, b] {
        let obj = session.scene().get(id).unwrap();
        assert!(obj.lock_movement_x && obj.lock_movement_y);
        assert!(obj.lock_scaling_x && obj.lock_scaling_y);
        assert!(obj.lock_rotation);
        assert!(!obj.selectable);
    }
}

#[test]
fn test_editor_mode_unlocks_again() {
    let (mut session, a, _b) = session_with_two_desks();

    session.set_mode(EditorMode::View);
    session.set_mode(EditorMode::Editor);

    let obj = session.scene().get(a).unwrap();
    assert!(!obj.lock_movement_x);
    assert!(obj.selectable && obj.evented);
}

#[test]
fn test_view_mode_does_not_touch_painter_or_guides() {
    let (mut session, _a, _b) = session_with_two_desks();
    session.set_mode(EditorMode::View);

    let painter = session.scene().painter().unwrap();
    assert!(!painter.selectable); // was never selectable
    assert!(!painter.lock_movement_x); // and never locked either

    for guide in session.scene().objects().iter().filter(|o| o.transient) {
        assert!(!guide.lock_movement_x);
    }
}

#[test]
fn test_locked_object_does_not_snap_in_view_mode() {
    let mut session = EditorSession::new();
    let id = session.scene_mut().add_object(SceneObject::desk(23.0, 47.0, 60.0, 40.0));
    session.set_mode(EditorMode::View);

    session.handle_event(deskplan_editor::EditorEvent::ObjectMoving { id });

    let obj = session.scene().get(id).unwrap();
    assert_eq!((obj.left, obj.top), (23.0, 47.0));
}
