//! Integration tests for session event flow, history, and undo

use deskplan_editor::{EditorEvent, EditorSession, SceneObject};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_modification_commit_and_undo_round_trip() {
    init_tracing();
    let mut session = EditorSession::new();
    let id = session.scene_mut().add_object(SceneObject::desk(100.0, 100.0, 60.0, 40.0));
    session.handle_event(EditorEvent::ModificationCommitted);

    session.scene_mut().get_mut(id).unwrap().left = 260.0;
    session.handle_event(EditorEvent::ModificationCommitted);
    assert_eq!(session.scene().get(id).unwrap().left, 260.0);

    assert!(session.undo());
    assert_eq!(session.scene().get(id).unwrap().left, 100.0);
}

#[test]
fn test_undo_recreates_guide_lines() {
    let mut session = EditorSession::new();
    session.scene_mut().add_object(SceneObject::desk(100.0, 100.0, 60.0, 40.0));
    session.handle_event(EditorEvent::ModificationCommitted);

    assert!(session.undo());

    // A full-state restore drops transient overlays; the session
    // must put exactly two guide lines back
    let transient = session
        .scene()
        .objects()
        .iter()
        .filter(|o| o.transient)
        .count();
    assert_eq!(transient, 2);
}

#[test]
fn test_undo_past_initial_state_is_refused() {
    let mut session = EditorSession::new();
    // Only the initial commit exists
    assert!(!session.can_undo());
    assert!(!session.undo());
}

#[test]
fn test_undo_clears_selection() {
    let mut session = EditorSession::new();
    let id = session.scene_mut().add_object(SceneObject::desk(0.0, 0.0, 60.0, 40.0));
    session.handle_event(EditorEvent::ModificationCommitted);
    session.select(id);
    assert!(session.selection().is_some());

    session.undo();
    assert!(session.selection().is_none());
    assert_eq!(session.scene().active_id(), None);
}

#[test]
fn test_undo_preserves_painter() {
    let mut session = EditorSession::new();
    session.scene_mut().add_object(SceneObject::desk(0.0, 0.0, 60.0, 40.0));
    session.handle_event(EditorEvent::ModificationCommitted);

    session.undo();
    assert!(session.scene().painter().is_some());
    assert!(session.scene().objects()[0].is_painter());
}

#[test]
fn test_moving_event_snaps_and_requests_render() {
    let mut session = EditorSession::new();
    let id = session.scene_mut().add_object(SceneObject::desk(23.0, 47.0, 60.0, 40.0));
    session.take_render_request();

    session.handle_event(EditorEvent::ObjectMoving { id });

    assert_eq!(session.scene().get(id).unwrap().left, 20.0);
    assert!(session.take_render_request());
    assert!(!session.take_render_request()); // consumed
}

#[test]
fn test_modification_commit_hides_guides() {
    let mut session = EditorSession::new();
    let id = session.scene_mut().add_object(SceneObject::desk(23.0, 47.0, 60.0, 40.0));

    session.handle_event(EditorEvent::ObjectMoving { id });
    assert!(session.snap().vertical_guide().visible);

    session.handle_event(EditorEvent::ModificationCommitted);
    assert!(!session.snap().vertical_guide().visible);
    assert!(!session.snap().horizontal_guide().visible);
}

#[test]
fn test_selection_events_refresh_the_record() {
    let mut session = EditorSession::new();
    let mut desk = SceneObject::desk(10.0, 20.0, 60.0, 40.0);
    desk.name = "Ada".to_string();
    let id = session.scene_mut().add_object(desk);

    session.select(id);
    let record = session.selection().expect("record after select");
    assert_eq!(record.name, "Ada");
    assert_eq!(record.left, 10.0);

    session.clear_selection();
    assert!(session.selection().is_none());
}

#[test]
fn test_guide_lines_are_not_part_of_history() {
    let mut session = EditorSession::new();
    session.handle_event(EditorEvent::ModificationCommitted);

    // Snapshot holds the painter only; the two guides are transient
    let entry = session.history().current().expect("entry");
    assert_eq!(entry.state.objects.len(), 1);
    assert_eq!(entry.state.objects[0].name, "painter");
}
