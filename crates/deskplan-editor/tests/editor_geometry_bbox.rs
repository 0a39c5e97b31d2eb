//! Integration tests for bounding-box computation

use deskplan_editor::{bounding_box_of, export_frame, Scene, SceneObject};

#[test]
fn test_unrotated_box_matches_object_extent() {
    let desk = SceneObject::desk(0.0, 0.0, 100.0, 50.0);
    let bbox = bounding_box_of(&[&desk]).expect("non-empty");

    assert_eq!(bbox.center_x, 50.0);
    assert_eq!(bbox.center_y, 25.0);
    assert_eq!(bbox.width, 100.0);
    assert_eq!(bbox.height, 50.0);
}

#[test]
fn test_quarter_turn_swaps_extents() {
    let mut desk = SceneObject::desk(0.0, 0.0, 100.0, 50.0);
    desk.angle = 90.0;
    let bbox = bounding_box_of(&[&desk]).expect("non-empty");

    // Rotation is about the unrotated center, which stays put
    assert_eq!(bbox.center_x, 50.0);
    assert_eq!(bbox.center_y, 25.0);
    assert!((bbox.width - 50.0).abs() < 1e-9);
    assert!((bbox.height - 100.0).abs() < 1e-9);
}

#[test]
fn test_rotated_box_is_exact_for_rectangles() {
    let mut desk = SceneObject::desk(0.0, 0.0, 100.0, 50.0);
    desk.angle = 30.0;
    let bbox = bounding_box_of(&[&desk]).expect("non-empty");

    let rad = 30.0f64.to_radians();
    let expected_w = 100.0 * rad.cos() + 50.0 * rad.sin();
    let expected_h = 100.0 * rad.sin() + 50.0 * rad.cos();
    assert!((bbox.width - expected_w).abs() < 1e-9);
    assert!((bbox.height - expected_h).abs() < 1e-9);
}

#[test]
fn test_empty_input_yields_none() {
    assert!(bounding_box_of(&[]).is_none());
}

#[test]
fn test_single_object_equals_general_path() {
    let desk = SceneObject::desk(40.0, 10.0, 80.0, 30.0);
    let single = bounding_box_of(&[&desk]).unwrap();
    let general = bounding_box_of(&[&desk, &desk]).unwrap();
    assert_eq!(single, general);
}

#[test]
fn test_multiple_objects_accumulate_corners() {
    let a = SceneObject::desk(0.0, 0.0, 20.0, 20.0);
    let b = SceneObject::desk(80.0, 60.0, 20.0, 20.0);
    let bbox = bounding_box_of(&[&a, &b]).unwrap();

    assert_eq!(bbox.center_x, 50.0);
    assert_eq!(bbox.center_y, 40.0);
    assert_eq!(bbox.width, 100.0);
    assert_eq!(bbox.height, 80.0);
}

#[test]
fn test_scale_factors_grow_the_box() {
    let mut desk = SceneObject::desk(0.0, 0.0, 50.0, 50.0);
    desk.scale_x = 2.0;
    let bbox = bounding_box_of(&[&desk]).unwrap();
    assert_eq!(bbox.width, 100.0);
    assert_eq!(bbox.height, 50.0);
}

#[test]
fn test_export_frame_prefers_painter_surface() {
    let mut scene = Scene::new();
    // An object outside the 600x400 surface does not widen the frame
    scene.add_object(SceneObject::desk(2000.0, 2000.0, 60.0, 40.0));

    let frame = export_frame(&scene);
    assert_eq!(frame.left, 0.0);
    assert_eq!(frame.top, 0.0);
    assert_eq!(frame.width, 600.0);
    assert_eq!(frame.height, 400.0);
    assert_eq!((frame.center.x, frame.center.y), (300.0, 200.0));
}
