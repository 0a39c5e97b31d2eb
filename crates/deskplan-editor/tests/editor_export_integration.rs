//! Integration tests for JSON file export

use deskplan_editor::export::{export_active_object, export_plan, object_file_name, plan_file_name};
use deskplan_editor::{Scene, SceneObject, SceneSnapshot};

#[test]
fn test_plan_file_name_is_timestamped() {
    let name = plan_file_name();
    assert!(name.starts_with("office-"));
    assert!(name.ends_with(".json"));
    let millis: &str = &name["office-".len()..name.len() - ".json".len()];
    assert!(millis.parse::<i64>().is_ok(), "not a timestamp: {}", millis);
}

#[test]
fn test_object_file_name_prefers_object_name() {
    assert_eq!(object_file_name("Ada"), "Ada.json");

    let fallback = object_file_name("");
    assert!(fallback.starts_with("el-"));
    assert!(fallback.ends_with(".json"));
}

#[test]
fn test_exported_plan_loads_back() {
    let mut scene = Scene::new();
    scene.add_object(SceneObject::desk(40.0, 40.0, 120.0, 80.0));

    let dir = tempfile::tempdir().unwrap();
    let path = export_plan(&scene, dir.path()).unwrap();

    let loaded = SceneSnapshot::load_from_file(&path).unwrap();
    // painter + desk
    assert_eq!(loaded.objects.len(), 2);
}

#[test]
fn test_export_active_object_writes_single_element_document() {
    let mut scene = Scene::new();
    let mut desk = SceneObject::desk(40.0, 40.0, 120.0, 80.0);
    desk.name = "Grace".to_string();
    let id = scene.add_object(desk);
    scene.set_active(Some(id));

    let dir = tempfile::tempdir().unwrap();
    let path = export_active_object(&scene, dir.path())
        .unwrap()
        .expect("active object present");
    assert!(path.ends_with("Grace.json"));

    let loaded = SceneSnapshot::load_from_file(&path).unwrap();
    assert_eq!(loaded.objects.len(), 1);
    assert_eq!(loaded.objects[0].name, "Grace");
}

#[test]
fn test_export_active_object_without_selection() {
    let scene = Scene::new();
    let dir = tempfile::tempdir().unwrap();
    assert!(export_active_object(&scene, dir.path()).unwrap().is_none());
}
