//! JSON file export of the whole plan or a single object.
//!
//! Exports share the snapshot wire shape, so an exported file can
//! be loaded back as a full state restore.

use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::scene::Scene;
use crate::serialization::{snapshot_scene, ObjectData, SceneSnapshot};

/// Timestamped file name for a full plan export.
pub fn plan_file_name() -> String {
    format!("office-{}.json", Utc::now().timestamp_millis())
}

/// File name for a single-object export: the object's name when it
/// has one, otherwise a timestamped fallback.
pub fn object_file_name(name: &str) -> String {
    if name.is_empty() {
        format!("el-{}.json", Utc::now().timestamp_millis())
    } else {
        format!("{name}.json")
    }
}

/// Writes the full plan (transient overlays excluded) as JSON into
/// `dir` and returns the written path.
pub fn export_plan(scene: &Scene, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(plan_file_name());
    let snapshot = snapshot_scene(scene);
    snapshot.save_to_file(&path)?;
    info!(path = %path.display(), objects = snapshot.objects.len(), "Exported plan");
    Ok(path)
}

/// Writes the active object as a single-element document into
/// `dir`. Returns `None` when nothing is selected.
pub fn export_active_object(scene: &Scene, dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let Some(obj) = scene.active_object() else {
        return Ok(None);
    };
    let path = dir.as_ref().join(object_file_name(&obj.name));
    let snapshot = SceneSnapshot {
        objects: vec![ObjectData::from_scene_object(obj)],
    };
    snapshot.save_to_file(&path)?;
    info!(path = %path.display(), "Exported object");
    Ok(Some(path))
}
