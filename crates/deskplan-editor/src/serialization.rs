//! Serialization for snapshots and exported documents.
//!
//! The wire shape is `{ "objects": [...] }` where each object
//! carries only an explicit allow-list of attributes. The same
//! shape backs history snapshots and JSON file export, so it must
//! round-trip stably.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use deskplan_core::constants::{DEFAULT_STROKE_WIDTH, GUIDE_LINE_NAME};
use deskplan_core::EditorError;

use crate::scene::{ObjectKind, Scene, SceneObject};

fn default_scale() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_true() -> bool {
    true
}

fn is_default_scale(v: &f64) -> bool {
    *v == 1.0
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_true(v: &bool) -> bool {
    *v
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

/// Serialized form of a scene object: the allow-listed attribute
/// set that is stable across history snapshots and file export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_type: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub angle: f64,
    #[serde(default = "default_scale", skip_serializing_if = "is_default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale", skip_serializing_if = "is_default_scale")]
    pub scale_y: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub flip_x: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub flip_y: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dash_array: Option<Vec<f64>>,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub selectable: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub evented: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_movement_x: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_movement_y: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_scaling_x: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_scaling_y: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_path: Option<String>,
}

impl ObjectData {
    /// Serializes a scene object into its wire form.
    pub fn from_scene_object(obj: &SceneObject) -> Self {
        Self {
            id: obj.id,
            kind: obj.kind.as_wire().to_string(),
            name: obj.name.clone(),
            own_type: obj.own_type.clone(),
            left: obj.left,
            top: obj.top,
            width: obj.width,
            height: obj.height,
            angle: obj.angle,
            scale_x: obj.scale_x,
            scale_y: obj.scale_y,
            flip_x: obj.flip_x,
            flip_y: obj.flip_y,
            radius: obj.radius,
            fill: obj.fill.clone(),
            stroke: obj.stroke.clone(),
            stroke_width: obj.stroke_width,
            stroke_dash_array: obj.stroke_dash.clone(),
            visible: obj.visible,
            selectable: obj.selectable,
            evented: obj.evented,
            lock_movement_x: obj.lock_movement_x,
            lock_movement_y: obj.lock_movement_y,
            lock_scaling_x: obj.lock_scaling_x,
            lock_scaling_y: obj.lock_scaling_y,
            fill_type: obj.fill_type.clone(),
            fill_url: obj.fill_url.clone(),
            crop_key: obj.crop_key.clone(),
            crop_path: obj.crop_path.clone(),
        }
    }

    /// Rebuilds a scene object from its wire form.
    pub fn to_scene_object(&self) -> std::result::Result<SceneObject, EditorError> {
        let kind =
            ObjectKind::from_wire(&self.kind).ok_or_else(|| EditorError::UnknownObjectKind {
                kind: self.kind.clone(),
            })?;
        let mut obj = SceneObject::new(kind);
        obj.id = self.id;
        obj.name = self.name.clone();
        obj.own_type = self.own_type.clone();
        obj.left = self.left;
        obj.top = self.top;
        obj.width = self.width;
        obj.height = self.height;
        obj.angle = self.angle;
        obj.scale_x = self.scale_x;
        obj.scale_y = self.scale_y;
        obj.flip_x = self.flip_x;
        obj.flip_y = self.flip_y;
        obj.radius = self.radius;
        obj.fill = self.fill.clone();
        obj.stroke = self.stroke.clone();
        obj.stroke_width = self.stroke_width;
        obj.stroke_dash = self.stroke_dash_array.clone();
        obj.visible = self.visible;
        obj.selectable = self.selectable;
        obj.evented = self.evented;
        obj.lock_movement_x = self.lock_movement_x;
        obj.lock_movement_y = self.lock_movement_y;
        obj.lock_scaling_x = self.lock_scaling_x;
        obj.lock_scaling_y = self.lock_scaling_y;
        obj.fill_type = self.fill_type.clone();
        obj.fill_url = self.fill_url.clone();
        obj.crop_key = self.crop_key.clone();
        obj.crop_path = self.crop_path.clone();
        Ok(obj)
    }

    /// Whether this wire object is a guide line written by an older
    /// document that predates the `transient` flag: either the
    /// reserved marker name, or a dashed, non-interactive line.
    pub fn is_legacy_guide_line(&self) -> bool {
        self.name == GUIDE_LINE_NAME
            || (self.kind == "line"
                && self.stroke_dash_array.is_some()
                && !self.selectable
                && !self.evented)
    }
}

/// Full serialized state of all scene objects at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub objects: Vec<ObjectData>,
}

impl SceneSnapshot {
    /// An empty snapshot, the implicit predecessor of the first
    /// history entry.
    pub fn empty() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Saves the snapshot as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;
        std::fs::write(path.as_ref(), json).context("Failed to write scene file")?;
        Ok(())
    }

    /// Loads a snapshot from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read scene file")?;
        let snapshot: SceneSnapshot =
            serde_json::from_str(&content).context("Failed to parse scene file")?;
        Ok(snapshot)
    }
}

/// Serializes the scene, excluding ephemeral overlay objects.
///
/// Transient objects are dropped by the structural flag; the legacy
/// name/shape heuristic is not needed here because live objects
/// always carry the flag.
pub fn snapshot_scene(scene: &Scene) -> SceneSnapshot {
    SceneSnapshot {
        objects: scene
            .objects()
            .iter()
            .filter(|o| !o.transient)
            .map(ObjectData::from_scene_object)
            .collect(),
    }
}

/// Rebuilds the scene object list from a snapshot.
///
/// Wire objects with an unknown kind are skipped with a warning
/// rather than failing the whole reload; a stray legacy guide line
/// in old data is filtered out here.
pub fn restore_scene(scene: &mut Scene, snapshot: &SceneSnapshot) {
    let mut objects = Vec::with_capacity(snapshot.objects.len());
    for data in &snapshot.objects {
        if data.is_legacy_guide_line() {
            continue;
        }
        match data.to_scene_object() {
            Ok(obj) => objects.push(obj),
            Err(err) => warn!("Skipping object {} on restore: {}", data.id, err),
        }
    }
    scene.replace_objects(objects);
}
