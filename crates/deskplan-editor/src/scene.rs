//! Scene model: positioned, transformable objects on the floor plan.
//!
//! The scene owns an ordered object list (index order is draw
//! order, lowest first), a reserved background "painter" object
//! that is never user-deletable, and the viewport transform. It
//! stands in for the host renderer's object store at the interface
//! boundary described in the editor design.

use deskplan_core::constants::{
    DEFAULT_CANVAS_BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_STROKE_WIDTH,
    PAINTER_NAME,
};
use deskplan_core::Point;

use crate::viewport::Viewport;

/// Kinds of objects that can be placed on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Rect,
    Circle,
    Line,
    Textbox,
    Image,
}

impl ObjectKind {
    /// Wire name used in snapshots and exported JSON.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ObjectKind::Rect => "rect",
            ObjectKind::Circle => "circle",
            ObjectKind::Line => "line",
            ObjectKind::Textbox => "textbox",
            ObjectKind::Image => "image",
        }
    }

    /// Parses a wire name back into a kind.
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "rect" => Some(ObjectKind::Rect),
            "circle" => Some(ObjectKind::Circle),
            "line" => Some(ObjectKind::Line),
            "textbox" => Some(ObjectKind::Textbox),
            "image" => Some(ObjectKind::Image),
            _ => None,
        }
    }
}

/// A positioned, transformable entity owned by the scene.
///
/// `width`/`height` are the object's base dimensions; the rendered
/// size is the base size multiplied by the per-axis scale factors.
/// `angle` is in degrees, rotation about the object center.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: u64,
    pub kind: ObjectKind,
    /// Display label; for desks this is the occupant name.
    pub name: String,
    /// Domain marker, e.g. `"desk"` for workstation objects.
    pub own_type: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    pub angle: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Radius for circular objects; 0 otherwise.
    pub radius: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    /// Dash pattern; guide lines in legacy documents carry one.
    pub stroke_dash: Option<Vec<f64>>,
    pub visible: bool,
    pub selectable: bool,
    pub evented: bool,
    /// Ephemeral overlay object, excluded from snapshots and export.
    pub transient: bool,
    pub lock_movement_x: bool,
    pub lock_movement_y: bool,
    pub lock_scaling_x: bool,
    pub lock_scaling_y: bool,
    pub lock_rotation: bool,
    /// Host-computed effective width, when the base width is not
    /// authoritative (e.g. auto-sized text).
    pub cache_width: Option<f64>,
    pub cache_height: Option<f64>,
    pub fill_type: Option<String>,
    pub fill_url: Option<String>,
    pub crop_key: Option<String>,
    pub crop_path: Option<String>,
}

impl SceneObject {
    /// Creates an object of the given kind with neutral transform
    /// and style defaults. The id is assigned by [`Scene::add_object`].
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: 0,
            kind,
            name: String::new(),
            own_type: None,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            flip_x: false,
            flip_y: false,
            radius: 0.0,
            fill: None,
            stroke: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_dash: None,
            visible: true,
            selectable: true,
            evented: true,
            transient: false,
            lock_movement_x: false,
            lock_movement_y: false,
            lock_scaling_x: false,
            lock_scaling_y: false,
            lock_rotation: false,
            cache_width: None,
            cache_height: None,
            fill_type: None,
            fill_url: None,
            crop_key: None,
            crop_path: None,
        }
    }

    /// Convenience constructor for a desk rectangle.
    pub fn desk(left: f64, top: f64, width: f64, height: f64) -> Self {
        let mut obj = Self::new(ObjectKind::Rect);
        obj.own_type = Some("desk".to_string());
        obj.left = left;
        obj.top = top;
        obj.width = width;
        obj.height = height;
        obj
    }

    /// Width after scale is applied.
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after scale is applied.
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Object center in scene coordinates, ignoring rotation.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.scaled_width() / 2.0,
            self.top + self.scaled_height() / 2.0,
        )
    }

    /// Axis-aligned bounds from the scaled, unrotated dimensions.
    /// This is the drag-time approximation used by snapping, not
    /// the rotated bounding box.
    pub fn axis_aligned_bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.left,
            self.top,
            self.left + self.scaled_width(),
            self.top + self.scaled_height(),
        )
    }

    /// Whether this is the reserved background painter object.
    pub fn is_painter(&self) -> bool {
        self.name == PAINTER_NAME
    }
}

/// Floor-plan surface properties, pushed onto the painter object.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasProperties {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
}

impl Default for CanvasProperties {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_color: DEFAULT_CANVAS_BACKGROUND.to_string(),
        }
    }
}

/// Scene state: ordered objects, active-object tracking, viewport.
///
/// Index order in the object list is stacking order, lowest first.
/// The painter always occupies index 0; z-order mutations re-assert
/// this invariant.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
    active_id: Option<u64>,
    viewport: Viewport,
    properties: CanvasProperties,
}

impl Scene {
    /// Creates a scene containing only the painter.
    pub fn new() -> Self {
        Self::with_properties(CanvasProperties::default())
    }

    /// Creates a scene with the given surface properties.
    pub fn with_properties(properties: CanvasProperties) -> Self {
        let mut scene = Self {
            objects: Vec::new(),
            next_id: 1,
            active_id: None,
            viewport: Viewport::new(),
            properties,
        };
        scene.insert_painter();
        scene
    }

    fn insert_painter(&mut self) {
        let mut painter = SceneObject::new(ObjectKind::Rect);
        painter.name = PAINTER_NAME.to_string();
        painter.width = self.properties.width;
        painter.height = self.properties.height;
        painter.fill = Some(self.properties.background_color.clone());
        painter.stroke = Some("pink".to_string());
        painter.stroke_width = 2.0;
        painter.selectable = false;
        painter.evented = false;
        let id = self.generate_id();
        painter.id = id;
        self.objects.insert(0, painter);
    }

    /// Generates a new unique object id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of objects including the painter.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Objects in stacking order, lowest first.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable iteration over all objects.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    /// Gets an object by id.
    pub fn get(&self, id: u64) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Gets a mutable object by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Stacking index of an object.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// The reserved background object.
    pub fn painter(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.is_painter())
    }

    /// Mutable access to the painter.
    pub fn painter_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.is_painter())
    }

    /// Adds an object on top of the stack and returns its id.
    pub fn add_object(&mut self, mut obj: SceneObject) -> u64 {
        let id = self.generate_id();
        obj.id = id;
        self.objects.push(obj);
        id
    }

    /// Removes an object by id and returns it. The painter refuses
    /// removal.
    pub fn remove_object(&mut self, id: u64) -> Option<SceneObject> {
        let index = self.index_of(id)?;
        if self.objects[index].is_painter() {
            return None;
        }
        if self.active_id == Some(id) {
            self.active_id = None;
        }
        Some(self.objects.remove(index))
    }

    /// Removes every transient overlay object.
    pub fn remove_transient_objects(&mut self) {
        self.objects.retain(|o| !o.transient);
    }

    /// The currently active (selected) object id.
    pub fn active_id(&self) -> Option<u64> {
        self.active_id
    }

    /// The currently active object.
    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active_id.and_then(|id| self.get(id))
    }

    /// Mutable access to the active object.
    pub fn active_object_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.active_id?;
        self.get_mut(id)
    }

    /// Sets the active object. Transient and painter objects cannot
    /// become active.
    pub fn set_active(&mut self, id: Option<u64>) {
        self.active_id = match id {
            Some(id) => self
                .get(id)
                .filter(|o| !o.transient && !o.is_painter())
                .map(|o| o.id),
            None => None,
        };
    }

    /// Clears the active object.
    pub fn discard_active(&mut self) {
        self.active_id = None;
    }

    /// Moves an object one step up the stack.
    pub fn bring_forward(&mut self, id: u64) {
        if let Some(index) = self.index_of(id) {
            if index + 1 < self.objects.len() {
                self.objects.swap(index, index + 1);
            }
        }
        self.pin_painter_to_back();
    }

    /// Moves an object one step down the stack.
    pub fn send_backwards(&mut self, id: u64) {
        if let Some(index) = self.index_of(id) {
            if index > 0 {
                self.objects.swap(index, index - 1);
            }
        }
        self.pin_painter_to_back();
    }

    /// Moves an object to the top of the stack.
    pub fn bring_to_front(&mut self, id: u64) {
        if let Some(index) = self.index_of(id) {
            let obj = self.objects.remove(index);
            self.objects.push(obj);
        }
        self.pin_painter_to_back();
    }

    /// Moves an object to the bottom of the stack.
    pub fn send_to_back(&mut self, id: u64) {
        if let Some(index) = self.index_of(id) {
            let obj = self.objects.remove(index);
            self.objects.insert(0, obj);
        }
        self.pin_painter_to_back();
    }

    /// Re-asserts the painter at the lowest stacking index.
    pub fn pin_painter_to_back(&mut self) {
        if let Some(index) = self.objects.iter().position(|o| o.is_painter()) {
            if index != 0 {
                let painter = self.objects.remove(index);
                self.objects.insert(0, painter);
            }
        }
    }

    /// Surface properties (size and background).
    pub fn properties(&self) -> &CanvasProperties {
        &self.properties
    }

    /// Updates surface properties and pushes them onto the painter.
    pub fn set_properties(&mut self, properties: CanvasProperties) {
        self.properties = properties;
        let (width, height, fill) = (
            self.properties.width,
            self.properties.height,
            self.properties.background_color.clone(),
        );
        if let Some(painter) = self.painter_mut() {
            painter.width = width;
            painter.height = height;
            painter.fill = Some(fill);
        }
    }

    /// The viewport transform.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the viewport.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Replaces the object list wholesale, as a full-state reload
    /// does. Active object and transient overlays are discarded;
    /// the painter invariant is re-asserted. The id generator is
    /// advanced past every restored id.
    pub fn replace_objects(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects;
        self.active_id = None;
        self.pin_painter_to_back();
        if self.painter().is_none() {
            self.insert_painter();
        }
        let max_id = self.objects.iter().map(|o| o.id).max().unwrap_or(0);
        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
