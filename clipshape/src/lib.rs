pub mod model;
pub mod history;
pub mod presets;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod editing;
    pub mod picking;
    pub mod snapping;
    pub mod transform;
}
mod json;
mod svg;

use algorithms::editing::{self, ReorderDirection};
use algorithms::transform::{self, FlipAxis};
use algorithms::{picking, snapping};
use geometry::limits::MAX_RADIUS;
use history::History;
use model::{Shape, SnapConfig};
use presets::Preset;

/// One shape-editing session: the bounded undo history, the snapping
/// configuration, the additive global corner radius, and the id counter for
/// newly inserted vertices.
///
/// Every editing method reads the latest committed [`Shape`], produces the
/// next one as a fresh value, and commits it through the history. Rejected
/// operations (deleting below the minimum, an out-of-bounds scale) return
/// `false` and commit nothing. Callers hand in normalized coordinates
/// already clamped to the unit square.
pub struct Editor {
    history: History,
    snap: SnapConfig,
    global_radius: f32,
    next_id: u32,
}

impl Editor {
    /// A fresh session holding the rectangle preset.
    pub fn new() -> Editor {
        let mut ed = Editor {
            history: History::new(),
            snap: SnapConfig::default(),
            global_radius: 0.0,
            next_id: 1,
        };
        ed.load_preset(Preset::Rectangle);
        ed
    }

    /// A session over a caller-supplied shape. Refused when the shape is
    /// below the structural minimum.
    pub fn with_shape(shape: Shape) -> Option<Editor> {
        if !shape.is_valid() {
            return None;
        }
        let mut ed = Editor {
            history: History::new(),
            snap: SnapConfig::default(),
            global_radius: 0.0,
            next_id: shape.max_id() + 1,
        };
        ed.history.reset(shape);
        Some(ed)
    }

    pub fn shape(&self) -> &Shape {
        self.history
            .current()
            .expect("editor history always holds a shape")
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn commit(&mut self, next: Shape) {
        self.history.push(next);
    }

    // Snapping
    pub fn snap_config(&self) -> &SnapConfig {
        &self.snap
    }
    pub fn set_grid_enabled(&mut self, on: bool) {
        self.snap.grid_enabled = on;
    }
    pub fn set_grid_divisions(&mut self, divisions: u32) {
        self.snap.set_grid_divisions(divisions);
    }
    pub fn set_snap_to_points(&mut self, on: bool) {
        self.snap.snap_to_points = on;
    }
    pub fn set_snap_to_center(&mut self, on: bool) {
        self.snap.snap_to_center = on;
    }

    /// Resolve a raw normalized coordinate against the active snap modes.
    pub fn snap(&self, x: f32, y: f32) -> (f32, f32) {
        snapping::snap_impl(x, y, &self.snap, self.shape())
    }

    // Global radius
    pub fn global_radius(&self) -> f32 {
        self.global_radius
    }
    pub fn set_global_radius(&mut self, radius: f32) {
        if radius.is_finite() {
            self.global_radius = radius.clamp(0.0, MAX_RADIUS);
        }
    }

    // Derived outputs
    /// The closed path-command string for the current shape, or `None` when
    /// the shape is below the structural minimum.
    pub fn clip_path(&self) -> Option<String> {
        svg::clip_path_impl(self.shape(), self.global_radius)
    }

    pub fn nearest_edge(&self, x: f32, y: f32) -> usize {
        picking::nearest_edge_impl(self.shape(), x, y)
    }

    // Editing operations
    /// Snap the click, then splice a new corner vertex onto the nearest
    /// edge. Returns the new vertex's id.
    pub fn insert_smart(&mut self, x: f32, y: f32) -> u32 {
        let (x, y) = self.snap(x, y);
        let id = self.alloc_id();
        let next = editing::insert_smart_impl(self.shape(), id, x, y);
        self.commit(next);
        id
    }

    /// Snap the click, then splice a new corner vertex after `anchor` (or
    /// append when no anchor is given). Returns the new vertex's id.
    pub fn insert_after(&mut self, anchor: Option<u32>, x: f32, y: f32) -> u32 {
        let (x, y) = self.snap(x, y);
        let id = self.alloc_id();
        let next = editing::insert_after_impl(self.shape(), id, anchor, x, y);
        self.commit(next);
        id
    }

    /// Silent no-op when the vertex is unknown or the shape is already at
    /// the three-vertex minimum.
    pub fn delete_vertex(&mut self, id: u32) -> bool {
        match editing::delete_impl(self.shape(), id) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Reposition a vertex to already-snapped coordinates; they are clamped
    /// into the unit square here.
    pub fn move_vertex(&mut self, id: u32, x: f32, y: f32) -> bool {
        match editing::move_impl(self.shape(), id, x, y) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    pub fn toggle_kind(&mut self, id: u32) -> bool {
        match editing::retype_impl(self.shape(), id) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    pub fn reorder_vertex(&mut self, id: u32, dir: ReorderDirection) -> bool {
        match editing::reorder_impl(self.shape(), id, dir) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    pub fn set_vertex_radius(&mut self, id: u32, radius: f32) -> bool {
        match editing::set_radius_impl(self.shape(), id, radius) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Apply one radius to every vertex ("apply to all").
    pub fn set_all_radii(&mut self, radius: f32) {
        let next = editing::set_all_radii_impl(self.shape(), radius);
        self.commit(next);
    }

    /// Zero every per-vertex radius and the global radius.
    pub fn reset_radii(&mut self) {
        let next = editing::reset_radii_impl(self.shape());
        self.global_radius = 0.0;
        self.commit(next);
    }

    /// Uniform scale about the canvas center. Atomic: refused outright when
    /// any vertex would leave the unit square.
    pub fn scale(&mut self, factor: f32) -> bool {
        match transform::scale_impl(self.shape(), factor) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Rotate about the canvas center. Coordinates are not reclamped and may
    /// leave the unit square.
    pub fn rotate(&mut self, angle_deg: f32) -> bool {
        match transform::rotate_impl(self.shape(), angle_deg) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    pub fn flip_horizontal(&mut self) {
        let next = transform::flip_impl(self.shape(), FlipAxis::Horizontal);
        self.commit(next);
    }

    pub fn flip_vertical(&mut self) {
        let next = transform::flip_impl(self.shape(), FlipAxis::Vertical);
        self.commit(next);
    }

    // History
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // Loading. Loads begin a new editing session: history is replaced (not
    // undoable back into the prior document) and the id counter is reseeded.
    pub fn load_preset(&mut self, preset: Preset) {
        let shape = preset.shape();
        self.next_id = shape.max_id() + 1;
        self.global_radius = 0.0;
        self.history.reset(shape);
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self.shape(), self.global_radius)
    }

    pub fn load_json_value(&mut self, v: serde_json::Value) -> bool {
        self.load_json_value_strict(v).is_ok()
    }

    pub fn load_json_value_strict(
        &mut self,
        v: serde_json::Value,
    ) -> Result<(), (&'static str, String)> {
        let (shape, global_radius) = json::from_json_impl_strict(v)?;
        self.next_id = shape.max_id() + 1;
        self.global_radius = global_radius;
        self.history.reset(shape);
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Editor {
        Editor::new()
    }
}

/// Standalone entry points for collaborators that hold their own [`Shape`]
/// values rather than a session.
pub fn generate_path(shape: &Shape, global_radius: f32) -> Option<String> {
    svg::clip_path_impl(shape, global_radius)
}

pub fn nearest_edge_index(shape: &Shape, x: f32, y: f32) -> usize {
    picking::nearest_edge_impl(shape, x, y)
}

pub fn shape_to_json(shape: &Shape, global_radius: f32) -> serde_json::Value {
    json::to_json_impl(shape, global_radius)
}

pub fn shape_from_json(v: serde_json::Value) -> Option<(Shape, f32)> {
    json::from_json_impl(v)
}

pub fn shape_from_json_strict(
    v: serde_json::Value,
) -> Result<(Shape, f32), (&'static str, String)> {
    json::from_json_impl_strict(v)
}
