use crate::error;
use crate::ShapeEditor;
use clipshape::algorithms::editing::ReorderDirection;
use clipshape::model::VertexKind;
use clipshape::presets::Preset;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl ShapeEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapeEditor {
        crate::ShapeEditor::rs_new()
    }

    // Derived outputs
    /// The closed path string, directly embeddable as a `d` attribute.
    /// Empty when the shape is below the structural minimum.
    pub fn clip_path(&self) -> String {
        self.inner.clip_path().unwrap_or_default()
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.shape().len() as u32
    }

    pub fn nearest_edge(&self, x: f32, y: f32) -> u32 {
        self.inner.nearest_edge(x, y) as u32
    }

    // Typed array getters
    pub fn get_vertex_data(&self) -> JsValue {
        let shape = self.inner.shape();
        let ids: Vec<u32> = shape.vertices.iter().map(|v| v.id).collect();
        let mut pos = Vec::with_capacity(shape.len() * 2);
        let mut radii = Vec::with_capacity(shape.len());
        let mut kinds = Vec::with_capacity(shape.len());
        for v in &shape.vertices {
            pos.push(v.x);
            pos.push(v.y);
            radii.push(v.radius);
            kinds.push(match v.kind {
                VertexKind::Corner => 0u32,
                VertexKind::Smooth => 1u32,
            });
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&pos).into());
        crate::interop::set_kv(&obj, "radii", &crate::interop::arr_f32(&radii).into());
        crate::interop::set_kv(&obj, "kinds", &crate::interop::arr_u32(&kinds).into());
        obj.into()
    }

    // Snapping
    pub fn snap(&self, x: f32, y: f32) -> JsValue {
        let (sx, sy) = self.inner.snap(x, y);
        serde_wasm_bindgen::to_value(&vec![sx, sy]).unwrap_or(JsValue::NULL)
    }

    pub fn set_grid_enabled(&mut self, on: bool) {
        self.inner.set_grid_enabled(on);
    }
    pub fn set_grid_divisions(&mut self, divisions: u32) {
        self.inner.set_grid_divisions(divisions);
    }
    pub fn grid_divisions(&self) -> u32 {
        self.inner.snap_config().grid_divisions
    }
    pub fn set_snap_to_points(&mut self, on: bool) {
        self.inner.set_snap_to_points(on);
    }
    pub fn set_snap_to_center(&mut self, on: bool) {
        self.inner.set_snap_to_center(on);
    }

    // Global radius
    pub fn global_radius(&self) -> f32 {
        self.inner.global_radius()
    }
    pub fn set_global_radius(&mut self, radius: f32) {
        self.inner.set_global_radius(radius);
    }

    // Editing
    pub fn insert_smart(&mut self, x: f32, y: f32) -> u32 {
        self.inner.insert_smart(x, y)
    }
    pub fn insert_smart_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if !(0.0..=1.0).contains(&x) {
            return error::out_of_range("x", 0.0, 1.0, x);
        }
        if !(0.0..=1.0).contains(&y) {
            return error::out_of_range("y", 0.0, 1.0, y);
        }
        error::ok(JsValue::from_f64(self.inner.insert_smart(x, y) as f64))
    }

    pub fn insert_after(&mut self, anchor: Option<u32>, x: f32, y: f32) -> u32 {
        self.inner.insert_after(anchor, x, y)
    }

    pub fn delete_vertex(&mut self, id: u32) -> bool {
        self.inner.delete_vertex(id)
    }
    pub fn delete_vertex_res(&mut self, id: u32) -> JsValue {
        if self.inner.shape().vertex(id).is_none() {
            return error::invalid_id("vertex", id);
        }
        if !self.inner.delete_vertex(id) {
            return error::structural("shape is at the three-vertex minimum");
        }
        error::ok(JsValue::TRUE)
    }

    pub fn move_vertex(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.inner.move_vertex(id, x, y)
    }
    pub fn move_vertex_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if self.inner.shape().vertex(id).is_none() {
            return error::invalid_id("vertex", id);
        }
        error::ok(JsValue::from_bool(self.inner.move_vertex(id, x, y)))
    }

    pub fn toggle_kind(&mut self, id: u32) -> bool {
        self.inner.toggle_kind(id)
    }

    pub fn reorder_vertex(&mut self, id: u32, forward: bool) -> bool {
        let dir = if forward {
            ReorderDirection::Forward
        } else {
            ReorderDirection::Backward
        };
        self.inner.reorder_vertex(id, dir)
    }

    pub fn set_vertex_radius(&mut self, id: u32, radius: f32) -> bool {
        self.inner.set_vertex_radius(id, radius)
    }
    pub fn set_vertex_radius_res(&mut self, id: u32, radius: f32) -> JsValue {
        if !radius.is_finite() {
            return error::non_finite("radius");
        }
        if !(0.0..=0.3).contains(&radius) {
            return error::out_of_range("radius", 0.0, 0.3, radius);
        }
        if self.inner.shape().vertex(id).is_none() {
            return error::invalid_id("vertex", id);
        }
        error::ok(JsValue::from_bool(self.inner.set_vertex_radius(id, radius)))
    }

    pub fn set_all_radii(&mut self, radius: f32) {
        self.inner.set_all_radii(radius);
    }
    pub fn reset_radii(&mut self) {
        self.inner.reset_radii();
    }

    // Transforms
    pub fn scale(&mut self, factor: f32) -> bool {
        self.inner.scale(factor)
    }
    pub fn scale_res(&mut self, factor: f32) -> JsValue {
        if !factor.is_finite() {
            return error::non_finite("factor");
        }
        if self.inner.scale(factor) {
            error::ok(JsValue::TRUE)
        } else {
            error::err(
                "bounds_violation",
                "scaled shape would leave the unit square",
                None,
            )
        }
    }

    pub fn rotate(&mut self, angle_deg: f32) -> bool {
        self.inner.rotate(angle_deg)
    }
    pub fn flip_horizontal(&mut self) {
        self.inner.flip_horizontal();
    }
    pub fn flip_vertical(&mut self) {
        self.inner.flip_vertical();
    }

    // History
    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }
    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    // Presets
    pub fn preset_names(&self) -> JsValue {
        let names: Vec<&'static str> = Preset::ALL.iter().map(|p| p.name()).collect();
        serde_wasm_bindgen::to_value(&names).unwrap_or(JsValue::NULL)
    }

    pub fn load_preset(&mut self, name: &str) -> bool {
        match Preset::by_name(name) {
            Some(p) => {
                self.inner.load_preset(p);
                true
            }
            None => false,
        }
    }
    pub fn load_preset_res(&mut self, name: &str) -> JsValue {
        match Preset::by_name(name) {
            Some(p) => {
                self.inner.load_preset(p);
                error::ok(JsValue::TRUE)
            }
            None => error::unknown_preset(name),
        }
    }

    // Document I/O
    pub fn to_json(&self) -> String {
        self.inner.to_json_value().to_string()
    }

    pub fn from_json(&mut self, text: &str) -> bool {
        match serde_json::from_str(text) {
            Ok(v) => self.inner.load_json_value(v),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, text: &str) -> JsValue {
        let v: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        match self.inner.load_json_value_strict(v) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err((code, message)) => error::err(code, message, None),
        }
    }
}
