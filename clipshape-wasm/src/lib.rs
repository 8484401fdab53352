use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct ShapeEditor { pub(crate) inner: clipshape::Editor }

impl ShapeEditor {
    pub fn rs_new() -> ShapeEditor { ShapeEditor { inner: clipshape::Editor::new() } }
}
