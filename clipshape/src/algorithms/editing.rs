//! Structural edits over the vertex sequence. Every function takes the
//! current shape by reference and returns a fresh value; rejected edits
//! return `None` and leave the caller holding the unchanged original.
//!
//! Vertex ids are assigned by the caller (the editor session owns the
//! counter), so these stay pure and replayable.

use crate::algorithms::picking;
use crate::geometry::limits::{MAX_RADIUS, MIN_VERTICES};
use crate::geometry::tolerance::clamp01;
use crate::model::{Shape, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Toward the cyclic predecessor (index - 1).
    Backward,
    /// Toward the cyclic successor (index + 1).
    Forward,
}

/// Splice a fresh corner vertex onto whichever edge is nearest to the click,
/// immediately after that edge's start vertex.
pub fn insert_smart_impl(shape: &Shape, id: u32, x: f32, y: f32) -> Shape {
    let mut vertices = shape.vertices.clone();
    let at = if vertices.is_empty() {
        0
    } else {
        picking::nearest_edge_impl(shape, x, y) + 1
    };
    vertices.insert(at.min(vertices.len()), Vertex::corner(id, x, y));
    Shape::new(vertices)
}

/// Splice a fresh corner vertex immediately after `anchor`, or append when
/// no anchor is given or the anchor no longer exists.
pub fn insert_after_impl(shape: &Shape, id: u32, anchor: Option<u32>, x: f32, y: f32) -> Shape {
    let mut vertices = shape.vertices.clone();
    let at = anchor
        .and_then(|a| shape.index_of(a))
        .map(|i| i + 1)
        .unwrap_or(vertices.len());
    vertices.insert(at, Vertex::corner(id, x, y));
    Shape::new(vertices)
}

/// Remove a vertex by id. Refused when the id is unknown or the shape would
/// drop below the structural minimum.
pub fn delete_impl(shape: &Shape, id: u32) -> Option<Shape> {
    let at = shape.index_of(id)?;
    if shape.vertices.len() <= MIN_VERTICES {
        return None;
    }
    let mut vertices = shape.vertices.clone();
    vertices.remove(at);
    Some(Shape::new(vertices))
}

/// Reposition a vertex to an already-snapped coordinate, clamped into the
/// unit square.
pub fn move_impl(shape: &Shape, id: u32, x: f32, y: f32) -> Option<Shape> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let at = shape.index_of(id)?;
    let mut vertices = shape.vertices.clone();
    vertices[at].x = clamp01(x);
    vertices[at].y = clamp01(y);
    Some(Shape::new(vertices))
}

/// Toggle a vertex between corner and smooth.
pub fn retype_impl(shape: &Shape, id: u32) -> Option<Shape> {
    let at = shape.index_of(id)?;
    let mut vertices = shape.vertices.clone();
    vertices[at].kind = vertices[at].kind.toggled();
    Some(Shape::new(vertices))
}

/// Trade a vertex's position in the winding order with its cyclic neighbor.
/// At the ends of the sequence this rotates the vertex to the far side, the
/// same splice semantics a list-reorder control produces.
pub fn reorder_impl(shape: &Shape, id: u32, dir: ReorderDirection) -> Option<Shape> {
    let at = shape.index_of(id)?;
    let n = shape.vertices.len();
    let to = match dir {
        ReorderDirection::Backward => (at + n - 1) % n,
        ReorderDirection::Forward => (at + 1) % n,
    };
    let mut vertices = shape.vertices.clone();
    let moved = vertices.remove(at);
    vertices.insert(to, moved);
    Some(Shape::new(vertices))
}

/// Set one vertex's rounding radius, clamped into `[0, MAX_RADIUS]`.
pub fn set_radius_impl(shape: &Shape, id: u32, radius: f32) -> Option<Shape> {
    if !radius.is_finite() {
        return None;
    }
    let at = shape.index_of(id)?;
    let mut vertices = shape.vertices.clone();
    vertices[at].radius = radius.clamp(0.0, MAX_RADIUS);
    Some(Shape::new(vertices))
}

/// Apply one rounding radius to every vertex.
pub fn set_all_radii_impl(shape: &Shape, radius: f32) -> Shape {
    let radius = if radius.is_finite() {
        radius.clamp(0.0, MAX_RADIUS)
    } else {
        0.0
    };
    let mut vertices = shape.vertices.clone();
    for v in &mut vertices {
        v.radius = radius;
    }
    Shape::new(vertices)
}

/// Zero every per-vertex radius. The session also resets its global radius
/// alongside this.
pub fn reset_radii_impl(shape: &Shape) -> Shape {
    set_all_radii_impl(shape, 0.0)
}
