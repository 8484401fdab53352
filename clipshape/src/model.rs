use serde::{Deserialize, Serialize};

use crate::geometry::limits;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Corner,
    Smooth,
}

impl VertexKind {
    pub fn toggled(self) -> VertexKind {
        match self {
            VertexKind::Corner => VertexKind::Smooth,
            VertexKind::Smooth => VertexKind::Corner,
        }
    }
}

/// One polygon control point. Coordinates are normalized to the unit square;
/// `radius` is the per-vertex rounding amount, `kind` a stable annotation
/// that does not affect the emitted path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: VertexKind,
    pub radius: f32,
}

impl Vertex {
    pub fn corner(id: u32, x: f32, y: f32) -> Vertex {
        Vertex {
            id,
            x,
            y,
            kind: VertexKind::Corner,
            radius: 0.0,
        }
    }
}

/// The ordered, cyclic vertex sequence defining the polygon. Insertion order
/// is winding order; the vertex after the last connects back to the first.
/// A shape participating in editing always has at least `MIN_VERTICES`
/// entries; edits produce fresh `Shape` values rather than mutating a
/// published one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<Vertex>,
}

impl Shape {
    pub fn new(vertices: Vec<Vertex>) -> Shape {
        Shape { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the shape satisfies the structural minimum for path
    /// generation and deletion.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= limits::MIN_VERTICES
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn max_id(&self) -> u32 {
        self.vertices.iter().map(|v| v.id).max().unwrap_or(0)
    }
}

/// Session-scoped snapping configuration, passed by reference into the
/// snapping engine. Never ambient state; not versioned in history.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SnapConfig {
    pub grid_enabled: bool,
    pub grid_divisions: u32,
    pub snap_to_points: bool,
    pub snap_to_center: bool,
}

impl Default for SnapConfig {
    fn default() -> SnapConfig {
        SnapConfig {
            grid_enabled: true,
            grid_divisions: 20,
            snap_to_points: false,
            snap_to_center: false,
        }
    }
}

impl SnapConfig {
    /// Clamps into the supported `[MIN_GRID, MAX_GRID]` range rather than
    /// rejecting, so UI steppers can over-shoot freely.
    pub fn set_grid_divisions(&mut self, divisions: u32) {
        self.grid_divisions = divisions.clamp(limits::MIN_GRID, limits::MAX_GRID);
    }
}
