use crate::geometry::limits;
use crate::model::{Shape, Vertex, VertexKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct VertexSer {
    id: u32,
    x: f32,
    y: f32,
    kind: VertexKind,
    radius: f32,
}

#[derive(Serialize)]
struct DocSer {
    version: u32,
    vertices: Vec<VertexSer>,
    global_radius: f32,
}

pub fn to_json_impl(shape: &Shape, global_radius: f32) -> Value {
    let vertices = shape
        .vertices
        .iter()
        .map(|v| VertexSer {
            id: v.id,
            x: v.x,
            y: v.y,
            kind: v.kind,
            radius: v.radius,
        })
        .collect();
    serde_json::to_value(DocSer {
        version: 1,
        vertices,
        global_radius,
    })
    .unwrap_or(Value::Null)
}

#[derive(Deserialize)]
struct VertexDe {
    id: u32,
    x: f32,
    y: f32,
    kind: Option<VertexKind>,
    radius: Option<f32>,
}

#[derive(Deserialize)]
struct DocDe {
    #[allow(dead_code)]
    version: Option<u32>,
    vertices: Vec<VertexDe>,
    global_radius: Option<f32>,
}

/// Lenient variant: `None` on any structural problem. Collaborators that
/// only need a yes/no (clipboard paste, share-link restore) use this.
pub fn from_json_impl(v: Value) -> Option<(Shape, f32)> {
    from_json_impl_strict(v).ok()
}

/// Strict variant: rejects rather than coerces, with a stable error code and
/// a human-readable detail string.
pub fn from_json_impl_strict(v: Value) -> Result<(Shape, f32), (&'static str, String)> {
    let doc: DocDe = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;
    if doc.vertices.len() > limits::MAX_VERTICES {
        return Err(("caps_exceeded", format!("vertices>{}", limits::MAX_VERTICES)));
    }
    if doc.vertices.len() < limits::MIN_VERTICES {
        return Err((
            "invalid_structure",
            format!("shape needs at least {} vertices", limits::MIN_VERTICES),
        ));
    }
    let mut vertices = Vec::with_capacity(doc.vertices.len());
    for v in &doc.vertices {
        if !limits::in_unit_bounds(v.x) || !limits::in_unit_bounds(v.y) {
            return Err(("out_of_bounds", format!("vertex {} coordinate", v.id)));
        }
        let radius = v.radius.unwrap_or(0.0);
        if !limits::in_radius_bounds(radius) {
            return Err(("out_of_bounds", format!("vertex {} radius", v.id)));
        }
        if vertices.iter().any(|u: &Vertex| u.id == v.id) {
            return Err(("invalid_structure", format!("duplicate vertex id {}", v.id)));
        }
        vertices.push(Vertex {
            id: v.id,
            x: v.x,
            y: v.y,
            kind: v.kind.unwrap_or(VertexKind::Corner),
            radius,
        });
    }
    let global_radius = doc.global_radius.unwrap_or(0.0);
    if !limits::in_radius_bounds(global_radius) {
        return Err(("out_of_bounds", "global_radius".into()));
    }
    Ok((Shape::new(vertices), global_radius))
}
