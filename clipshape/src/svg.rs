//! Path-string emission for the closed polygon, with per-corner quadratic
//! rounding. The output is directly embeddable as the `d` attribute of a
//! vector path element (`clipPathUnits="objectBoundingBox"` semantics).
//!
//! Coordinates are printed with fixed 3-decimal precision. That precision is
//! a compatibility contract relied on by snapshot diffing, not cosmetics.

use crate::geometry::limits::MIN_VERTICES;
use crate::geometry::tolerance::CORNER_FRACTION;
use crate::model::{Shape, Vertex};

/// Build the closed `M`/`L`/`Q`/`Z` command string for `shape`.
///
/// `global_radius` is added to every vertex's own radius before the
/// per-corner cap is applied. Returns `None` when the shape has fewer than
/// three vertices; callers render nothing and keep their prior state.
pub fn clip_path_impl(shape: &Shape, global_radius: f32) -> Option<String> {
    let n = shape.vertices.len();
    if n < MIN_VERTICES {
        return None;
    }

    let first = &shape.vertices[0];
    let mut d = move_to(
        &shape.vertices[n - 1],
        first,
        first.radius + global_radius,
    );
    for i in 0..n {
        let prev = &shape.vertices[(i + n - 1) % n];
        let cur = &shape.vertices[i];
        let next = &shape.vertices[(i + 1) % n];
        let radius = cur.radius + global_radius;

        if radius > 0.0 {
            d.push(' ');
            d.push_str(&corner_segment(prev, cur, next, radius));
        } else if i > 0 {
            d.push_str(&format!(" L {:.3}, {:.3}", cur.x, cur.y));
        }
    }
    d.push_str(" Z");
    Some(d)
}

/// The path's starting point: offset from vertex 0 toward its predecessor
/// when that corner is rounded, so the opening move lands on the arc's
/// approach point. The cap here considers the incoming edge only.
fn move_to(prev: &Vertex, cur: &Vertex, radius: f32) -> String {
    if radius > 0.0 {
        let vx = prev.x - cur.x;
        let vy = prev.y - cur.y;
        let len = (vx * vx + vy * vy).sqrt();
        if len > 0.0 {
            let r = radius.min(len * CORNER_FRACTION);
            return format!(
                "M {:.3}, {:.3}",
                cur.x + vx / len * r,
                cur.y + vy / len * r
            );
        }
    }
    format!("M {:.3}, {:.3}", cur.x, cur.y)
}

/// One rounded corner: a straight run to the arc's approach point, then a
/// quadratic with the original sharp corner as control point. The radius is
/// capped at `CORNER_FRACTION` of the shorter adjacent edge so arcs on
/// neighboring corners cannot overlap. A zero-length adjacent edge degrades
/// this vertex to a sharp corner; the rest of the path is unaffected.
fn corner_segment(prev: &Vertex, cur: &Vertex, next: &Vertex, radius: f32) -> String {
    let v1x = prev.x - cur.x;
    let v1y = prev.y - cur.y;
    let v2x = next.x - cur.x;
    let v2y = next.y - cur.y;
    let len1 = (v1x * v1x + v1y * v1y).sqrt();
    let len2 = (v2x * v2x + v2y * v2y).sqrt();

    if len1 <= 0.0 || len2 <= 0.0 {
        return format!("L {:.3}, {:.3}", cur.x, cur.y);
    }

    let max_radius = len1.min(len2) * CORNER_FRACTION;
    let r = radius.min(max_radius);

    let sx = cur.x + v1x / len1 * r;
    let sy = cur.y + v1y / len1 * r;
    let ex = cur.x + v2x / len2 * r;
    let ey = cur.y + v2y / len2 * r;

    format!(
        "L {:.3}, {:.3} Q {:.3}, {:.3} {:.3}, {:.3}",
        sx, sy, cur.x, cur.y, ex, ey
    )
}
