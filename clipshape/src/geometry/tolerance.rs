// Centralized tolerances and helpers for robust geometry

pub const SNAP_DIST: f32 = 0.02;          // point/center snap threshold (unit-square units)
pub const CORNER_FRACTION: f32 = 0.4;     // share of an adjacent edge a rounding arc may consume
pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold (unit-square units)

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
