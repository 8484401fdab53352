// Centralized ingestion limits to harden against untrusted input (JSON)

// Scene size caps
pub const MIN_VERTICES: usize = 3;
pub const MAX_VERTICES: usize = 10_000;

// Snap grid divisions
pub const MIN_GRID: u32 = 4;
pub const MAX_GRID: u32 = 50;

// Corner rounding
pub const MAX_RADIUS: f32 = 0.3;

#[inline]
pub fn in_unit_bounds(v: f32) -> bool { v.is_finite() && v >= 0.0 && v <= 1.0 }

#[inline]
pub fn in_radius_bounds(r: f32) -> bool { r.is_finite() && r >= 0.0 && r <= MAX_RADIUS }

#[inline]
pub fn in_grid_bounds(g: u32) -> bool { g >= MIN_GRID && g <= MAX_GRID }
