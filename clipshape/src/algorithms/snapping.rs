//! Coordinate snapping: grid, existing-point and center-line constraints
//! applied to an already-clamped normalized coordinate.
//!
//! Modes run in a fixed order (grid, then points, then center) and each
//! stage reads the value produced by the previous one, so later modes win
//! per axis when several are active.

use crate::geometry::tolerance::{clamp01, SNAP_DIST};
use crate::model::{Shape, SnapConfig};

pub fn snap_impl(x: f32, y: f32, cfg: &SnapConfig, shape: &Shape) -> (f32, f32) {
    let mut x = x;
    let mut y = y;

    if cfg.grid_enabled {
        let step = 1.0 / cfg.grid_divisions as f32;
        x = (x / step).round() * step;
        y = (y / step).round() * step;
    }

    if cfg.snap_to_points {
        for v in &shape.vertices {
            if (v.x - x).abs() < SNAP_DIST {
                x = v.x;
            }
            if (v.y - y).abs() < SNAP_DIST {
                y = v.y;
            }
        }
    }

    if cfg.snap_to_center {
        if (0.5 - x).abs() < SNAP_DIST {
            x = 0.5;
        }
        if (0.5 - y).abs() < SNAP_DIST {
            y = 0.5;
        }
    }

    (clamp01(x), clamp01(y))
}
