use crate::angle::{self, THREE_FRAC_PI_2};
use crate::grid::OccupancyGrid;
use crate::viewer::Viewer;
use log::warn;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Relative gap below which the two scans count as landing on the same point
const TIE_TOLERANCE: f32 = 1e-5;

/// Which family of grid lines the winning intersection sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    /// Hit found by stepping across horizontal grid lines (constant y)
    Horizontal,
    /// Hit found by stepping across vertical grid lines (constant x)
    Vertical,
}

/// Result of casting a single ray
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Perpendicular (fisheye-corrected) distance, clipped at the viewer's max cast distance
    pub distance: f32,
    /// Straight-line distance from the viewer to the hit point
    pub raw_distance: f32,
    pub face: Face,
    /// World position of the wall intersection; None when nothing was hit
    pub point: Option<(f32, f32)>,
}

impl RayHit {
    /// No wall within range
    pub fn miss(max_distance: f32) -> Self {
        RayHit {
            distance: max_distance,
            raw_distance: max_distance,
            face: Face::Horizontal,
            point: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.point.is_some()
    }
}

/// Cast one ray at an absolute angle and report the nearest wall.
///
/// Two independent scans run along the ray: one crossing horizontal grid
/// lines, one crossing vertical grid lines. The nearer hit wins, ties going
/// to the horizontal scan. A ray more than 90° off the viewer's heading is
/// reported at distance zero rather than a negative distance.
pub fn cast_ray(grid: &OccupancyGrid, viewer: &Viewer, absolute_angle: f32) -> RayHit {
    let angle = angle::normalize(absolute_angle);
    let origin = (viewer.x, viewer.y);
    let max_distance = viewer.max_cast_distance();

    let horizontal = scan_grid_lines(grid, origin, angle, max_distance, Face::Horizontal);
    let vertical = scan_grid_lines(grid, origin, angle, max_distance, Face::Vertical);

    let (point, raw_distance, face) = match (horizontal, vertical) {
        (None, None) => return RayHit::miss(max_distance),
        (Some((p, d)), None) => (p, d, Face::Horizontal),
        (None, Some((p, d))) => (p, d, Face::Vertical),
        (Some((ph, dh)), Some((pv, dv))) => {
            if dv < dh * (1.0 - TIE_TOLERANCE) {
                (pv, dv, Face::Vertical)
            } else {
                (ph, dh, Face::Horizontal)
            }
        }
    };

    let relative = angle::normalize(angle - viewer.heading);
    let mut cosine = relative.cos();
    if cosine < 0.0 {
        warn!(
            "ray at {:.4} is more than 90° off heading {:.4}, clamping distance to 0",
            angle, viewer.heading
        );
        cosine = 0.0;
    }

    RayHit {
        distance: (cosine * raw_distance).min(max_distance),
        raw_distance,
        face,
        point: Some(point),
    }
}

/// Step across one family of grid lines until a probe lands in a wall.
///
/// Works in (along, across) coordinates: `along` is the axis crossed one cell
/// at a time, `across` follows the ray's slope. Returns the hit point and its
/// distance from `origin`, or None if the scan is parallel to the lines or
/// runs out of range.
fn scan_grid_lines(
    grid: &OccupancyGrid,
    origin: (f32, f32),
    angle: f32,
    max_distance: f32,
    face: Face,
) -> Option<((f32, f32), f32)> {
    let cell = grid.cell_size();

    let (along, across, forward, slope) = match face {
        Face::Horizontal => {
            if angle::is_along_x(angle) {
                return None;
            }
            (origin.1, origin.0, angle < PI, -(angle - FRAC_PI_2).tan())
        }
        Face::Vertical => {
            if angle::is_along_y(angle) {
                return None;
            }
            let forward = !(FRAC_PI_2..THREE_FRAC_PI_2).contains(&angle);
            (origin.0, origin.1, forward, angle.tan())
        }
    };
    let to_world = |a: f32, c: f32| match face {
        Face::Horizontal => (c, a),
        Face::Vertical => (a, c),
    };

    // First grid line ahead of the viewer
    let mut line = if forward {
        (along / cell).ceil() * cell
    } else {
        (along / cell).floor() * cell
    };
    let mut offset = across + slope * (line - along);

    let step_along = if forward { cell } else { -cell };
    let step_across = slope * step_along;
    let step_length = step_along.hypot(step_across);
    // Probe the middle of the cell just beyond the line
    let probe = step_along / 2.0;

    // Budget only; the reported distance is measured straight from the origin
    let mut travelled = (line - along).hypot(offset - across);
    while travelled < max_distance {
        let (px, py) = to_world(line + probe, offset);
        if grid.is_occupied(px, py) {
            let point = to_world(line, offset);
            let distance = (point.0 - origin.0).hypot(point.1 - origin.1);
            return Some((point, distance));
        }
        line += step_along;
        offset += step_across;
        travelled += step_length;
    }

    None
}
