use crate::angle;
use crate::grid::OccupancyGrid;
use crate::raycast::{cast_ray, RayHit};
use crate::viewer::Viewer;

/// Depth and face of every ray in one frame, ordered left to right
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScan {
    hits: Vec<RayHit>,
}

impl FrameScan {
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RayHit> {
        self.hits.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RayHit> {
        self.hits.iter()
    }

    /// The ray cast straight along the heading
    pub fn center(&self) -> Option<&RayHit> {
        self.hits.get(self.hits.len() / 2)
    }

    pub fn into_hits(self) -> Vec<RayHit> {
        self.hits
    }
}

impl<'a> IntoIterator for &'a FrameScan {
    type Item = &'a RayHit;
    type IntoIter = std::slice::Iter<'a, RayHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// Absolute angle of every ray in the field of view, left to right.
///
/// Ray indices run from `-(ray_count / 2)` upward, so for an even count the
/// heading itself is the ray just right of the middle.
pub fn ray_angles(viewer: &Viewer) -> Vec<f32> {
    let count = viewer.ray_count();
    let angle_step = viewer.fov_radians() / count as f32;
    let first = -((count / 2) as i64);

    (0..count as i64)
        .map(|k| angle::normalize(viewer.heading + (first + k) as f32 * angle_step))
        .collect()
}

/// Cast every ray of the viewer's field of view
pub fn scan(grid: &OccupancyGrid, viewer: &Viewer) -> FrameScan {
    let hits = ray_angles(viewer)
        .into_iter()
        .map(|angle| cast_ray(grid, viewer, angle))
        .collect();
    FrameScan { hits }
}

/// Same as `scan`, with rays spread over the rayon thread pool; output order is unchanged
#[cfg(feature = "rayon")]
pub fn scan_parallel(grid: &OccupancyGrid, viewer: &Viewer) -> FrameScan {
    use rayon::prelude::*;

    let hits = ray_angles(viewer)
        .into_par_iter()
        .map(|angle| cast_ray(grid, viewer, angle))
        .collect();
    FrameScan { hits }
}
