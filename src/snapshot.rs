use crate::error::RaycasterError;
use crate::raycast::RayHit;
use crate::scanner::FrameScan;
use crate::viewer::{Pose, Viewer};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One frame captured to disk: where the viewer stood and what every ray saw
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pose: Pose,
    pub fov_degrees: f32,
    pub ray_count: usize,
    pub max_cast_distance: f32,
    pub hits: Vec<RayHit>,
}

impl Snapshot {
    /// Capture the current viewer and its latest frame
    pub fn capture(viewer: &Viewer, frame: &FrameScan) -> Self {
        Snapshot {
            pose: viewer.pose(),
            fov_degrees: viewer.fov_degrees(),
            ray_count: viewer.ray_count(),
            max_cast_distance: viewer.max_cast_distance(),
            hits: frame.hits().to_vec(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, RaycasterError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RaycasterError> {
        let path = path.as_ref();
        fs::write(path, self.to_json(true)?)?;
        info!("Saved snapshot of {} rays to {}", self.hits.len(), path.display());
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RaycasterError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
