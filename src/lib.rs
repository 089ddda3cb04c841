pub mod angle;
pub mod config;
pub mod error;
pub mod grid;
pub mod raycast;
pub mod scanner;
pub mod snapshot;
pub mod strip;
pub mod viewer;

pub use config::{Config, ViewerConfig};
pub use error::RaycasterError;
pub use grid::OccupancyGrid;
pub use raycast::{cast_ray, Face, RayHit};
pub use scanner::{ray_angles, scan, FrameScan};
#[cfg(feature = "rayon")]
pub use scanner::scan_parallel;
pub use snapshot::Snapshot;
pub use strip::{project_strips, Strip};
pub use viewer::{Pose, Viewer};
