use crate::angle;
use crate::config::ViewerConfig;
use crate::error::RaycasterError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// First-person viewer: continuous pose plus the optics used for every frame
#[derive(Clone, Debug)]
pub struct Viewer {
    /// World position
    pub x: f32,
    pub y: f32,

    /// Facing direction in radians, kept in [0, 2π)
    pub heading: f32,

    // Optics and motion are fixed once validated by `new`
    fov_degrees: f32,
    ray_count: usize,
    max_cast_distance: f32,
    turn_rate: f32,
    move_speed: f32,
}

/// Position and heading only, as stored in snapshots
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Viewer {
    /// Create a viewer, validating the optics and motion parameters
    pub fn new(config: &ViewerConfig) -> Result<Self, RaycasterError> {
        if !(config.x.is_finite() && config.y.is_finite() && config.heading.is_finite()) {
            return invalid(format!(
                "viewer pose must be finite, got ({}, {}, {})",
                config.x, config.y, config.heading
            ));
        }
        if config.ray_count == 0 {
            return invalid("ray count must be positive".to_string());
        }
        if !(config.max_cast_distance.is_finite() && config.max_cast_distance > 0.0) {
            return invalid(format!(
                "max cast distance must be positive, got {}",
                config.max_cast_distance
            ));
        }
        // Wider than 180° would put rays behind the viewer and flip the fisheye cosine
        if !(config.fov_degrees > 0.0 && config.fov_degrees <= 180.0) {
            return invalid(format!(
                "field of view must be in (0, 180] degrees, got {}",
                config.fov_degrees
            ));
        }
        if !(config.turn_rate >= 0.0 && config.turn_rate < TAU) {
            return invalid(format!(
                "turn rate must be in [0, 2π), got {}",
                config.turn_rate
            ));
        }
        if !config.move_speed.is_finite() {
            return invalid(format!("move speed must be finite, got {}", config.move_speed));
        }

        let viewer = Viewer {
            x: config.x,
            y: config.y,
            heading: angle::normalize(config.heading),
            fov_degrees: config.fov_degrees,
            ray_count: config.ray_count,
            max_cast_distance: config.max_cast_distance,
            turn_rate: config.turn_rate,
            move_speed: config.move_speed,
        };
        debug!(
            "Viewer at ({}, {}) heading {:.3}, {} rays over {}°",
            viewer.x, viewer.y, viewer.heading, viewer.ray_count, viewer.fov_degrees
        );
        Ok(viewer)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            x: self.x,
            y: self.y,
            heading: self.heading,
        }
    }

    /// Horizontal field of view in degrees, within (0, 180]
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Field of view in radians
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Number of rays cast per frame
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Rays give up after travelling this far
    pub fn max_cast_distance(&self) -> f32 {
        self.max_cast_distance
    }

    /// Radians turned per rotate call
    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    /// World units travelled per advance/strafe call
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Step along the heading; `direction` +1 walks forward, -1 backward
    pub fn advance(&mut self, direction: i32) {
        self.translate(self.heading, direction);
    }

    /// Step sideways; +1 moves to the right of the heading (screen y points down)
    pub fn strafe(&mut self, direction: i32) {
        self.translate(self.heading + FRAC_PI_2, direction);
    }

    /// Turn by one `turn_rate`; the heading is wrapped back into [0, 2π) with a single step
    pub fn rotate(&mut self, direction: i32) {
        let sign = direction.signum() as f32;
        self.heading += sign * self.turn_rate;
        if self.heading >= TAU {
            self.heading -= TAU;
        } else if self.heading < 0.0 {
            self.heading += TAU;
            // a tiny negative heading rounds up to TAU itself
            if self.heading >= TAU {
                self.heading = 0.0;
            }
        }
    }

    fn translate(&mut self, towards: f32, direction: i32) {
        let distance = direction.signum() as f32 * self.move_speed;
        self.x += distance * towards.cos();
        self.y += distance * towards.sin();
    }
}

fn invalid<T>(msg: String) -> Result<T, RaycasterError> {
    Err(RaycasterError::InvalidConfiguration(msg))
}
