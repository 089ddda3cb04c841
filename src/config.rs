use crate::error::RaycasterError;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

/// Starting pose and optics of the viewer
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_viewer_x")]
    pub x: f32,
    #[serde(default = "default_viewer_y")]
    pub y: f32,
    #[serde(default)]
    pub heading: f32,
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,
    #[serde(default = "default_ray_count")]
    pub ray_count: usize,
    #[serde(default = "default_max_cast_distance")]
    pub max_cast_distance: f32,
    #[serde(default = "default_turn_rate")]
    pub turn_rate: f32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Distance divisor used when turning depth into strip height
    #[serde(default = "default_wall_scale")]
    pub wall_scale: f32,
    #[serde(default = "default_wall_color")]
    pub wall_color: [u8; 3],
    #[serde(default = "default_sky_color")]
    pub sky_color: [u8; 3],
    #[serde(default = "default_background_color")]
    pub background_color: [u8; 3],
}

#[derive(Debug, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

// Default values
fn default_window_title() -> String { "Raycaster".to_string() }
fn default_window_width() -> i32 { 800 }
fn default_window_height() -> i32 { 600 }
fn default_map_path() -> String { "map.txt".to_string() }
fn default_cell_size() -> f32 { 40.0 }
fn default_viewer_x() -> f32 { 400.0 }
fn default_viewer_y() -> f32 { 300.0 }
fn default_fov_degrees() -> f32 { 60.0 }
fn default_ray_count() -> usize { 600 }
fn default_max_cast_distance() -> f32 { 6000.0 }
fn default_turn_rate() -> f32 { 0.1 }
fn default_move_speed() -> f32 { 10.0 }
fn default_wall_scale() -> f32 { 10.0 }
fn default_wall_color() -> [u8; 3] { [0, 0, 255] }
fn default_sky_color() -> [u8; 3] { [204, 204, 204] }
fn default_background_color() -> [u8; 3] { [77, 77, 77] }
fn default_snapshot_path() -> String { "snapshot.json".to_string() }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
            cell_size: default_cell_size(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            x: default_viewer_x(),
            y: default_viewer_y(),
            heading: 0.0,
            fov_degrees: default_fov_degrees(),
            ray_count: default_ray_count(),
            max_cast_distance: default_max_cast_distance(),
            turn_rate: default_turn_rate(),
            move_speed: default_move_speed(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wall_scale: default_wall_scale(),
            wall_color: default_wall_color(),
            sky_color: default_sky_color(),
            background_color: default_background_color(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            map: MapConfig::default(),
            viewer: ViewerConfig::default(),
            render: RenderConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if it is missing or broken
    pub fn load() -> Self {
        Self::load_or_default("config.toml")
    }

    /// Same as `load` for an arbitrary path
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found, using default configuration", path.display());
            return Config::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Read and parse a config file, surfacing any error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RaycasterError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, RaycasterError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.map.cell_size, 40.0);
        assert_eq!(config.viewer.ray_count, 600);
        assert_eq!(config.viewer.max_cast_distance, 6000.0);
        assert_eq!(config.render.wall_color, [0, 0, 255]);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [viewer]
            fov_degrees = 90.0
            ray_count = 8

            [map]
            path = "maps/arena.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.viewer.fov_degrees, 90.0);
        assert_eq!(config.viewer.ray_count, 8);
        assert_eq!(config.viewer.move_speed, 10.0);
        assert_eq!(config.map.path, "maps/arena.txt");
        assert_eq!(config.map.cell_size, 40.0);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(matches!(
            Config::parse("[viewer\nray_count = 3"),
            Err(RaycasterError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config.snapshot.path, "snapshot.json");
    }
}
