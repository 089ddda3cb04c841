#![allow(dead_code)]

use raycaster::{OccupancyGrid, Viewer, ViewerConfig};
use std::path::{Path, PathBuf};

pub const CELL_SIZE: f32 = 40.0;

/// Path of a map fixture under test_data/maps
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("maps")
        .join(name)
}

/// Load a map fixture with the standard cell size
pub fn load_map(name: &str) -> OccupancyGrid {
    OccupancyGrid::from_file(fixture(name), CELL_SIZE)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", name, e))
}

/// Viewer with default optics at the given pose
pub fn viewer_at(x: f32, y: f32, heading: f32) -> Viewer {
    viewer_with(ViewerConfig {
        x,
        y,
        heading,
        ..ViewerConfig::default()
    })
}

pub fn viewer_with(config: ViewerConfig) -> Viewer {
    Viewer::new(&config).expect("test viewer config should be valid")
}

/// Map rows as '0'/'1' strings
pub fn map_rows(grid: &OccupancyGrid) -> Vec<String> {
    grid.to_string().lines().map(str::to_string).collect()
}

/// Mirror a grid left-right
pub fn flip_horizontal(grid: &OccupancyGrid) -> OccupancyGrid {
    let text: Vec<String> = map_rows(grid)
        .iter()
        .map(|row| row.chars().rev().collect())
        .collect();
    OccupancyGrid::parse(&text.join("\n"), grid.cell_size()).expect("flipped grid")
}

/// Mirror a grid top-bottom
pub fn flip_vertical(grid: &OccupancyGrid) -> OccupancyGrid {
    let mut rows = map_rows(grid);
    rows.reverse();
    OccupancyGrid::parse(&rows.join("\n"), grid.cell_size()).expect("flipped grid")
}
