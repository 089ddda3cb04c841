use crate::raycast::Face;
use crate::scanner::FrameScan;

/// Screen-space wall column for one ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strip {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Brightness multiplier for the wall colour
    pub shade: f32,
}

/// Vertical faces are drawn darker so corners stay readable
pub fn face_shade(face: Face) -> f32 {
    match face {
        Face::Horizontal => 1.0,
        Face::Vertical => 0.5,
    }
}

/// Turn a frame of depths into one vertically centred strip per ray.
///
/// Height is `screen_height / (distance / wall_scale)`, capped at the screen height.
pub fn project_strips(
    frame: &FrameScan,
    screen_width: f32,
    screen_height: f32,
    wall_scale: f32,
) -> Vec<Strip> {
    if frame.is_empty() {
        return Vec::new();
    }

    let width = screen_width / frame.len() as f32;
    frame
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            let height = (screen_height / (hit.distance / wall_scale)).min(screen_height);
            Strip {
                x: i as f32 * width,
                y: (screen_height - height) / 2.0,
                width,
                height,
                shade: face_shade(hit.face),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::grid::OccupancyGrid;
    use crate::scanner::scan;
    use crate::viewer::Viewer;
    use approx::assert_relative_eq;

    #[test]
    fn test_strips_cover_screen_width() {
        let grid = OccupancyGrid::parse("1111\n1001\n1001\n1111\n", 40.0).unwrap();
        let viewer = Viewer::new(&ViewerConfig {
            x: 60.0,
            y: 60.0,
            ray_count: 8,
            ..ViewerConfig::default()
        })
        .unwrap();
        let frame = scan(&grid, &viewer);
        let strips = project_strips(&frame, 800.0, 600.0, 10.0);

        assert_eq!(strips.len(), 8);
        assert_relative_eq!(strips[0].x, 0.0);
        assert_relative_eq!(strips[7].x + strips[7].width, 800.0, epsilon = 1e-3);
        for strip in &strips {
            assert!(strip.height <= 600.0);
            assert_relative_eq!(strip.y * 2.0 + strip.height, 600.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_close_walls_are_capped() {
        let grid = OccupancyGrid::parse("111\n101\n111\n", 40.0).unwrap();
        let viewer = Viewer::new(&ViewerConfig {
            x: 41.0,
            y: 60.0,
            heading: std::f32::consts::PI,
            ray_count: 2,
            ..ViewerConfig::default()
        })
        .unwrap();
        // Central ray is 1 unit from the west wall
        let frame = scan(&grid, &viewer);
        let strips = project_strips(&frame, 100.0, 600.0, 10.0);
        assert_eq!(strips[1].height, 600.0);
        assert_eq!(strips[1].y, 0.0);
        assert_eq!(strips[1].shade, 0.5);
    }

    #[test]
    fn test_misses_render_as_thin_strips() {
        let grid = OccupancyGrid::new(2, 2, 40.0).unwrap();
        let viewer = Viewer::new(&ViewerConfig {
            ray_count: 10,
            ..ViewerConfig::default()
        })
        .unwrap();
        let frame = scan(&grid, &viewer);
        let strips = project_strips(&frame, 800.0, 600.0, 10.0);
        assert_eq!(strips.len(), 10);
        // 6000 units away at scale 10 leaves a one pixel sliver
        assert!(strips.iter().all(|s| (s.height - 1.0).abs() < 1e-4));
    }
}
