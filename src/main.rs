use arboard::Clipboard;
use log::{error, info, warn};
use macroquad::prelude::*;
use raycaster::{
    project_strips, scan, Config, FrameScan, OccupancyGrid, RaycasterError, Snapshot, Viewer,
};

/// Everything the render loop needs, built once at startup
struct App {
    config: Config,
    grid: OccupancyGrid,
    viewer: Viewer,
    frame: FrameScan,
    show_map: bool,
}

impl App {
    fn new(config: Config) -> Result<Self, RaycasterError> {
        let grid = OccupancyGrid::from_file(&config.map.path, config.map.cell_size)?;
        info!("Map layout:\n{}", grid);
        let viewer = Viewer::new(&config.viewer)?;
        let frame = scan(&grid, &viewer);

        Ok(App {
            config,
            grid,
            viewer,
            frame,
            show_map: false,
        })
    }

    fn handle_input(&mut self) {
        let mut moved = false;

        if is_key_down(KeyCode::W) {
            self.viewer.advance(1);
            moved = true;
        }
        if is_key_down(KeyCode::S) {
            self.viewer.advance(-1);
            moved = true;
        }
        if is_key_down(KeyCode::D) {
            self.viewer.strafe(1);
            moved = true;
        }
        if is_key_down(KeyCode::A) {
            self.viewer.strafe(-1);
            moved = true;
        }
        if is_key_down(KeyCode::E) {
            self.viewer.rotate(1);
            moved = true;
        }
        if is_key_down(KeyCode::Q) {
            self.viewer.rotate(-1);
            moved = true;
        }

        if is_key_pressed(KeyCode::M) {
            self.show_map = !self.show_map;
        }
        if is_key_pressed(KeyCode::P) {
            info!(
                "x: {:.1}, y: {:.1}, heading: {:.3}",
                self.viewer.x, self.viewer.y, self.viewer.heading
            );
        }
        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::F) {
            let snapshot = Snapshot::capture(&self.viewer, &self.frame);
            if let Err(e) = snapshot.save_to_file(&self.config.snapshot.path) {
                error!("Failed to save snapshot: {}", e);
            }
        }

        if moved {
            self.frame = scan(&self.grid, &self.viewer);
        }
    }

    /// Map rows followed by the viewer pose
    fn layout_to_string(&self) -> String {
        format!(
            "{}x={:.1} y={:.1} heading={:.3}\n",
            self.grid, self.viewer.x, self.viewer.y, self.viewer.heading
        )
    }

    fn copy_to_clipboard(&self) {
        let layout = self.layout_to_string();
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&layout) {
                    warn!("Failed to copy to clipboard: {}", e);
                } else {
                    info!("Map and pose copied to clipboard");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                warn!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        clear_background(shaded_color(self.config.render.background_color, 1.0));

        if self.show_map {
            self.draw_map();
        } else {
            self.draw_view();
        }

        let info = format!(
            "W/S move  A/D strafe  Q/E turn  M map  P pose  C copy  F snapshot  Esc quit   {} fps",
            get_fps()
        );
        draw_text(&info, 10.0, 20.0, 18.0, WHITE);
    }

    fn draw_view(&self) {
        let render = &self.config.render;
        let (width, height) = (screen_width(), screen_height());

        draw_rectangle(0.0, 0.0, width, height / 2.0, shaded_color(render.sky_color, 1.0));

        for strip in project_strips(&self.frame, width, height, render.wall_scale) {
            draw_rectangle(
                strip.x,
                strip.y,
                strip.width,
                strip.height,
                shaded_color(render.wall_color, strip.shade),
            );
        }
    }

    /// Top-down debug overlay
    fn draw_map(&self) {
        let size = self.grid.cell_size();

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let color = match self.grid.cell(col, row) {
                    Ok(1) => WHITE,
                    _ => BLACK,
                };
                draw_rectangle(
                    col as f32 * size,
                    row as f32 * size,
                    size - 1.0,
                    size - 1.0,
                    color,
                );
            }
        }

        let (x, y) = (self.viewer.x, self.viewer.y);
        for hit in &self.frame {
            if let Some((hx, hy)) = hit.point {
                draw_line(x, y, hx, hy, 1.0, GREEN);
            }
        }

        draw_circle(x, y, 4.0, BLUE);
        let heading = self.viewer.heading;
        draw_line(x, y, x + 20.0 * heading.cos(), y + 20.0 * heading.sin(), 3.0, BLUE);
    }
}

fn shaded_color(color: [u8; 3], shade: f32) -> Color {
    let base = Color::from_rgba(color[0], color[1], color[2], 255);
    Color::new(base.r * shade, base.g * shade, base.b * shade, 1.0)
}

fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let window = Config::load().window;
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = match App::new(Config::load()) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.handle_input();
        app.draw();

        next_frame().await
    }
}
