//! Headless frame dump
//!
//! Loads the config and map, casts one frame from the configured viewer pose
//! and prints it as a JSON snapshot on stdout.

use log::{error, info};
use raycaster::{scan, Config, OccupancyGrid, RaycasterError, Snapshot, Viewer};
use std::env;
use std::process;

struct Args {
    config_path: Option<String>,
    map_path: Option<String>,
    pretty: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        map_path: None,
        pretty: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--map" => {
                let path = iter.next().ok_or("--map needs a path")?;
                args.map_path = Some(path);
            }
            "-h" | "--help" => return Err(String::new()),
            other if other.starts_with('-') => return Err(format!("unknown option {}", other)),
            other => args.config_path = Some(other.to_string()),
        }
    }

    Ok(args)
}

fn run(args: &Args) -> Result<String, RaycasterError> {
    let config = match &args.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    let map_path = args.map_path.as_deref().unwrap_or(&config.map.path);

    let grid = OccupancyGrid::from_file(map_path, config.map.cell_size)?;
    let viewer = Viewer::new(&config.viewer)?;
    let frame = scan(&grid, &viewer);

    let hits = frame.iter().filter(|hit| hit.is_hit()).count();
    info!("Cast {} rays, {} hit a wall", frame.len(), hits);

    Snapshot::capture(&viewer, &frame).to_json(args.pretty)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("{}", msg);
            }
            eprintln!("Usage: scan_dump [config.toml] [--map PATH] [--pretty]");
            eprintln!("Casts one frame from the configured viewer and prints it as JSON");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
