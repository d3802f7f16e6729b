//! Extrudes a 2D maze file into a 3D maze file.
//!
//! Usage: `convert-maze [2d_file [3d_file [wall_width [wall_height]]]]`

use maze_core::extrusion::{convert_with, ExtrusionConfig};
use maze_core::io::{load_file, write_file};
use maze_core::maze::Maze2D;
use maze_core::MazeConfig;
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_2D_FILE: &str = "SampleMazes/sampleMaze2D";
const DEFAULT_3D_FILE: &str = "SampleMazes/sampleMaze3D";

struct Args {
    input: String,
    output: String,
    extrusion: ExtrusionConfig,
}

fn parse_args(args: &[String], defaults: ExtrusionConfig) -> Result<Args, String> {
    let number = |i: usize, name: &str, fallback: f64| -> Result<f64, String> {
        match args.get(i) {
            None => Ok(fallback),
            Some(s) => match s.parse::<f64>() {
                Ok(v) if v > 0.0 => Ok(v),
                _ => Err(format!("{} must be a positive number, got '{}'", name, s)),
            },
        }
    };

    Ok(Args {
        input: args.first().cloned().unwrap_or_else(|| DEFAULT_2D_FILE.to_string()),
        output: args.get(1).cloned().unwrap_or_else(|| DEFAULT_3D_FILE.to_string()),
        extrusion: ExtrusionConfig {
            wall_width: number(2, "wall width", defaults.wall_width)?,
            wall_height: number(3, "wall height", defaults.wall_height)?,
            ..defaults
        },
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let defaults = match std::env::var("MAZE_CONFIG") {
        Ok(path) => match MazeConfig::load(&path) {
            Ok(config) => config.extrusion,
            Err(e) => {
                error!("Could not load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => ExtrusionConfig::default(),
    };

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw, defaults) {
        Ok(a) => a,
        Err(msg) => {
            error!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    let maze2d: Maze2D = match load_file(&args.input) {
        Ok(m) => m,
        Err(e) => {
            error!("Could not read 2D maze from {}: {}", args.input, e);
            return ExitCode::FAILURE;
        }
    };

    let maze3d = convert_with(&maze2d, &args.extrusion);
    if let Err(e) = write_file(&args.output, &maze3d) {
        error!("Could not write 3D maze to {}: {}", args.output, e);
        return ExitCode::FAILURE;
    }

    info!(
        "Converted {} ({} lines) into {} ({} walls)",
        args.input,
        maze2d.len(),
        args.output,
        maze3d.number_of_walls()
    );
    ExitCode::SUCCESS
}
