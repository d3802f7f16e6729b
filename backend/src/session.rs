use maze_core::explore::{FirstPersonInput, FirstPersonState, Key};
use maze_core::extrusion::{convert_with, ExtrusionConfig};
use maze_core::geometry::LineSegment2D;
use maze_core::io::TextSerializable;
use maze_core::maze::{Maze2D, Maze3D};
use maze_core::view::{OrbitAction, OrbitInput, OrbitState};
use maze_core::MazeConfig;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

/// Format an error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!("ERROR_UPDATE:{}", json!({
        "code": code,
        "message": message,
        "severity": severity
    }))
}

#[derive(Deserialize)]
struct AddLineCmd {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[derive(Deserialize)]
struct NewMazeCmd {
    width: i32,
    height: i32,
}

#[derive(Deserialize, Default)]
struct ConvertCmd {
    wall_width: Option<f64>,
    wall_height: Option<f64>,
}

#[derive(Deserialize)]
struct KeyCmd {
    key: Key,
    pressed: bool,
}

#[derive(Deserialize)]
struct MouseCmd {
    x: i32,
    y: i32,
}

#[derive(Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum OrbitCmd {
    Press { action: OrbitAction, x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    Reset,
}

/// Everything one connected client is editing, walking or viewing.
pub struct Session {
    config: MazeConfig,
    maze2d: Maze2D,
    maze3d: Maze3D,
    maze3d_revision: u64,
    player: FirstPersonState,
    player_input: FirstPersonInput,
    orbit: OrbitState,
    orbit_input: OrbitInput,
}

impl Session {
    pub fn new(config: MazeConfig) -> Self {
        Self {
            config,
            maze2d: Maze2D::new(500, 500),
            maze3d: Maze3D::default(),
            maze3d_revision: 0,
            player: FirstPersonState::new(config.first_person),
            player_input: FirstPersonInput::new(),
            orbit: OrbitState::new(config.orbit),
            orbit_input: OrbitInput::default(),
        }
    }

    pub fn maze2d(&self) -> &Maze2D {
        &self.maze2d
    }

    pub fn maze3d(&self) -> &Maze3D {
        &self.maze3d
    }

    /// Bumped every time the 3D maze is replaced.
    pub fn maze3d_revision(&self) -> u64 {
        self.maze3d_revision
    }

    pub fn player(&self) -> &FirstPersonState {
        &self.player
    }

    /// Swaps in a new 3D maze and puts the player back at the origin.
    pub fn set_maze3d(&mut self, maze: Maze3D) {
        self.maze3d = maze;
        self.maze3d_revision += 1;
        self.player = FirstPersonState::new(self.config.first_person);
        self.player_input = FirstPersonInput::new();
    }

    /// Runs one client command and returns the messages to send back.
    pub fn handle(&mut self, text: &str) -> Vec<String> {
        let (command, payload) = match text.split_once(':') {
            Some((c, p)) => (c, p),
            None => (text, ""),
        };

        match command {
            "ADD_LINE" => match serde_json::from_str::<AddLineCmd>(payload) {
                Ok(cmd) => {
                    self.maze2d.add_line(LineSegment2D::from_coords(cmd.x1, cmd.y1, cmd.x2, cmd.y2));
                    debug!("Added line, maze now has {} lines", self.maze2d.len());
                    vec![self.maze2d_update()]
                }
                Err(e) => bad_payload(command, &e),
            },
            "CLEAR" => {
                self.maze2d.clear();
                info!("Cleared 2D maze");
                vec![self.maze2d_update()]
            }
            "NEW_MAZE" => match serde_json::from_str::<NewMazeCmd>(payload) {
                Ok(cmd) if cmd.width > 0 && cmd.height > 0 => {
                    self.maze2d = Maze2D::new(cmd.width, cmd.height);
                    info!("New {}x{} maze", cmd.width, cmd.height);
                    vec![self.maze2d_update()]
                }
                Ok(cmd) => vec![format_error(
                    "INVALID_SIZE",
                    &format!("Maze size must be positive, got {}x{}", cmd.width, cmd.height),
                    "error",
                )],
                Err(e) => bad_payload(command, &e),
            },
            "CONVERT" => {
                let cmd = if payload.trim().is_empty() {
                    Ok(ConvertCmd::default())
                } else {
                    serde_json::from_str::<ConvertCmd>(payload)
                };
                match cmd {
                    Ok(cmd) => self.convert(cmd),
                    Err(e) => bad_payload(command, &e),
                }
            }
            "LOAD_2D" => match Maze2D::from_text(payload) {
                Ok(maze) => {
                    info!("Loaded 2D maze with {} lines", maze.len());
                    self.maze2d = maze;
                    vec![self.maze2d_update()]
                }
                Err(e) => {
                    warn!("Rejected 2D maze: {}", e);
                    vec![format_error("LOAD_FAILED", &e.to_string(), "error")]
                }
            },
            "LOAD_3D" => match Maze3D::from_text(payload) {
                Ok(maze) => {
                    info!("Loaded 3D maze with {} walls", maze.number_of_walls());
                    self.set_maze3d(maze);
                    vec![self.maze3d_update(), self.player_update()]
                }
                Err(e) => {
                    warn!("Rejected 3D maze: {}", e);
                    vec![format_error("LOAD_FAILED", &e.to_string(), "error")]
                }
            },
            "EXPORT_2D" => export("MAZE2D_TEXT", &self.maze2d),
            "EXPORT_3D" => export("MAZE3D_TEXT", &self.maze3d),
            "KEY" => match serde_json::from_str::<KeyCmd>(payload) {
                Ok(KeyCmd { key: Key::Jump, pressed }) => {
                    if pressed {
                        self.player.jump();
                    }
                    Vec::new()
                }
                Ok(cmd) => {
                    self.player_input.apply_key(cmd.key, cmd.pressed);
                    Vec::new()
                }
                Err(e) => bad_payload(command, &e),
            },
            "LOOK" => match serde_json::from_str::<MouseCmd>(payload) {
                Ok(cmd) => {
                    let delta = self.player_input.track_mouse(cmd.x, cmd.y);
                    self.player.look(&delta);
                    vec![self.player_update()]
                }
                Err(e) => bad_payload(command, &e),
            },
            "JUMP" => {
                self.player.jump();
                Vec::new()
            }
            "TICK" => {
                self.player.update_position(&self.maze3d, &self.player_input);
                vec![self.player_update()]
            }
            "ORBIT" => match serde_json::from_str::<OrbitCmd>(payload) {
                Ok(cmd) => {
                    self.orbit_event(cmd);
                    vec![self.orbit_update()]
                }
                Err(e) => bad_payload(command, &e),
            },
            _ => {
                warn!("Unknown command: {}", command);
                vec![format_error(
                    "UNKNOWN_COMMAND",
                    &format!("Unknown command '{}'", command),
                    "warning",
                )]
            }
        }
    }

    fn convert(&mut self, cmd: ConvertCmd) -> Vec<String> {
        let defaults = self.config.extrusion;
        let extrusion = ExtrusionConfig {
            wall_width: cmd.wall_width.unwrap_or(defaults.wall_width),
            wall_height: cmd.wall_height.unwrap_or(defaults.wall_height),
            ..defaults
        };
        if extrusion.wall_width <= 0.0 || extrusion.wall_height <= 0.0 {
            return vec![format_error(
                "INVALID_DIMENSIONS",
                "Wall width and height must be positive",
                "error",
            )];
        }

        let maze = convert_with(&self.maze2d, &extrusion);
        info!(
            "Converted {} lines into {} walls",
            self.maze2d.len(),
            maze.number_of_walls()
        );
        self.set_maze3d(maze);
        vec![self.maze3d_update(), self.player_update()]
    }

    fn orbit_event(&mut self, cmd: OrbitCmd) {
        match cmd {
            OrbitCmd::Press { action, x, y } => self.orbit_input.press(action, x, y),
            OrbitCmd::Release { x, y } => self.orbit_input.release(x, y),
            OrbitCmd::Move { x, y } => {
                let action = self.orbit_input.action;
                let delta = self.orbit_input.track_mouse(x, y);
                self.orbit.drag(action, &delta);
            }
            OrbitCmd::Reset => self.orbit.reset(),
        }
    }

    fn maze2d_update(&self) -> String {
        let json = serde_json::to_string(&self.maze2d).unwrap_or("{}".into());
        format!("MAZE2D_UPDATE:{}", json)
    }

    pub fn maze3d_update(&self) -> String {
        let update = json!({
            "walls": self.maze3d.number_of_walls(),
            "vertex_count": self.maze3d.vertex_count(),
            "quad_count": self.maze3d.quad_count(),
            "tessellation": self.maze3d.tessellate(),
        });
        format!("MAZE3D_UPDATE:{}", update)
    }

    pub fn player_update(&self) -> String {
        let p = self.player.position();
        let update = json!({
            "x": p.x,
            "y": p.y,
            "z": p.z,
            "tilt": self.player.tilt_degrees(),
            "spin": self.player.spin_degrees(),
            "zoom": self.player_input.zoom_direction(),
            "view_matrix": self.player.view_matrix().as_slice(),
        });
        format!("PLAYER_UPDATE:{}", update)
    }

    fn orbit_update(&self) -> String {
        let update = json!({
            "action": self.orbit_input.action,
            "model_matrix": self.orbit.model_matrix().as_slice(),
        });
        format!("ORBIT_UPDATE:{}", update)
    }
}

fn bad_payload(command: &str, e: &serde_json::Error) -> Vec<String> {
    warn!("Failed to parse {} command: {}", command, e);
    vec![format_error(
        "BAD_PAYLOAD",
        &format!("Invalid {} payload: {}", command, e),
        "error",
    )]
}

fn export<T: TextSerializable>(prefix: &str, value: &T) -> Vec<String> {
    match value.to_text() {
        Ok(text) => vec![format!("{}:{}", prefix, text)],
        Err(e) => vec![format_error("EXPORT_FAILED", &e.to_string(), "error")],
    }
}
