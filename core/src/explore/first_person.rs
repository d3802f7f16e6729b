//! Walking through a [`Maze3D`] in first person.
//!
//! World space is y-up. The maze plane is the world's x/z plane with the
//! maze's 2D `y` running along world `-z`, so converting between the two
//! only ever flips the sign of the second coordinate.

use super::input::{FirstPersonInput, LookDelta};
use crate::geometry::utils_2d::heading;
use crate::geometry::{LineSegment2D, Matrix4, Point2, Point3, Vector2, Vector3};
use crate::maze::Maze3D;
use serde::{Deserialize, Serialize};

/// Movement tuning. Velocities are world units per update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstPersonConfig {
    pub walk_velocity: f64,
    pub strafe_velocity: f64,
    pub jump_velocity: f64,
    /// How many steps ahead of the player collisions are probed. Should stay
    /// below the wall width divided by the walk velocity, or the probe can
    /// skip over a wall.
    pub buffer_distance: f64,
    pub gravity: f64,
    /// Degrees turned per look event.
    pub look_increment: f64,
    pub min_tilt: f64,
    pub max_tilt: f64,
}

impl Default for FirstPersonConfig {
    fn default() -> Self {
        Self {
            walk_velocity: 2.0,
            strafe_velocity: 2.0,
            jump_velocity: 3.0,
            buffer_distance: 2.0,
            gravity: -0.08,
            look_increment: 3.0,
            min_tilt: -90.0,
            max_tilt: 90.0,
        }
    }
}

/// Player position, vertical speed and view angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstPersonState {
    config: FirstPersonConfig,
    position: Point3,
    vertical_velocity: f64,
    tilt_degrees: f64,
    spin_degrees: f64,
}

impl Default for FirstPersonState {
    fn default() -> Self {
        Self::new(FirstPersonConfig::default())
    }
}

impl FirstPersonState {
    pub fn new(config: FirstPersonConfig) -> Self {
        Self {
            config,
            position: Point3::origin(),
            vertical_velocity: 0.0,
            tilt_degrees: 0.0,
            spin_degrees: 0.0,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Point3::new(x, y, z);
        self
    }

    pub fn config(&self) -> &FirstPersonConfig {
        &self.config
    }

    pub fn position(&self) -> &Point3 {
        &self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Height above the floor.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.vertical_velocity
    }

    pub fn tilt_degrees(&self) -> f64 {
        self.tilt_degrees
    }

    pub fn spin_degrees(&self) -> f64 {
        self.spin_degrees
    }

    pub fn look_up(&mut self, degrees: f64) {
        if self.tilt_degrees - degrees >= self.config.min_tilt {
            self.tilt_degrees -= degrees;
        }
    }

    pub fn look_down(&mut self, degrees: f64) {
        if self.tilt_degrees + degrees <= self.config.max_tilt {
            self.tilt_degrees += degrees;
        }
    }

    pub fn look_left(&mut self, degrees: f64) {
        self.spin_degrees -= degrees;
    }

    pub fn look_right(&mut self, degrees: f64) {
        self.spin_degrees += degrees;
    }

    /// Turns by one look increment per direction in `delta`.
    pub fn look(&mut self, delta: &LookDelta) {
        let step = self.config.look_increment;
        if delta.up {
            self.look_up(step);
        } else if delta.down {
            self.look_down(step);
        }
        if delta.right {
            self.look_right(step);
        } else if delta.left {
            self.look_left(step);
        }
    }

    /// Starts a jump. Ignored while airborne.
    pub fn jump(&mut self) {
        if self.position.y <= 0.0 {
            self.vertical_velocity = self.config.jump_velocity;
        }
    }

    /// Advances the player by one frame.
    pub fn update_position(&mut self, maze: &Maze3D, input: &FirstPersonInput) {
        self.position.y = (self.position.y + self.vertical_velocity).max(0.0);
        self.vertical_velocity += self.config.gravity;
        if self.position.y <= 0.0 {
            self.vertical_velocity = 0.0;
        }

        let step = self.displacement(input);
        if step == Vector2::zeros() {
            return;
        }

        // Probe a few steps ahead so the camera never gets close enough to clip a wall
        let buffer = step * self.config.buffer_distance;
        let source = Point2::new(
            self.position.x + buffer.x,
            -(self.position.z + buffer.y),
        );
        let destination = source + Vector2::new(step.x, -step.y);

        let resolved = resolve_collision(&source, &destination, maze);
        self.position.x += resolved.x;
        self.position.z -= resolved.y;
    }

    /// World `(x, z)` displacement requested by `input` for one frame.
    fn displacement(&self, input: &FirstPersonInput) -> Vector2 {
        let yaw = self.spin_degrees;
        let mut step = Vector2::zeros();

        if input.moving_forward && !input.moving_backward {
            step += heading(yaw) * self.config.walk_velocity;
        } else if input.moving_backward && !input.moving_forward {
            step += heading(yaw + 180.0) * self.config.walk_velocity;
        }

        if input.strafing_right && !input.strafing_left {
            step += heading(yaw + 90.0) * self.config.strafe_velocity;
        } else if input.strafing_left && !input.strafing_right {
            step += heading(yaw - 90.0) * self.config.strafe_velocity;
        }

        step
    }

    /// World-to-eye transform: tilt, then spin, then move the world so the
    /// player sits at the origin. The trailing `-90°` turn about x stands the
    /// maze (built with z up) upright.
    pub fn view_matrix(&self) -> Matrix4 {
        let tilt = Matrix4::from_axis_angle(&Vector3::x_axis(), self.tilt_degrees.to_radians());
        let spin = Matrix4::from_axis_angle(&Vector3::y_axis(), self.spin_degrees.to_radians());
        let to_player = Matrix4::new_translation(&-self.position.coords);
        let upright = Matrix4::from_axis_angle(&Vector3::x_axis(), (-90f64).to_radians());
        tilt * spin * to_player * upright
    }
}

/// Motion left over when travelling from `source` to `destination` in maze
/// coordinates.
///
/// When the destination is inside a wall the player slides along it. If the
/// slide would still end inside a wall, the player does not move at all.
pub fn resolve_collision(source: &Point2, destination: &Point2, maze: &Maze3D) -> Vector2 {
    let wall = match maze.detect_collision(destination) {
        Ok(wall) => wall,
        Err(_) => return destination - source,
    };

    let slide = wall.resolve_collision(&LineSegment2D::new(*source, *destination));
    if maze.detect_collision(&(source + slide)).is_ok() {
        tracing::trace!("Blocked at ({}, {})", source.x, source.y);
        return Vector2::zeros();
    }
    slide
}
