//! Viewing a maze model from afar: scale, translate and rotate it with the
//! mouse.

use super::bounded::Bounded;
use crate::explore::LookDelta;
use crate::geometry::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

/// Drag increments and limits for the orbit view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Degrees per drag event.
    pub rotation_increment: f64,
    pub translation_increment: f64,
    pub scale_multiplier: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub max_x_translation: f64,
    pub max_y_translation: f64,
    pub max_z_translation: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            rotation_increment: 3.0,
            translation_increment: 5.0,
            scale_multiplier: 1.05,
            min_scale: 0.1,
            max_scale: 10.0,
            max_x_translation: 500.0,
            max_y_translation: 500.0,
            max_z_translation: 500.0,
        }
    }
}

/// What a mouse drag does to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitAction {
    #[default]
    None,
    Rotating,
    Scaling,
    Translating,
}

impl OrbitAction {
    /// Mode for a left-button press: shift translates, ctrl scales, a plain
    /// press rotates.
    pub fn from_modifiers(shift: bool, ctrl: bool) -> Self {
        if shift {
            OrbitAction::Translating
        } else if ctrl {
            OrbitAction::Scaling
        } else {
            OrbitAction::Rotating
        }
    }
}

/// Drag mode plus the last pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrbitInput {
    pub action: OrbitAction,
    last_mouse_position: (i32, i32),
}

impl OrbitInput {
    pub fn press(&mut self, action: OrbitAction, x: i32, y: i32) {
        self.action = action;
        self.last_mouse_position = (x, y);
    }

    pub fn release(&mut self, x: i32, y: i32) {
        self.action = OrbitAction::None;
        self.last_mouse_position = (x, y);
    }

    pub fn last_mouse_position(&self) -> (i32, i32) {
        self.last_mouse_position
    }

    pub fn moved_mouse_left(&self, current_x: i32) -> bool {
        self.last_mouse_position.0 > current_x
    }

    pub fn moved_mouse_right(&self, current_x: i32) -> bool {
        self.last_mouse_position.0 < current_x
    }

    pub fn moved_mouse_up(&self, current_y: i32) -> bool {
        self.last_mouse_position.1 > current_y
    }

    pub fn moved_mouse_down(&self, current_y: i32) -> bool {
        self.last_mouse_position.1 < current_y
    }

    /// Pointer direction since the last sample, which becomes `(x, y)`.
    pub fn track_mouse(&mut self, x: i32, y: i32) -> LookDelta {
        let delta = LookDelta::from_mouse(self.last_mouse_position, (x, y));
        self.last_mouse_position = (x, y);
        delta
    }
}

/// Accumulated model transform for the orbit view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    config: OrbitConfig,
    x_scale: Bounded<f64>,
    y_scale: Bounded<f64>,
    z_scale: Bounded<f64>,
    x_translation: Bounded<f64>,
    y_translation: Bounded<f64>,
    z_translation: Bounded<f64>,
    rotation: Matrix4,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitState {
    /// Identity transform with the limits from `config`.
    pub fn new(config: OrbitConfig) -> Self {
        let mut res = Self {
            config,
            x_scale: Bounded::default(),
            y_scale: Bounded::default(),
            z_scale: Bounded::default(),
            x_translation: Bounded::default(),
            y_translation: Bounded::default(),
            z_translation: Bounded::default(),
            rotation: Matrix4::identity(),
        };

        let (lo, hi) = (config.min_scale, config.max_scale);
        res.set_up_x_scale(lo, hi, 1.0);
        res.set_up_y_scale(lo, hi, 1.0);
        res.set_up_z_scale(lo, hi, 1.0);
        res.set_up_x_translation(-config.max_x_translation, config.max_x_translation, 0.0);
        res.set_up_y_translation(-config.max_y_translation, config.max_y_translation, 0.0);
        res.set_up_z_translation(-config.max_z_translation, config.max_z_translation, 0.0);
        res
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn set_up_x_scale(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.x_scale, min, max, initial);
    }

    pub fn set_up_y_scale(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.y_scale, min, max, initial);
    }

    pub fn set_up_z_scale(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.z_scale, min, max, initial);
    }

    pub fn set_up_x_translation(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.x_translation, min, max, initial);
    }

    pub fn set_up_y_translation(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.y_translation, min, max, initial);
    }

    pub fn set_up_z_translation(&mut self, min: f64, max: f64, initial: f64) {
        set_up(&mut self.z_translation, min, max, initial);
    }

    /// Back to unit scale, no translation and no rotation. Limits are kept.
    pub fn reset(&mut self) {
        self.x_scale.set(1.0);
        self.y_scale.set(1.0);
        self.z_scale.set(1.0);
        self.x_translation.set(0.0);
        self.y_translation.set(0.0);
        self.z_translation.set(0.0);
        self.rotation = Matrix4::identity();
    }

    pub fn scale(&self) -> Vector3 {
        Vector3::new(self.x_scale.get(), self.y_scale.get(), self.z_scale.get())
    }

    pub fn translation(&self) -> Vector3 {
        Vector3::new(
            self.x_translation.get(),
            self.y_translation.get(),
            self.z_translation.get(),
        )
    }

    pub fn rotation(&self) -> &Matrix4 {
        &self.rotation
    }

    pub fn multiply_x_scale_by(&mut self, factor: f64) {
        self.x_scale *= factor;
    }

    pub fn multiply_y_scale_by(&mut self, factor: f64) {
        self.y_scale *= factor;
    }

    pub fn multiply_z_scale_by(&mut self, factor: f64) {
        self.z_scale *= factor;
    }

    pub fn add_to_x_translation(&mut self, amount: f64) {
        self.x_translation += amount;
    }

    pub fn add_to_y_translation(&mut self, amount: f64) {
        self.y_translation += amount;
    }

    pub fn add_to_z_translation(&mut self, amount: f64) {
        self.z_translation += amount;
    }

    pub fn rotate_around_x_axis(&mut self, degrees: f64) {
        self.rotate(&Vector3::x_axis(), degrees);
    }

    pub fn rotate_around_y_axis(&mut self, degrees: f64) {
        self.rotate(&Vector3::y_axis(), degrees);
    }

    pub fn rotate_around_z_axis(&mut self, degrees: f64) {
        self.rotate(&Vector3::z_axis(), degrees);
    }

    // New rotations apply after the ones already accumulated
    fn rotate(&mut self, axis: &nalgebra::Unit<Vector3>, degrees: f64) {
        self.rotation = Matrix4::from_axis_angle(axis, degrees.to_radians()) * self.rotation;
    }

    /// Applies one drag step in the current mode.
    pub fn drag(&mut self, action: OrbitAction, delta: &LookDelta) {
        let c = self.config;
        match action {
            OrbitAction::None => {}
            OrbitAction::Translating => {
                if delta.right {
                    self.add_to_x_translation(c.translation_increment);
                } else if delta.left {
                    self.add_to_x_translation(-c.translation_increment);
                }
                if delta.up {
                    self.add_to_y_translation(c.translation_increment);
                } else if delta.down {
                    self.add_to_y_translation(-c.translation_increment);
                }
            }
            OrbitAction::Scaling => {
                let factor = if delta.up {
                    c.scale_multiplier
                } else if delta.down {
                    1.0 / c.scale_multiplier
                } else {
                    return;
                };
                self.multiply_x_scale_by(factor);
                self.multiply_y_scale_by(factor);
                self.multiply_z_scale_by(factor);
            }
            OrbitAction::Rotating => {
                if delta.right {
                    self.rotate_around_y_axis(c.rotation_increment);
                } else if delta.left {
                    self.rotate_around_y_axis(-c.rotation_increment);
                }
                if delta.up {
                    self.rotate_around_x_axis(-c.rotation_increment);
                } else if delta.down {
                    self.rotate_around_x_axis(c.rotation_increment);
                }
            }
        }
    }

    /// `T · R · S`: scale first, then rotate, then translate.
    pub fn model_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.translation())
            * self.rotation
            * Matrix4::new_nonuniform_scaling(&self.scale())
    }
}

fn set_up(value: &mut Bounded<f64>, min: f64, max: f64, initial: f64) {
    value.set_min(min);
    value.set_max(max);
    value.set(initial);
}
