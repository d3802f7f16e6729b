use serde::{Deserialize, Serialize};

/// Keyboard actions understood while walking through a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    ZoomIn,
    ZoomOut,
    Jump,
}

impl Key {
    /// Default bindings: `w a s d` to move, space to jump, `c`/`r` to zoom.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Key::Forward),
            's' => Some(Key::Backward),
            'a' => Some(Key::StrafeLeft),
            'd' => Some(Key::StrafeRight),
            'c' => Some(Key::ZoomIn),
            'r' => Some(Key::ZoomOut),
            ' ' => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Which way the pointer went since the last sample.
///
/// Screen `y` grows downwards, so a smaller `y` means the pointer moved up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookDelta {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl LookDelta {
    pub fn from_mouse(last: (i32, i32), current: (i32, i32)) -> Self {
        Self {
            left: last.0 > current.0,
            right: last.0 < current.0,
            up: last.1 > current.1,
            down: last.1 < current.1,
        }
    }

    pub fn is_still(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Held keys and pointer position while exploring in first person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirstPersonInput {
    pub moving_forward: bool,
    pub moving_backward: bool,
    pub strafing_left: bool,
    pub strafing_right: bool,
    /// Zoom is a projection change, so these are passed through to the renderer.
    pub zooming_in: bool,
    pub zooming_out: bool,
    last_mouse_position: (i32, i32),
}

impl FirstPersonInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press or release. [`Key::Jump`] is an impulse, not a
    /// held state, and is left to the caller.
    pub fn apply_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Forward => self.moving_forward = pressed,
            Key::Backward => self.moving_backward = pressed,
            Key::StrafeLeft => self.strafing_left = pressed,
            Key::StrafeRight => self.strafing_right = pressed,
            Key::ZoomIn => self.zooming_in = pressed,
            Key::ZoomOut => self.zooming_out = pressed,
            Key::Jump => {}
        }
    }

    /// -1 zooming out, 1 zooming in, 0 when neither or both are held.
    pub fn zoom_direction(&self) -> i8 {
        self.zooming_in as i8 - self.zooming_out as i8
    }

    pub fn last_mouse_position(&self) -> (i32, i32) {
        self.last_mouse_position
    }

    pub fn set_last_mouse_position(&mut self, x: i32, y: i32) {
        self.last_mouse_position = (x, y);
    }

    pub fn mouse_moved_left(&self, current_x: i32) -> bool {
        self.last_mouse_position.0 > current_x
    }

    pub fn mouse_moved_right(&self, current_x: i32) -> bool {
        self.last_mouse_position.0 < current_x
    }

    pub fn mouse_moved_up(&self, current_y: i32) -> bool {
        self.last_mouse_position.1 > current_y
    }

    pub fn mouse_moved_down(&self, current_y: i32) -> bool {
        self.last_mouse_position.1 < current_y
    }

    /// Direction of travel since the last sample; the new position becomes
    /// the reference for the next one.
    pub fn track_mouse(&mut self, x: i32, y: i32) -> LookDelta {
        let delta = LookDelta::from_mouse(self.last_mouse_position, (x, y));
        self.set_last_mouse_position(x, y);
        delta
    }
}
