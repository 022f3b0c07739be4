//! Input state tracking
//!
//! The host feeds raw key and mouse events in; the world reads back a
//! [`MoveIntent`] per frame plus the accumulated look delta.

use std::collections::HashSet;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Movement and action requests for one frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MoveIntent: u8 {
        /// Walk along the camera's flattened forward
        const FORWARD = 1 << 0;
        /// Walk backwards
        const BACK = 1 << 1;
        /// Strafe left
        const LEFT = 1 << 2;
        /// Strafe right
        const RIGHT = 1 << 3;
        /// Jump if grounded
        const JUMP = 1 << 4;
        /// Fire the weapon
        const FIRE = 1 << 5;
    }
}

impl Default for MoveIntent {
    fn default() -> Self {
        Self::empty()
    }
}

impl MoveIntent {
    /// Planar wish vector in camera space: x is left, y is forward
    ///
    /// Opposing keys cancel. The result is not normalised.
    pub fn planar_axes(self) -> (f32, f32) {
        let axis = |pos: Self, neg: Self| {
            f32::from(u8::from(self.contains(pos))) - f32::from(u8::from(self.contains(neg)))
        };
        (axis(Self::LEFT, Self::RIGHT), axis(Self::FORWARD, Self::BACK))
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Key bindings and look sensitivity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Keys that walk forward
    pub forward: Vec<KeyCode>,
    /// Keys that walk backwards
    pub back: Vec<KeyCode>,
    /// Keys that strafe left
    pub left: Vec<KeyCode>,
    /// Keys that strafe right
    pub right: Vec<KeyCode>,
    /// Keys that jump
    pub jump: Vec<KeyCode>,
    /// Mouse button that fires
    pub fire: MouseButton,
    /// Radians of look rotation per pixel of mouse travel
    pub mouse_sensitivity: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::W, KeyCode::Up],
            back: vec![KeyCode::S, KeyCode::Down],
            left: vec![KeyCode::A, KeyCode::Left],
            right: vec![KeyCode::D, KeyCode::Right],
            jump: vec![KeyCode::Space],
            fire: MouseButton::Left,
            mouse_sensitivity: 0.002,
        }
    }
}

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    last_cursor: Option<(f64, f64)>,
    look_delta: (f64, f64),
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_down.insert(button);
        } else {
            self.buttons_down.remove(&button);
        }
    }

    /// Handle an absolute cursor position; the first sample only primes the tracker
    pub fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.look_delta.0 += x - last_x;
            self.look_delta.1 += y - last_y;
        }
        self.last_cursor = Some((x, y));
    }

    /// Handle raw relative motion (pointer lock)
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.look_delta.0 += dx;
        self.look_delta.1 += dy;
    }

    /// Drop all held state, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
        self.last_cursor = None;
        self.look_delta = (0.0, 0.0);
    }

    /// Whether `key` is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether `button` is currently held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Look delta accumulated since the last call, in pixels
    pub fn take_look_delta(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.look_delta)
    }

    /// Resolve held keys and buttons into this frame's intent
    pub fn intent(&self, controls: &ControlsConfig) -> MoveIntent {
        let any = |keys: &[KeyCode]| keys.iter().any(|key| self.is_key_down(*key));

        let mut intent = MoveIntent::empty();
        intent.set(MoveIntent::FORWARD, any(&controls.forward));
        intent.set(MoveIntent::BACK, any(&controls.back));
        intent.set(MoveIntent::LEFT, any(&controls.left));
        intent.set(MoveIntent::RIGHT, any(&controls.right));
        intent.set(MoveIntent::JUMP, any(&controls.jump));
        intent.set(MoveIntent::FIRE, self.is_button_down(controls.fire));
        intent
    }
}
