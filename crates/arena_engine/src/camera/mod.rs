//! First-person look control
//!
//! Mouse deltas drive yaw and pitch. Movement only runs while the pointer
//! is captured; hosts that cannot capture it get a free orbit camera
//! instead and the player stays put.

use crate::foundation::math::{constants::HALF_PI, Quat, Vec3};

/// Keeps the view from flipping over the poles
const PITCH_LIMIT: f32 = HALF_PI - 0.01;

/// Distance of the orbit camera from its target
const ORBIT_DISTANCE: f32 = 10.0;

/// Host facility for capturing the mouse pointer
pub trait PointerLockHost {
    /// Whether the host can capture the pointer at all
    fn supports_pointer_lock(&self) -> bool;

    /// Ask for capture; returns whether it was granted
    fn request_pointer_lock(&mut self) -> bool;
}

/// What the world needs from the camera each frame
pub trait LookController {
    /// Whether gameplay input should be applied
    fn is_active(&self) -> bool;

    /// Unit view direction
    fn forward(&self) -> Vec3;

    /// View rotation
    fn orientation(&self) -> Quat;
}

/// How the look controller is currently driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookMode {
    /// Pointer captured, mouse turns the player's head
    PointerLock,
    /// No capture available, mouse orbits a target
    Orbit,
}

/// Yaw/pitch camera anchored at the player
#[derive(Debug, Clone)]
pub struct FirstPersonLook {
    yaw: f32,
    pitch: f32,
    sensitivity: f32,
    mode: LookMode,
    locked: bool,
    anchor: Vec3,
}

impl FirstPersonLook {
    /// Create an unlocked controller looking down -z
    pub fn new(sensitivity: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity,
            mode: LookMode::PointerLock,
            locked: false,
            anchor: Vec3::zeros(),
        }
    }

    /// Try to capture the pointer, falling back to orbit mode
    pub fn engage(&mut self, host: &mut dyn PointerLockHost) -> LookMode {
        if !host.supports_pointer_lock() {
            if self.mode != LookMode::Orbit {
                log::warn!("Pointer lock not supported, falling back to orbit camera");
            }
            self.mode = LookMode::Orbit;
            self.locked = false;
            return self.mode;
        }

        self.mode = LookMode::PointerLock;
        self.locked = host.request_pointer_lock();
        if self.locked {
            log::info!("Pointer locked");
        } else {
            log::debug!("Pointer lock request refused");
        }
        self.mode
    }

    /// The host reported the pointer was released (Escape, focus loss)
    pub fn release(&mut self) {
        if self.locked {
            log::info!("Pointer unlocked");
        }
        self.locked = false;
    }

    /// Apply a mouse delta in pixels
    pub fn apply_mouse_delta(&mut self, dx: f64, dy: f64) {
        if self.mode == LookMode::PointerLock && !self.locked {
            return;
        }
        self.yaw -= dx as f32 * self.sensitivity;
        self.pitch = (self.pitch - dy as f32 * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the anchor, normally to the player's body centre
    pub fn set_anchor(&mut self, anchor: Vec3) {
        self.anchor = anchor;
    }

    /// Where the view is rendered from
    pub fn eye_position(&self) -> Vec3 {
        match self.mode {
            LookMode::PointerLock => self.anchor,
            LookMode::Orbit => self.anchor - self.forward() * ORBIT_DISTANCE,
        }
    }

    /// Current mode
    pub fn mode(&self) -> LookMode {
        self.mode
    }

    /// Heading about +y, radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Elevation, radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

impl LookController for FirstPersonLook {
    fn is_active(&self) -> bool {
        self.mode == LookMode::PointerLock && self.locked
    }

    fn forward(&self) -> Vec3 {
        self.orientation() * -Vec3::z()
    }

    fn orientation(&self) -> Quat {
        Quat::from_axis_angle(&Vec3::y_axis(), self.yaw)
            * Quat::from_axis_angle(&Vec3::x_axis(), self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Host {
        supported: bool,
        grant: bool,
    }

    impl PointerLockHost for Host {
        fn supports_pointer_lock(&self) -> bool {
            self.supported
        }

        fn request_pointer_lock(&mut self) -> bool {
            self.grant
        }
    }

    fn locked() -> FirstPersonLook {
        let mut look = FirstPersonLook::new(0.01);
        look.engage(&mut Host { supported: true, grant: true });
        look
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let look = FirstPersonLook::new(0.002);
        assert_relative_eq!(look.forward(), -Vec3::z());
        assert!(!look.is_active());
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut look = locked();
        look.apply_mouse_delta(50.0, 0.0);
        let forward = look.forward();
        assert!(forward.x > 0.0);
        assert_relative_eq!(forward.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut look = locked();
        look.apply_mouse_delta(0.0, -100_000.0);
        assert_relative_eq!(look.pitch(), PITCH_LIMIT);
        assert!(look.forward().y > 0.99);
    }

    #[test]
    fn test_unsupported_lock_falls_back_to_orbit() {
        let mut look = FirstPersonLook::new(0.01);
        let mode = look.engage(&mut Host { supported: false, grant: false });
        assert_eq!(mode, LookMode::Orbit);
        assert!(!look.is_active());

        // Orbit still turns the view
        look.apply_mouse_delta(10.0, 0.0);
        assert!(look.yaw() < 0.0);
        look.set_anchor(Vec3::new(0.0, 1.0, 0.0));
        let offset = look.eye_position() - Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(offset.norm(), ORBIT_DISTANCE, epsilon = 1e-4);
    }

    #[test]
    fn test_release_deactivates_and_ignores_mouse() {
        let mut look = locked();
        assert!(look.is_active());
        look.release();
        assert!(!look.is_active());
        look.apply_mouse_delta(100.0, 100.0);
        assert_eq!(look.yaw(), 0.0);
    }
}
