//! Rendering seam
//!
//! The engine does not draw anything itself. A backend receives the static
//! level once and then a borrowed snapshot of the dynamic state per frame.

use crate::combat::Projectile;
use crate::foundation::math::{Quat, Transform, Vec3};
use crate::level::Level;
use crate::physics::Player;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Everything that moves, as seen at the end of a frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Frame counter
    pub frame: u64,
    /// Camera eye
    pub camera_position: Vec3,
    /// Camera rotation
    pub camera_orientation: Quat,
    /// Gun placement
    pub weapon: Transform,
    /// Player body
    pub player: &'a Player,
    /// Bullets in flight
    pub projectiles: &'a [Projectile],
}

/// Main rendering backend trait
pub trait RenderBackend {
    /// Upload the static level geometry
    fn load_level(&mut self, level: &Level) -> BackendResult<()>;

    /// Draw one frame
    fn draw_frame(&mut self, view: &FrameView<'_>) -> BackendResult<()>;
}

/// Rendering errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// A backend operation failed
    ///
    /// Inside the frame loop these are logged and the loop keeps going.
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),
}
