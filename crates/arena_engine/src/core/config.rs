//! # Game Configuration
//!
//! Every tunable of the arena in one serde-backed tree. Each section has
//! sensible defaults so a partial file only needs to name what it changes.
//!
//! ## Sections
//!
//! - **player**: body dimensions, movement, gravity, collision response
//! - **projectile**: bullet speed, range, cooldown
//! - **weapon**: where the gun sits relative to the camera
//! - **controls**: key bindings and look sensitivity
//! - **engine**: frame clamping, pacing, logging
//! - **level**: floor, walls and platform layout

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{constants::HALF_PI, Vec3};
use crate::input::ControlsConfig;
use crate::level::arena::ArenaLayout;

pub use crate::config::{Config, ConfigError};

/// # Player Configuration
///
/// Body shape and the knobs of the movement resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Full body height
    pub height: f32,
    /// Horizontal half-width of the body box
    pub radius: f32,
    /// Walk speed in units per second
    pub speed: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Scale applied to the displacement on every slide retry
    pub slide_damping: f32,
    /// Slide retries before the move is rejected
    pub max_slide_attempts: u32,
    /// Ground probe length as a fraction of `height`
    pub ground_probe_factor: f32,
    /// Extra climb applied when walking up a ramp
    pub ramp_boost: f32,
    /// Falling below this height triggers a respawn
    pub kill_plane_y: f32,
    /// Where the body centre is put back after falling out
    pub respawn_point: Vec3,
    /// Initial body centre
    pub spawn_point: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
            speed: 50.0,
            jump_force: 10.0,
            gravity: 25.0,
            slide_damping: 0.3,
            max_slide_attempts: 3,
            ground_probe_factor: 0.6,
            ramp_boost: 0.1,
            kill_plane_y: -100.0,
            respawn_point: Vec3::new(0.0, 3.0, 0.0),
            spawn_point: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl PlayerConfig {
    /// Set walk speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the initial body centre
    pub fn with_spawn_point(mut self, spawn: Vec3) -> Self {
        self.spawn_point = spawn;
        self
    }

    /// Check the values describe a physical body
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.height", self.height)?;
        positive("player.radius", self.radius)?;
        positive("player.speed", self.speed)?;
        non_negative("player.jump_force", self.jump_force)?;
        non_negative("player.gravity", self.gravity)?;
        non_negative("player.ramp_boost", self.ramp_boost)?;
        if !(0.0..=1.0).contains(&self.slide_damping) {
            let reason = format!("{} is outside 0..=1", self.slide_damping);
            return invalid("player.slide_damping", reason);
        }
        if self.ground_probe_factor <= 0.5 {
            return invalid(
                "player.ground_probe_factor",
                format!("{} does not reach below the feet", self.ground_probe_factor),
            );
        }
        if self.respawn_point.y <= self.kill_plane_y {
            return invalid("player.respawn_point", "must lie above the kill plane".to_string());
        }
        Ok(())
    }
}

/// # Projectile Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Travel speed in units per second
    pub speed: f32,
    /// Distance from the muzzle after which a bullet is dropped
    pub max_distance: f32,
    /// Contact radius used against level bounds
    pub radius: f32,
    /// Minimum time between shots, in milliseconds
    pub cooldown_ms: u64,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 120.0,
            max_distance: 100.0,
            radius: 0.05,
            cooldown_ms: 500,
        }
    }
}

impl ProjectileConfig {
    /// Cooldown as a duration
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("projectile.speed", self.speed)?;
        positive("projectile.max_distance", self.max_distance)?;
        positive("projectile.radius", self.radius)
    }
}

/// # Weapon Configuration
///
/// The gun hangs off the camera: `mount_offset` is in camera space,
/// `barrel_offset` in the weapon's own space after `orientation`
/// (Euler angles about x, y, z in radians).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Weapon origin relative to the camera
    pub mount_offset: Vec3,
    /// Weapon orientation relative to the camera
    pub orientation: [f32; 3],
    /// Muzzle relative to the weapon origin
    pub barrel_offset: Vec3,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            mount_offset: Vec3::new(0.0, -0.4, -1.0),
            // Barrel modelled along local y, tipped forward
            orientation: [HALF_PI, 0.0, 0.0],
            barrel_offset: Vec3::new(0.0, -0.3, 0.0),
        }
    }
}

/// # Engine Configuration
///
/// Frame loop behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Upper bound on the per-frame delta, in seconds
    pub max_frame_delta: f32,
    /// Use a constant delta instead of wall-clock time
    pub fixed_delta: Option<f32>,
    /// Target FPS for frame rate limiting
    pub target_fps: Option<u32>,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            max_frame_delta: 0.1,
            fixed_delta: None,
            target_fps: None,
            max_frames: None,
        }
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("engine.max_frame_delta", self.max_frame_delta)?;
        if let Some(delta) = self.fixed_delta {
            positive("engine.fixed_delta", delta)?;
        }
        if self.target_fps == Some(0) {
            return invalid("engine.target_fps", "must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Game Configuration
///
/// Top-level configuration loaded by the demo binary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player body and movement
    pub player: PlayerConfig,
    /// Bullets
    pub projectile: ProjectileConfig,
    /// Gun placement
    pub weapon: WeaponConfig,
    /// Bindings
    pub controls: ControlsConfig,
    /// Frame loop
    pub engine: EngineConfig,
    /// Arena layout
    pub level: ArenaLayout,
}

impl GameConfig {
    /// Validate the entire configuration
    ///
    /// Level geometry is checked when the arena is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.projectile.validate()?;
        self.engine.validate()?;
        positive("controls.mouse_sensitivity", self.controls.mouse_sensitivity)
    }
}

impl Config for GameConfig {}

fn invalid(field: &'static str, reason: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid { field, reason })
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(field, format!("{value} must be positive"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        invalid(field, format!("{value} must not be negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [player]
            speed = 12.0

            [engine]
            max_frames = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.player.speed, 12.0);
        assert_eq!(config.player.height, 2.0);
        assert_eq!(config.engine.max_frames, Some(30));
        assert_eq!(config.projectile.cooldown(), Duration::from_millis(500));
        assert_eq!(config.level.platforms.len(), 4);
    }

    #[test]
    fn test_toml_roundtrip_preserves_layout() {
        let config = GameConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = GameConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let back: GameConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.player, config.player);
    }

    #[test]
    fn test_non_physical_values_rejected() {
        let mut config = GameConfig::default();
        config.player.height = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "player.height", .. })
        ));

        let mut config = GameConfig::default();
        config.player.slide_damping = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.engine.target_fps = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/config/arena.toml");
        let config = GameConfig::load_from_file(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.weapon, WeaponConfig::default());
        assert_eq!(config.controls, ControlsConfig::default());
        assert_eq!(config.level, ArenaLayout::default());
        assert_eq!(config.engine.max_frames, Some(600));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = GameConfig::default().save_to_file("arena.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
