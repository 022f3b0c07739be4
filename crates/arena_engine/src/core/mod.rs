//! # Core Module
//!
//! Shared configuration types used across the engine.

pub mod config;

// Re-export commonly used config types
pub use config::{
    Config, ConfigError, EngineConfig, GameConfig, PlayerConfig, ProjectileConfig, WeaponConfig,
};
