//! # Arena Engine
//!
//! Core of a first-person arena: procedural stair platforms, a box-based
//! character controller with slide, ramps and fall-out recovery, rate
//! limited projectiles, and a single-threaded frame loop. Drawing and
//! windowing stay outside behind [`render::RenderBackend`] and the
//! [`Application`] trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arena_engine::prelude::*;
//!
//! struct NoRender;
//!
//! impl RenderBackend for NoRender {
//!     fn load_level(&mut self, _level: &Level) -> BackendResult<()> {
//!         Ok(())
//!     }
//!
//!     fn draw_frame(&mut self, _view: &FrameView<'_>) -> BackendResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = GameConfig::default();
//!     config.engine.max_frames = Some(600);
//!     Engine::run(&config, Box::new(NoRender), &mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod camera;
pub mod combat;
pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
pub mod world;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        camera::{FirstPersonLook, LookController, LookMode, PointerLockHost},
        combat::{ProjectileEvent, ProjectileSystem, Weapon},
        core::config::{Config, EngineConfig, GameConfig, PlayerConfig},
        foundation::math::{Quat, Transform, Vec3},
        input::{InputManager, KeyCode, MouseButton, MoveIntent},
        level::{build_arena, build_platform, Level, LevelError, PlatformParams},
        physics::{CharacterController, Collidable, Player, SurfaceKind},
        render::{BackendResult, FrameView, RenderBackend, RenderError},
        world::{FrameReport, World},
        AppError, AppEvent, Application, Engine, EngineError,
    };
}
