//! Core engine implementation
//!
//! One cooperative loop: host events, look and intent, world tick, render.
//! Everything runs on the calling thread.

use std::time::{Duration, Instant};

use crate::{
    application::{AppError, AppEvent, Application},
    camera::{FirstPersonLook, LookController, LookMode, PointerLockHost},
    config::ConfigError,
    core::config::{EngineConfig, GameConfig},
    foundation::time::FrameClock,
    input::{ControlsConfig, InputManager, KeyCode},
    level::LevelError,
    render::{RenderBackend, RenderError},
    world::{FrameReport, World},
};
use thiserror::Error;

/// Main engine struct
///
/// Owns the world, input state, look controller, renderer and frame clock.
pub struct Engine {
    world: World,
    input: InputManager,
    look: FirstPersonLook,
    renderer: Box<dyn RenderBackend>,
    clock: FrameClock,
    config: EngineConfig,
    controls: ControlsConfig,
    last_report: FrameReport,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(
        config: &GameConfig,
        mut renderer: Box<dyn RenderBackend>,
    ) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        let world = World::new(config)?;
        renderer.load_level(world.level())?;

        let mut look = FirstPersonLook::new(config.controls.mouse_sensitivity);
        look.set_anchor(world.player().position);
        let clock = FrameClock::new(config.engine.max_frame_delta)
            .with_fixed_delta(config.engine.fixed_delta);

        Ok(Self {
            world,
            input: InputManager::new(),
            look,
            renderer,
            clock,
            config: config.engine.clone(),
            controls: config.controls.clone(),
            last_report: FrameReport::default(),
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: &GameConfig,
        renderer: Box<dyn RenderBackend>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, renderer)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        while engine.running {
            if engine
                .config
                .max_frames
                .is_some_and(|max| engine.clock.frame_count() >= max)
            {
                log::info!("Frame limit reached");
                break;
            }
            engine.frame(app);
        }

        app.cleanup(&mut engine);
        log::info!("Engine shutdown complete after {} frames", engine.clock.frame_count());
        Ok(())
    }

    /// Run one iteration of the loop
    fn frame<T: Application>(&mut self, app: &mut T) {
        let started = Instant::now();
        let delta_time = self.clock.tick();

        if let Err(e) = app.update(self, delta_time) {
            log::error!("App update failed: {e}");
        }

        let (dx, dy) = self.input.take_look_delta();
        self.look.apply_mouse_delta(dx, dy);
        let intent = self.input.intent(&self.controls);

        self.last_report = self.world.tick(delta_time, intent, &self.look, Instant::now());
        self.look.set_anchor(self.world.player().position);

        if let Err(e) = app.render(self) {
            log::error!("Render failed: {e}");
        }

        if let Some(fps) = self.config.target_fps {
            let budget = Duration::from_secs_f64(1.0 / f64::from(fps));
            if let Some(remaining) = budget.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    /// Draw the current state through the backend
    pub fn render(&mut self) -> Result<(), AppError> {
        let view = self.world.view(
            self.clock.frame_count(),
            self.look.eye_position(),
            self.look.orientation(),
        );
        self.renderer.draw_frame(&view).map_err(AppError::from)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::WindowCloseRequested => self.quit(),
            AppEvent::WindowFocused => {}
            AppEvent::WindowUnfocused => {
                self.input.release_all();
                self.look.release();
            }
            AppEvent::KeyInput { key, pressed } => {
                if key == KeyCode::Escape && pressed {
                    self.look.release();
                }
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::MouseButton { button, pressed } => {
                self.input.handle_mouse_button(button, pressed);
            }
            AppEvent::MouseMoved { x, y } => self.input.handle_mouse_move(x, y),
            AppEvent::MouseMotion { dx, dy } => self.input.handle_mouse_motion(dx, dy),
            AppEvent::PointerLockLost => self.look.release(),
        }
        Ok(())
    }

    /// Ask the host to capture the pointer
    pub fn engage_look(&mut self, host: &mut dyn PointerLockHost) -> LookMode {
        self.look.engage(host)
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Game state
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable game state
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Look controller
    pub fn look(&self) -> &FirstPersonLook {
        &self.look
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// What happened in the most recent frame
    pub fn last_report(&self) -> &FrameReport {
        &self.last_report
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Level could not be built
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering error outside the frame loop
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
