//! Headless arena demo
//!
//! Loads the game configuration, builds the arena and lets a scripted pilot
//! walk, look around, jump and shoot for a fixed number of frames. Frames
//! are "rendered" to the log.

use arena_engine::foundation::logging;
use arena_engine::prelude::*;
use arena_engine::config::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_CONFIG: &str = "resources/config/arena.toml";
const DEFAULT_FRAMES: u64 = 600;
const PILOT_SEED: u64 = 0x00A7_E4A5;

/// Demo failures
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("engine: {0}")]
    Engine(#[from] EngineError),
}

/// Renderer that only reports what it would draw
struct LogRenderer;

impl RenderBackend for LogRenderer {
    fn load_level(&mut self, level: &Level) -> BackendResult<()> {
        let visible = level.iter().filter(|(_, piece)| piece.visible).count();
        log::info!("Loaded level: {} pieces, {visible} visible", level.len());
        if let Some(extent) = level.extent() {
            log::info!("Level extent {:?} .. {:?}", extent.min, extent.max);
        }
        Ok(())
    }

    fn draw_frame(&mut self, view: &FrameView<'_>) -> BackendResult<()> {
        if view.frame % 60 == 0 {
            log::info!(
                "frame {}: player at ({:.2}, {:.2}, {:.2}) grounded={} bullets={}",
                view.frame,
                view.player.position.x,
                view.player.position.y,
                view.player.position.z,
                view.player.on_ground,
                view.projectiles.len()
            );
        }
        Ok(())
    }
}

/// Pretends to be a window that grants pointer capture
struct HeadlessHost;

impl PointerLockHost for HeadlessHost {
    fn supports_pointer_lock(&self) -> bool {
        true
    }

    fn request_pointer_lock(&mut self) -> bool {
        true
    }
}

/// Scripted player: walks forward, wanders, jumps and shoots
struct Pilot {
    rng: StdRng,
    strafe: Option<KeyCode>,
    hits: usize,
    respawns: usize,
}

impl Pilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            strafe: None,
            hits: 0,
            respawns: 0,
        }
    }

    fn key(&mut self, engine: &mut Engine, key: KeyCode, pressed: bool) -> Result<(), AppError> {
        self.handle_event(engine, AppEvent::KeyInput { key, pressed })
    }
}

impl Application for Pilot {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let mode = engine.engage_look(&mut HeadlessHost);
        log::info!("Look mode: {mode:?}");
        self.key(engine, KeyCode::W, true)
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        let report = engine.last_report().clone();
        self.hits += report
            .projectile_events
            .iter()
            .filter(|event| matches!(event, ProjectileEvent::Hit { .. }))
            .count();
        if report.step.is_some_and(|step| step.respawned) {
            self.respawns += 1;
        }

        let frame = engine.frame_count();

        if frame % 90 == 0 {
            if let Some(old) = self.strafe.take() {
                self.key(engine, old, false)?;
            }
            self.strafe = match self.rng.gen_range(0..3) {
                0 => Some(KeyCode::A),
                1 => Some(KeyCode::D),
                _ => None,
            };
            if let Some(new) = self.strafe {
                self.key(engine, new, true)?;
            }
        }

        let dx = self.rng.gen_range(-4.0..4.0);
        let dy = self.rng.gen_range(-1.0..1.0);
        self.handle_event(engine, AppEvent::MouseMotion { dx, dy })?;

        let jump = self.rng.gen_bool(0.02);
        self.key(engine, KeyCode::Space, jump)?;

        let fire = frame % 45 == 0;
        let button = MouseButton::Left;
        self.handle_event(engine, AppEvent::MouseButton { button, pressed: fire })
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        let player = engine.world().player();
        log::info!(
            "Pilot finished after {} frames at {:?}: {} hits, {} respawns, {} bullets in flight",
            engine.frame_count(),
            player.position,
            self.hits,
            self.respawns,
            engine.world().projectiles().len()
        );
    }
}

fn load_config() -> (GameConfig, Option<ConfigError>) {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    match GameConfig::load_from_file(&path) {
        Ok(config) => (config, None),
        Err(err) => (GameConfig::default(), Some(err)),
    }
}

fn run() -> Result<(), DemoError> {
    let (mut config, load_error) = load_config();
    logging::init(&config.engine.log_level);
    if let Some(err) = load_error {
        log::warn!("Using built-in defaults, config not loaded: {err}");
    }
    config.validate()?;

    // Headless: no vsync to pace against, so step at a fixed rate
    config.engine.fixed_delta = config.engine.fixed_delta.or(Some(1.0 / 60.0));
    config.engine.max_frames = config.engine.max_frames.or(Some(DEFAULT_FRAMES));

    log::info!("Starting arena demo");
    let mut pilot = Pilot::new(PILOT_SEED);
    Engine::run(&config, Box::new(LogRenderer), &mut pilot)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("arena_demo: {err}");
        std::process::exit(1);
    }
}
