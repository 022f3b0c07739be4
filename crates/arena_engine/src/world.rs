//! Game state and the per-frame update
//!
//! All mutable state lives here and only [`World::tick`] changes it.

use std::time::Instant;

use crate::camera::LookController;
use crate::combat::{ProjectileEvent, ProjectileSystem, Weapon};
use crate::core::config::GameConfig;
use crate::foundation::math::{Quat, Vec3};
use crate::input::MoveIntent;
use crate::level::{build_arena, Level, LevelError};
use crate::physics::{CharacterController, Player, StepReport};
use crate::render::FrameView;

/// Outcome of one [`World::tick`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Player movement, `None` while input is inactive
    pub step: Option<StepReport>,
    /// A bullet was spawned
    pub fired: bool,
    /// Bullets removed this frame
    pub projectile_events: Vec<ProjectileEvent>,
}

/// Level, player and bullets
#[derive(Debug)]
pub struct World {
    level: Level,
    player: Player,
    controller: CharacterController,
    projectiles: ProjectileSystem,
    weapon: Weapon,
}

impl World {
    /// Build the configured arena and spawn the player
    pub fn new(config: &GameConfig) -> Result<Self, LevelError> {
        let level = build_arena(&config.level)?;
        Ok(Self::with_level(level, config))
    }

    /// Use an already built level
    pub fn with_level(level: Level, config: &GameConfig) -> Self {
        Self {
            level,
            player: Player::new(&config.player),
            controller: CharacterController::new(config.player.clone()),
            projectiles: ProjectileSystem::new(config.projectile.clone()),
            weapon: Weapon::new(&config.weapon),
        }
    }

    /// Advance one frame
    ///
    /// The player only moves and shoots while `look` is active; bullets
    /// already in flight keep going regardless.
    pub fn tick(
        &mut self,
        dt: f32,
        intent: MoveIntent,
        look: &dyn LookController,
        now: Instant,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        if look.is_active() {
            let forward = look.forward();
            let step = self.controller.step(&mut self.player, intent, forward, dt, &self.level);
            report.step = Some(step);

            if intent.contains(MoveIntent::FIRE) {
                let muzzle = self.weapon.muzzle_position(self.player.position, look.orientation());
                report.fired = self.projectiles.fire(now, muzzle, forward);
            }
        }

        report.projectile_events = self.projectiles.update(dt, &self.level);
        for event in &report.projectile_events {
            log::trace!("{event:?}");
        }
        report
    }

    /// Snapshot for the renderer
    pub fn view(
        &self,
        frame: u64,
        camera_position: Vec3,
        camera_orientation: Quat,
    ) -> FrameView<'_> {
        FrameView {
            frame,
            camera_position,
            camera_orientation,
            weapon: self.weapon.world_transform(camera_position, camera_orientation),
            player: &self.player,
            projectiles: self.projectiles.projectiles(),
        }
    }

    /// Static geometry
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Player state
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player state, e.g. for teleporting
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Bullets in flight
    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }
}
