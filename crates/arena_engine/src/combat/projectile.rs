//! Bullets: rate-limited spawning, straight-line travel, culling
//!
//! Contact is a point-versus-box test against each collidable's bounds,
//! done once per frame after moving. Fast bullets can skip over thin
//! geometry; that is accepted.

use std::time::Instant;

use crate::core::config::ProjectileConfig;
use crate::foundation::math::Vec3;
use crate::foundation::time::Cooldown;
use crate::level::{ColliderKey, Level};

/// One bullet in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Current position
    pub position: Vec3,
    /// Unit travel direction
    pub direction: Vec3,
    /// Where it left the muzzle
    pub spawn: Vec3,
}

impl Projectile {
    /// Straight-line distance from the muzzle
    pub fn traveled(&self) -> f32 {
        (self.position - self.spawn).norm()
    }
}

/// Why a projectile was removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileEvent {
    /// Flew past its range
    Expired {
        /// Last position
        position: Vec3,
    },
    /// Touched level geometry
    Hit {
        /// What it touched
        collider: ColliderKey,
        /// Where
        position: Vec3,
    },
}

/// Owns every live projectile and the fire cooldown
#[derive(Debug, Clone)]
pub struct ProjectileSystem {
    config: ProjectileConfig,
    cooldown: Cooldown,
    live: Vec<Projectile>,
}

impl ProjectileSystem {
    /// Create an empty system
    pub fn new(config: ProjectileConfig) -> Self {
        let cooldown = Cooldown::new(config.cooldown());
        Self {
            config,
            cooldown,
            live: Vec::new(),
        }
    }

    /// Spawn a bullet at `muzzle` heading along `forward`
    ///
    /// Ignored while the cooldown runs or if `forward` has no length.
    pub fn fire(&mut self, now: Instant, muzzle: Vec3, forward: Vec3) -> bool {
        let Some(direction) = forward.try_normalize(1.0e-6) else {
            log::warn!("Refusing to fire along degenerate direction {forward:?}");
            return false;
        };
        if !self.cooldown.try_trigger(now) {
            return false;
        }

        log::debug!("Fired from {muzzle:?} along {direction:?}");
        self.live.push(Projectile {
            position: muzzle,
            direction,
            spawn: muzzle,
        });
        true
    }

    /// Move every bullet and drop the ones out of range or touching geometry
    pub fn update(&mut self, dt: f32, level: &Level) -> Vec<ProjectileEvent> {
        let step = self.config.speed * dt;
        let mut removals = Vec::new();

        for (index, projectile) in self.live.iter_mut().enumerate() {
            projectile.position += projectile.direction * step;

            let position = projectile.position;
            if projectile.traveled() > self.config.max_distance {
                removals.push((index, ProjectileEvent::Expired { position }));
            } else if let Some(collider) = level.point_contact(position, self.config.radius) {
                removals.push((index, ProjectileEvent::Hit { collider, position }));
            }
        }

        // Highest index first so earlier indices stay valid
        for (index, _) in removals.iter().rev() {
            self.live.remove(*index);
        }
        removals.into_iter().map(|(_, event)| event).collect()
    }

    /// Bullets in flight, oldest first
    pub fn projectiles(&self) -> &[Projectile] {
        &self.live
    }

    /// Number of bullets in flight
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when nothing is in flight
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Drop every bullet in flight
    pub fn clear(&mut self) {
        self.live.clear();
    }
}
