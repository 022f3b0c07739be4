//! Shooting: the camera-mounted weapon and the bullets it fires

pub mod projectile;
pub mod weapon;

pub use projectile::{Projectile, ProjectileEvent, ProjectileSystem};
pub use weapon::Weapon;
