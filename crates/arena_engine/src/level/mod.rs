//! Static level geometry
//!
//! The level is an append-only registry of [`Collidable`]s. World bounds
//! are computed once at insertion; pieces whose bounds cannot be computed
//! stay registered (the renderer may still want them) but are left out of
//! every collision query.

pub mod arena;
pub mod platform;

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::collider::{Collidable, SurfaceKind};
use crate::physics::collision::{Aabb, GeometryError, Ray, RayHit};

pub use arena::build_arena;
pub use platform::{build_platform, Platform, PlatformParams, RampStyle};

new_key_type! {
    /// Stable handle to a registered collidable
    pub struct ColliderKey;
}

/// Level construction errors
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// Platform parameters cannot produce sensible geometry
    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    /// Arena layout parameters are unusable
    #[error("Invalid arena: {0}")]
    InvalidArena(String),
}

#[derive(Debug, Clone)]
struct Entry {
    collidable: Collidable,
    bounds: Result<Aabb, GeometryError>,
}

/// Append-only set of static collidables
#[derive(Debug, Default)]
pub struct Level {
    entries: SlotMap<ColliderKey, Entry>,
}

impl Level {
    /// Create an empty level
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collidable
    pub fn add(&mut self, collidable: Collidable) -> ColliderKey {
        let bounds = collidable.world_aabb();
        let kind = collidable.kind;
        let key = self.entries.insert(Entry { collidable, bounds });
        if let Err(err) = bounds {
            log::warn!("Collidable {key:?} ({kind:?}) skipped for collision: {err}");
        }
        key
    }

    /// Register every piece of a platform
    pub fn add_platform(&mut self, platform: Platform) -> Vec<ColliderKey> {
        platform.into_pieces().map(|piece| self.add(piece)).collect()
    }

    /// Number of registered collidables (including ones without bounds)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a collidable
    pub fn get(&self, key: ColliderKey) -> Option<&Collidable> {
        self.entries.get(key).map(|entry| &entry.collidable)
    }

    /// Cached world bounds of a collidable, if computable
    pub fn bounds(&self, key: ColliderKey) -> Option<Aabb> {
        self.entries.get(key).and_then(|entry| entry.bounds.ok())
    }

    /// Every registered collidable, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ColliderKey, &Collidable)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.collidable))
    }

    /// Collidables that take part in collision tests, with their bounds
    pub fn solids(&self) -> impl Iterator<Item = (ColliderKey, &Collidable, Aabb)> {
        self.entries.iter().filter_map(|(key, entry)| match entry.bounds {
            Ok(aabb) => Some((key, &entry.collidable, aabb)),
            Err(_) => {
                log::trace!("Skipping {key:?}: no bounds");
                None
            }
        })
    }

    /// Bounds of every registered piece merged together
    pub fn extent(&self) -> Option<Aabb> {
        self.solids().map(|(_, _, aabb)| aabb).reduce(|a, b| a.union(&b))
    }

    /// Nearest hit along `ray` within `max_distance` among collidables of `kinds`
    pub fn raycast(&self, ray: &Ray, max_distance: f32, kinds: &[SurfaceKind]) -> Option<RayHit> {
        self.solids()
            .filter(|(_, collidable, _)| kinds.contains(&collidable.kind))
            .filter_map(|(key, collidable, aabb)| {
                let (distance, normal) = collidable.shape.intersect_ray(ray, &aabb)?;
                (distance <= max_distance).then(|| RayHit {
                    collider: key,
                    distance,
                    point: ray.point_at(distance),
                    normal,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// First collidable whose bounds lie within `radius` of `point`
    pub fn point_contact(&self, point: Vec3, radius: f32) -> Option<ColliderKey> {
        self.solids()
            .find(|(_, _, aabb)| aabb.distance_to_point(point) < radius)
            .map(|(key, _, _)| key)
    }
}
