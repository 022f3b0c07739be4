//! Static collidable records
//!
//! Every piece of level geometry carries an explicit surface tag instead of
//! ad hoc flags on scene nodes.

use serde::{Deserialize, Serialize};

use super::collision::{Aabb, ColliderShape, Cuboid, GeometryError, RampSurface};
use crate::foundation::math::Vec3;

/// What kind of surface a collidable presents to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Floors and stair treads
    Ground,
    /// Inclined walkable surface, resolved by the ground probe
    Ramp,
    /// Perimeter and blocking walls
    Wall,
    /// Anything else solid
    Generic,
}

/// Packed 0xRRGGBB colour handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Neutral grey used for stair treads
    pub const STAIR: Self = Self(0xAAAAAA);
    /// Default wall colour
    pub const WALL: Self = Self(0x8B4513);
    /// Default floor colour
    pub const FLOOR: Self = Self(0xFFF1C1);

    /// Components scaled to 0..=1
    pub fn to_rgb_f32(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xFF) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(0xFFFFFF)
    }
}

/// One immutable piece of level geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Collidable {
    /// Surface tag driving resolution policy
    pub kind: SurfaceKind,
    /// Collision geometry
    pub shape: ColliderShape,
    /// Render colour
    pub color: Color,
    /// Whether the renderer should draw it (invisible ramp slabs are not)
    pub visible: bool,
}

impl Collidable {
    /// Axis-aligned solid box of full `size` centred at `center`
    pub fn cuboid(kind: SurfaceKind, center: Vec3, size: Vec3, color: Color) -> Self {
        Self {
            kind,
            shape: ColliderShape::Cuboid(Cuboid::new(center, size)),
            color,
            visible: true,
        }
    }

    /// Walkable incline
    pub fn ramp(surface: RampSurface, color: Color, visible: bool) -> Self {
        Self {
            kind: SurfaceKind::Ramp,
            shape: ColliderShape::Ramp(surface),
            color,
            visible,
        }
    }

    /// World-space bounds, or why they cannot be computed
    pub fn world_aabb(&self) -> Result<Aabb, GeometryError> {
        self.shape.world_aabb()
    }

    /// Ramps are walked over via the ground probe rather than pushed against
    pub fn blocks_movement(&self) -> bool {
        self.kind != SurfaceKind::Ramp
    }
}
