//! Arena layout: floor, perimeter walls and platforms

use serde::{Deserialize, Serialize};

use super::platform::{build_platform, PlatformParams, RampStyle};
use super::{Level, LevelError};
use crate::foundation::math::{constants::PI, Vec3};
use crate::physics::collider::{Collidable, Color, SurfaceKind};

/// Thickness of the floor slab below y = 0
const FLOOR_THICKNESS: f32 = 1.0;

/// Data-driven arena description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaLayout {
    /// Edge length of the square floor
    pub floor_size: f32,
    /// Floor colour
    pub floor_color: Color,
    /// Height of the perimeter walls
    pub wall_height: f32,
    /// Thickness of the perimeter walls
    pub wall_thickness: f32,
    /// Perimeter wall colour
    pub wall_color: Color,
    /// Platforms placed on the floor
    pub platforms: Vec<PlatformParams>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        fn platform(
            front_size: f32,
            height: f32,
            origin: Vec3,
            step_count: u32,
            color: u32,
        ) -> PlatformParams {
            PlatformParams {
                side_size: 100.0,
                front_size,
                height,
                origin,
                step_size: 15.0,
                step_count,
                step_depth: 0.5,
                color: Color(color),
                ramp: Some(RampStyle::Prism),
                yaw: 0.0,
            }
        }

        let mut far = platform(320.0, 8.0, Vec3::new(10.0, 0.0, -150.0), 25, 0xB9D7A9);
        far.yaw = PI;

        Self {
            floor_size: 500.0,
            floor_color: Color::FLOOR,
            wall_height: 40.0,
            wall_thickness: 5.0,
            wall_color: Color::WALL,
            platforms: vec![
                platform(120.0, 4.0, Vec3::new(160.0, 0.0, 150.0), 15, 0x7FFFD4),
                platform(120.0, 4.0, Vec3::new(10.0, 0.0, 150.0), 15, 0xE1A4A0),
                platform(120.0, 4.0, Vec3::new(-150.0, 0.0, 150.0), 15, 0xC3D3F1),
                far,
            ],
        }
    }
}

/// Build the full arena level
pub fn build_arena(layout: &ArenaLayout) -> Result<Level, LevelError> {
    if !(layout.floor_size > 0.0 && layout.wall_height > 0.0 && layout.wall_thickness > 0.0) {
        return Err(LevelError::InvalidArena(format!(
            "floor {} / wall height {} / wall thickness {} must all be positive",
            layout.floor_size, layout.wall_height, layout.wall_thickness
        )));
    }

    let mut level = Level::new();

    level.add(Collidable::cuboid(
        SurfaceKind::Ground,
        Vec3::new(0.0, -FLOOR_THICKNESS / 2.0, 0.0),
        Vec3::new(layout.floor_size, FLOOR_THICKNESS, layout.floor_size),
        layout.floor_color,
    ));

    let half = layout.floor_size / 2.0;
    let (h, t) = (layout.wall_height, layout.wall_thickness);
    let offset = half + t / 2.0;
    let walls = [
        (Vec3::new(0.0, h / 2.0, offset), Vec3::new(layout.floor_size + 2.0 * t, h, t)),
        (Vec3::new(0.0, h / 2.0, -offset), Vec3::new(layout.floor_size + 2.0 * t, h, t)),
        (Vec3::new(-offset, h / 2.0, 0.0), Vec3::new(t, h, layout.floor_size)),
        (Vec3::new(offset, h / 2.0, 0.0), Vec3::new(t, h, layout.floor_size)),
    ];
    for (center, size) in walls {
        level.add(Collidable::cuboid(SurfaceKind::Wall, center, size, layout.wall_color));
    }

    for params in &layout.platforms {
        let platform = build_platform(params)?;
        level.add_platform(platform);
    }

    log::info!(
        "Arena built: {} collidables, {} platforms",
        level.len(),
        layout.platforms.len()
    );
    Ok(level)
}
