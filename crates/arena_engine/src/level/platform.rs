//! Procedural platform builder
//!
//! A platform is a solid block with a staircase cut into the middle of its
//! front face. Layout in platform space (origin at the centre of the
//! footprint on the floor, +z running from the front face to the back):
//!
//! ```text
//!        front_size (x)
//!   +-------+-----+-------+   z = +side/2
//!   |         rear        |
//!   +-------+-----+-------+   z = -side/2 + stair_depth
//!   | fill  |stair| fill  |
//!   +-------+-----+-------+   z = -side/2
//! ```

use serde::{Deserialize, Serialize};

use super::LevelError;
use crate::foundation::math::{constants::HALF_PI, Quat, Transform, Vec3};
use crate::physics::collider::{Collidable, Color, SurfaceKind};
use crate::physics::collision::{ColliderShape, Cuboid, RampSurface};

/// Thickness of the invisible slab variant of the ramp
const SLAB_THICKNESS: f32 = 0.1;

/// Allowed distance of `yaw` from a quarter turn, radians
const YAW_TOLERANCE: f32 = 1.0e-3;

/// How the optional ramp over the staircase is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampStyle {
    /// Invisible collidable slab lying on the stair envelope
    Slab,
    /// Visible triangular prism filling the stair envelope
    Prism,
}

/// Placement parameters for one platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformParams {
    /// Depth of the block along z
    pub side_size: f32,
    /// Width of the block along x
    pub front_size: f32,
    /// Height of the block and of the top stair
    pub height: f32,
    /// Footprint centre on the floor
    pub origin: Vec3,
    /// Width of the staircase
    pub step_size: f32,
    /// Number of stair segments (at least one)
    pub step_count: u32,
    /// Depth of a single stair segment
    pub step_depth: f32,
    /// Colour of the solid block
    pub color: Color,
    /// Optional ramp laid over the stairs
    #[serde(default)]
    pub ramp: Option<RampStyle>,
    /// Rotation about the vertical axis through `origin`, radians
    ///
    /// Must be a whole number of quarter turns: pieces collide through their
    /// world-aligned bounds.
    #[serde(default)]
    pub yaw: f32,
}

impl PlatformParams {
    /// Total depth covered by the staircase
    pub fn stair_depth(&self) -> f32 {
        self.step_count as f32 * self.step_depth
    }

    /// Rise of one stair segment
    pub fn step_height(&self) -> f32 {
        self.height / self.step_count as f32
    }

    /// Incline of the stair envelope, radians
    pub fn ramp_angle(&self) -> f32 {
        (self.height / self.stair_depth()).atan()
    }

    fn validate(&self) -> Result<(), LevelError> {
        let invalid = |reason: String| Err(LevelError::InvalidPlatform(reason));

        if self.step_count == 0 {
            return invalid("step_count must be at least 1".to_string());
        }
        for (name, value) in [
            ("side_size", self.side_size),
            ("front_size", self.front_size),
            ("height", self.height),
            ("step_size", self.step_size),
            ("step_depth", self.step_depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }
        if self.step_size > self.front_size {
            return invalid(format!(
                "stair width {} exceeds platform width {}",
                self.step_size, self.front_size
            ));
        }
        let quarter_turns = self.yaw / HALF_PI;
        let off_axis = (quarter_turns - quarter_turns.round()).abs() * HALF_PI;
        if !self.yaw.is_finite() || off_axis > YAW_TOLERANCE {
            return invalid(format!("yaw {} is not a multiple of a quarter turn", self.yaw));
        }
        if self.stair_depth() > self.side_size {
            return invalid(format!(
                "staircase depth {} exceeds platform depth {}",
                self.stair_depth(),
                self.side_size
            ));
        }
        Ok(())
    }
}

/// Collidable pieces of one platform, in world space
#[derive(Debug, Clone)]
pub struct Platform {
    /// Stair segments, lowest first
    pub steps: Vec<Collidable>,
    /// Side fills and rear block
    pub fill: Vec<Collidable>,
    /// Ramp over the staircase, if requested
    pub ramp: Option<Collidable>,
}

impl Platform {
    /// Every piece, in registration order
    pub fn into_pieces(self) -> impl Iterator<Item = Collidable> {
        self.steps.into_iter().chain(self.fill).chain(self.ramp)
    }

    /// Number of pieces
    pub fn piece_count(&self) -> usize {
        self.steps.len() + self.fill.len() + usize::from(self.ramp.is_some())
    }
}

/// Build a platform from its placement parameters
pub fn build_platform(params: &PlatformParams) -> Result<Platform, LevelError> {
    params.validate()?;

    let placement = Transform::from_position_rotation(
        params.origin,
        Quat::from_axis_angle(&Vec3::y_axis(), params.yaw),
    );
    let place = |kind: SurfaceKind, center: Vec3, size: Vec3, color: Color| {
        let local = Cuboid::new(center, size);
        Collidable {
            kind,
            shape: ColliderShape::Cuboid(Cuboid {
                half_extents: local.half_extents,
                transform: placement.combine(&local.transform),
            }),
            color,
            visible: true,
        }
    };

    let front_z = -params.side_size / 2.0;
    let step_height = params.step_height();
    let stair_depth = params.stair_depth();

    let steps = (0..params.step_count)
        .map(|i| {
            let rise = (i as f32 + 0.5) * step_height;
            let run = (i as f32 + 0.5) * params.step_depth;
            place(
                SurfaceKind::Ground,
                Vec3::new(0.0, rise, front_z + run),
                Vec3::new(params.step_size, step_height, params.step_depth),
                Color(0xFFFFFF),
            )
        })
        .collect::<Vec<_>>();

    // Staircase envelope centre, in platform space
    let stair_center = Vec3::new(0.0, params.height / 2.0, front_z + stair_depth / 2.0);

    let fill_width = (params.front_size - params.step_size) / 2.0;
    let mut fill = Vec::with_capacity(3);
    if fill_width > 0.0 {
        let offset = fill_width / 2.0 + params.step_size / 2.0;
        for side in [-1.0, 1.0] {
            fill.push(place(
                SurfaceKind::Generic,
                Vec3::new(stair_center.x + side * offset, params.height / 2.0, stair_center.z),
                Vec3::new(fill_width, params.height, stair_depth),
                params.color,
            ));
        }
    }

    let rear_depth = params.side_size - stair_depth;
    if rear_depth > 0.0 {
        let rear_z = front_z + stair_depth + rear_depth / 2.0;
        fill.push(place(
            SurfaceKind::Generic,
            Vec3::new(stair_center.x, params.height / 2.0, rear_z),
            Vec3::new(params.front_size, params.height, rear_depth),
            params.color,
        ));
    }

    let ramp = params.ramp.map(|style| {
        let half_width = params.step_size / 2.0;
        let crest_z = front_z + stair_depth;
        let (thickness, visible) = match style {
            RampStyle::Slab => (SLAB_THICKNESS, false),
            RampStyle::Prism => (0.0, true),
        };
        let surface = RampSurface::from_corners(
            Vec3::new(-half_width, 0.0, front_z),
            Vec3::new(half_width, 0.0, front_z),
            Vec3::new(-half_width, params.height, crest_z),
            Vec3::new(half_width, params.height, crest_z),
            thickness,
        )
        .transformed(&placement);
        Collidable::ramp(surface, Color::STAIR, visible)
    });

    log::debug!(
        "Built platform at {:?}: {} steps of {:.2}, ramp {:?}",
        params.origin,
        steps.len(),
        step_height,
        params.ramp
    );

    Ok(Platform { steps, fill, ramp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    fn params(step_count: u32) -> PlatformParams {
        PlatformParams {
            side_size: 100.0,
            front_size: 120.0,
            height: 4.0,
            origin: Vec3::new(160.0, 0.0, 150.0),
            step_size: 15.0,
            step_count,
            step_depth: 0.5,
            color: Color(0x7FFFD4),
            ramp: None,
            yaw: 0.0,
        }
    }

    #[test]
    fn test_step_tops_never_descend() {
        for step_count in [1, 2, 8, 25] {
            let platform = build_platform(&params(step_count)).unwrap();
            assert_eq!(platform.steps.len(), step_count as usize);

            let tops: Vec<f32> = platform
                .steps
                .iter()
                .map(|step| step.world_aabb().unwrap().max.y)
                .collect();
            assert!(tops.windows(2).all(|pair| pair[0] <= pair[1]), "tops: {tops:?}");
            assert_relative_eq!(*tops.last().unwrap(), 4.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_steps_recede_from_front_face() {
        let platform = build_platform(&params(8)).unwrap();
        let first = platform.steps[0].world_aabb().unwrap();
        let last = platform.steps[7].world_aabb().unwrap();
        assert_relative_eq!(first.min.z, 100.0, epsilon = 1e-4);
        assert!(last.center().z > first.center().z);
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(build_platform(&params(0)), Err(LevelError::InvalidPlatform(_))));
    }

    #[test]
    fn test_staircase_too_deep_rejected() {
        let mut p = params(8);
        p.step_depth = 20.0;
        assert!(build_platform(&p).is_err());
    }

    #[test]
    fn test_fill_is_flush_with_staircase() {
        let p = params(8);
        let platform = build_platform(&p).unwrap();
        assert_eq!(platform.fill.len(), 3);

        let bounds: Vec<_> = platform.fill.iter().map(|c| c.world_aabb().unwrap()).collect();
        let stairs = platform
            .steps
            .iter()
            .map(|s| s.world_aabb().unwrap())
            .reduce(|a, b| a.union(&b))
            .unwrap();

        // Side fills touch the staircase on both sides
        assert_relative_eq!(bounds[0].max.x, stairs.min.x, epsilon = 1e-3);
        assert_relative_eq!(bounds[1].min.x, stairs.max.x, epsilon = 1e-3);
        // Rear block starts where the staircase ends and reaches the back
        assert_relative_eq!(bounds[2].min.z, stairs.max.z, epsilon = 1e-3);
        assert_relative_eq!(bounds[2].max.z, p.origin.z + p.side_size / 2.0, epsilon = 1e-3);
        // The whole block spans the requested width
        let block = bounds.iter().fold(stairs, |acc, b| acc.union(b));
        assert_relative_eq!(block.size().x, p.front_size, epsilon = 1e-3);
        assert_relative_eq!(block.size().z, p.side_size, epsilon = 1e-3);
    }

    #[test]
    fn test_ramp_follows_stair_envelope() {
        let mut p = params(8);
        p.ramp = Some(RampStyle::Slab);
        let platform = build_platform(&p).unwrap();
        assert_eq!(platform.piece_count(), 12);
        let ramp = platform.ramp.expect("ramp requested");
        assert!(!ramp.visible);

        let ColliderShape::Ramp(surface) = ramp.shape else {
            panic!("ramp shape expected");
        };
        assert_relative_eq!(surface.incline(), p.ramp_angle(), epsilon = 1e-4);
    }

    #[test]
    fn test_yaw_half_turn_mirrors_staircase() {
        let mut p = params(8);
        p.yaw = PI;
        let platform = build_platform(&p).unwrap();
        let first = platform.steps[0].world_aabb().unwrap();
        // The front face now points toward +z
        assert_relative_eq!(first.max.z, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_oblique_yaw_rejected() {
        let mut p = params(8);
        p.yaw = PI / 4.0;
        assert!(matches!(build_platform(&p), Err(LevelError::InvalidPlatform(_))));
        p.yaw = f32::NAN;
        assert!(build_platform(&p).is_err());
        for quarter_turns in [-1.0, 1.0, 3.0] {
            p.yaw = quarter_turns * PI / 2.0;
            assert!(build_platform(&p).is_ok(), "yaw {}", p.yaw);
        }
    }
}
