//! First-person character controller
//!
//! The player is an axis-aligned box around its body centre. Every frame
//! runs, in order: horizontal move with slide, gravity with ground snap,
//! jump, and the fall-out check. Static geometry comes from a [`Level`];
//! ramps are not pushed against but found with a downward probe ray.

use crate::core::config::PlayerConfig;
use crate::foundation::math::{utils, Vec3, UP};
use crate::input::MoveIntent;
use crate::level::{ColliderKey, Level};
use crate::physics::collider::SurfaceKind;
use crate::physics::collision::{Aabb, Ray, RayHit};

/// Displacements shorter than this are treated as no movement
const MIN_DISPLACEMENT: f32 = 1.0e-5;

/// Overlap below this still counts as touching when picking a slide axis
const CONTACT_SLOP: f32 = 1.0e-4;

/// The player's physical state
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Body centre
    pub position: Vec3,
    /// Current velocity (only `y` persists between frames)
    pub velocity: Vec3,
    /// Full body height
    pub height: f32,
    /// Horizontal half-width
    pub radius: f32,
    /// Walk speed
    pub speed: f32,
    /// Jump impulse
    pub jump_force: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Standing on something after the last vertical resolution
    pub on_ground: bool,
    /// A jump is available; cleared by jumping, re-armed by landing
    pub can_jump: bool,
}

impl Player {
    /// Spawn a player as described by `config`
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: config.spawn_point,
            velocity: Vec3::zeros(),
            height: config.height,
            radius: config.radius,
            speed: config.speed,
            jump_force: config.jump_force,
            gravity: config.gravity,
            on_ground: false,
            can_jump: true,
        }
    }

    /// Half size of the body box
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.radius, self.height / 2.0, self.radius)
    }

    /// Body box if the centre were at `center`
    pub fn aabb_at(&self, center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, self.half_extents())
    }

    /// Body box at the current position
    pub fn aabb(&self) -> Aabb {
        self.aabb_at(self.position)
    }

    /// Height of the soles
    pub fn feet_y(&self) -> f32 {
        self.position.y - self.height / 2.0
    }
}

/// Surface the player ended the frame standing on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Collidable stood on
    pub collider: ColliderKey,
    /// Its surface tag
    pub kind: SurfaceKind,
    /// Height of the surface under the feet
    pub height: f32,
}

/// What happened during one [`CharacterController::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Horizontal displacement actually applied (may include ramp climb)
    pub moved: Vec3,
    /// Last collidable that deflected or stopped the move
    pub blocked_by: Option<ColliderKey>,
    /// The move was deflected along a surface
    pub slid: bool,
    /// The move was rejected outright
    pub rejected: bool,
    /// The move followed a ramp incline
    pub on_ramp: bool,
    /// Ground under the feet after vertical resolution
    pub ground: Option<GroundContact>,
    /// Head hit something on the way up
    pub hit_ceiling: bool,
    /// A jump started this frame
    pub jumped: bool,
    /// The player fell out of the world and was put back
    pub respawned: bool,
}

/// Resolves player movement against static level geometry
#[derive(Debug, Clone)]
pub struct CharacterController {
    config: PlayerConfig,
}

impl CharacterController {
    /// Create a controller with the given tuning
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Advance the player by one frame
    ///
    /// `forward` is the camera's look direction; only its horizontal part
    /// steers movement.
    pub fn step(
        &self,
        player: &mut Player,
        intent: MoveIntent,
        forward: Vec3,
        dt: f32,
        level: &Level,
    ) -> StepReport {
        let mut report = StepReport::default();

        if let Some(direction) = wish_direction(intent, forward) {
            self.resolve_horizontal(player, direction * player.speed * dt, level, &mut report);
        }
        self.resolve_vertical(player, dt, level, &mut report);

        if intent.contains(MoveIntent::JUMP) {
            report.jumped = Self::try_jump(player);
        }
        report.respawned = self.recover_fall(player);

        report
    }

    /// Move horizontally by `displacement`, sliding along what it runs into
    pub fn resolve_horizontal(
        &self,
        player: &mut Player,
        displacement: Vec3,
        level: &Level,
        report: &mut StepReport,
    ) {
        let length = displacement.norm();
        if length < MIN_DISPLACEMENT {
            return;
        }

        let mut attempt = displacement;
        let ramp = self.probe_ground(player.position, player.height, level, &[SurfaceKind::Ramp]);
        if let Some(hit) = ramp {
            attempt = self.follow_incline(displacement, hit.normal);
            report.on_ramp = true;
        }

        let start = player.aabb();
        for retry in 0..=self.config.max_slide_attempts {
            let target = player.position + attempt;
            let body = player.aabb_at(target);
            let Some((key, normal)) = first_blocking(level, &start, &body, target.y) else {
                player.position = target;
                report.moved = attempt;
                return;
            };

            report.blocked_by = Some(key);
            if retry == self.config.max_slide_attempts {
                break;
            }
            attempt = utils::project_on_plane(attempt, normal) * self.config.slide_damping;
            if attempt.norm() < MIN_DISPLACEMENT {
                break;
            }
            report.slid = true;
        }

        log::trace!("Move {displacement:?} rejected by {:?}", report.blocked_by);
        report.slid = false;
        report.rejected = true;
    }

    /// Apply gravity and snap onto whatever is under the feet
    pub fn resolve_vertical(
        &self,
        player: &mut Player,
        dt: f32,
        level: &Level,
        report: &mut StepReport,
    ) {
        player.velocity.y -= player.gravity * dt;
        let tentative = player.position + Vec3::new(0.0, player.velocity.y * dt, 0.0);
        let body = player.aabb_at(tentative);

        let mut ground: Option<GroundContact> = None;
        let mut ceiling = false;
        for (key, collidable, bounds) in level.solids() {
            if !collidable.blocks_movement() || !body.overlaps(&bounds) {
                continue;
            }
            if tentative.y > bounds.max.y {
                if ground.map_or(true, |g| bounds.max.y > g.height) {
                    ground = Some(GroundContact {
                        collider: key,
                        kind: collidable.kind,
                        height: bounds.max.y,
                    });
                }
            } else {
                ceiling = true;
            }
        }

        if player.velocity.y <= 0.0 {
            let ramp = self.probe_ground(tentative, player.height, level, &[SurfaceKind::Ramp]);
            if let Some(hit) = ramp {
                if ground.map_or(true, |g| hit.point.y > g.height) {
                    ground = Some(GroundContact {
                        collider: hit.collider,
                        kind: SurfaceKind::Ramp,
                        height: hit.point.y,
                    });
                }
            }
        }

        if let Some(contact) = ground {
            player.position.y = contact.height + player.height / 2.0;
            player.velocity.y = 0.0;
            player.on_ground = true;
            player.can_jump = true;
            report.ground = Some(contact);
        } else if ceiling {
            player.velocity.y = 0.0;
            player.on_ground = false;
            report.hit_ceiling = true;
        } else {
            player.position.y = tentative.y;
            player.on_ground = false;
        }
    }

    /// Start a jump if standing and re-armed
    pub fn try_jump(player: &mut Player) -> bool {
        if !(player.can_jump && player.on_ground) {
            return false;
        }
        player.velocity.y = player.jump_force;
        player.on_ground = false;
        player.can_jump = false;
        true
    }

    /// Put the player back at the respawn point after falling out
    pub fn recover_fall(&self, player: &mut Player) -> bool {
        if player.position.y >= self.config.kill_plane_y {
            return false;
        }
        log::info!(
            "Player fell out at {:?}, respawning at {:?}",
            player.position,
            self.config.respawn_point
        );
        player.position = self.config.respawn_point;
        player.velocity = Vec3::zeros();
        player.on_ground = true;
        player.can_jump = true;
        true
    }

    /// Downward ray from the body centre, reaching a little below the feet
    pub fn probe_ground(
        &self,
        center: Vec3,
        height: f32,
        level: &Level,
        kinds: &[SurfaceKind],
    ) -> Option<RayHit> {
        let ray = Ray::new(center, -UP);
        level.raycast(&ray, height * self.config.ground_probe_factor, kinds)
    }

    /// Bend a displacement onto an incline with surface normal `normal`
    ///
    /// The length is preserved; walking uphill gets an extra lift scaled by
    /// the steepness.
    fn follow_incline(&self, displacement: Vec3, normal: Vec3) -> Vec3 {
        let length = displacement.norm();
        let along = utils::project_on_plane(displacement, normal).try_normalize(MIN_DISPLACEMENT);
        let Some(along) = along else {
            return displacement;
        };
        let mut bent = along * length;
        if bent.y > 0.0 {
            let sin_incline = Vec3::new(normal.x, 0.0, normal.z).norm();
            bent.y += self.config.ramp_boost * length * sin_incline;
        }
        bent
    }
}

/// Unit horizontal direction the intent asks for, relative to `forward`
///
/// `None` when nothing is pressed, opposing keys cancel, or the camera looks
/// straight up or down.
pub fn wish_direction(intent: MoveIntent, forward: Vec3) -> Option<Vec3> {
    let (left_amount, forward_amount) = intent.planar_axes();
    if left_amount == 0.0 && forward_amount == 0.0 {
        return None;
    }
    let forward = utils::flatten(forward)?;
    let left = UP.cross(&forward);
    (left * left_amount + forward * forward_amount).try_normalize(MIN_DISPLACEMENT)
}

/// First collidable the moved `body` would be pushed back by, with the separation normal
///
/// Pieces the body centre is above count as floor contact and never block,
/// which lets the player walk up stair treads lower than half its height.
fn first_blocking(
    level: &Level,
    start: &Aabb,
    body: &Aabb,
    center_y: f32,
) -> Option<(ColliderKey, Vec3)> {
    level
        .solids()
        .filter(|(_, collidable, _)| collidable.blocks_movement())
        .find(|(_, _, bounds)| body.overlaps(bounds) && center_y <= bounds.max.y)
        .map(|(key, _, bounds)| (key, separation_normal(start, body, &bounds)))
}

/// Horizontal normal pointing away from `obstacle`
///
/// Taken from the box before the move: the axis on which `start` was still
/// clear of the obstacle is the face it ran into. Only when that is
/// ambiguous does the axis of least penetration of the moved `body` decide.
fn separation_normal(start: &Aabb, body: &Aabb, obstacle: &Aabb) -> Vec3 {
    let clear_x = start.max.x <= obstacle.min.x + CONTACT_SLOP
        || start.min.x >= obstacle.max.x - CONTACT_SLOP;
    let clear_z = start.max.z <= obstacle.min.z + CONTACT_SLOP
        || start.min.z >= obstacle.max.z - CONTACT_SLOP;

    let (along_x, offset) = match (clear_x, clear_z) {
        (true, false) => (true, start.center() - obstacle.center()),
        (false, true) => (false, start.center() - obstacle.center()),
        _ => {
            let depth = body.penetration(obstacle);
            (depth.x < depth.z, body.center() - obstacle.center())
        }
    };
    if along_x {
        Vec3::new(offset.x.signum(), 0.0, 0.0)
    } else {
        Vec3::new(0.0, 0.0, offset.z.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::level::{build_platform, PlatformParams, RampStyle};
    use crate::physics::collider::{Collidable, Color};
    use crate::physics::collision::RampSurface;
    use approx::assert_relative_eq;

    fn floor_level() -> Level {
        let mut level = Level::new();
        level.add(Collidable::cuboid(
            SurfaceKind::Ground,
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(40.0, 1.0, 40.0),
            Color::FLOOR,
        ));
        level
    }

    fn slow_config() -> PlayerConfig {
        PlayerConfig::default().with_speed(5.0)
    }

    fn wall_level(center: Vec3, size: Vec3) -> (Level, ColliderKey) {
        let mut level = floor_level();
        let wall = level.add(Collidable::cuboid(SurfaceKind::Wall, center, size, Color::WALL));
        (level, wall)
    }

    /// Small stair block: front face at local z = -5, crest at z = -1, top at 2
    fn small_platform(ramp: Option<RampStyle>, yaw: f32) -> PlatformParams {
        PlatformParams {
            side_size: 10.0,
            front_size: 10.0,
            height: 2.0,
            origin: Vec3::zeros(),
            step_size: 4.0,
            step_count: 4,
            step_depth: 1.0,
            color: Color::WALL,
            ramp,
            yaw,
        }
    }

    fn standing(config: &PlayerConfig, x: f32, z: f32) -> Player {
        let mut player = Player::new(config);
        player.position = Vec3::new(x, config.height / 2.0, z);
        player.on_ground = true;
        player
    }

    #[test]
    fn test_resting_on_floor_converges() {
        let config = PlayerConfig::default();
        let controller = CharacterController::new(config.clone());
        let level = floor_level();
        let mut player = Player::new(&config.with_spawn_point(Vec3::new(0.0, 3.0, 0.0)));

        for _ in 0..120 {
            controller.step(&mut player, MoveIntent::empty(), -Vec3::z(), 1.0 / 60.0, &level);
        }

        assert_relative_eq!(player.feet_y(), 0.0, epsilon = 1e-4);
        assert!(player.on_ground);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_wall_stops_perpendicular_move() {
        let config = slow_config();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        let wall = level.add(Collidable::cuboid(
            SurfaceKind::Wall,
            Vec3::new(1.5, 5.0, 0.0),
            Vec3::new(1.0, 10.0, 20.0),
            Color::WALL,
        ));
        // Flush against the wall face at x = 1
        let mut player = standing(&config, 0.5, 0.0);

        let report = controller.step(&mut player, MoveIntent::FORWARD, Vec3::x(), 0.1, &level);

        assert_relative_eq!(player.position.x, 0.5);
        assert_relative_eq!(player.position.z, 0.0);
        assert!(report.rejected);
        assert_eq!(report.blocked_by, Some(wall));
    }

    #[test]
    fn test_wall_at_angle_slides() {
        let config = slow_config();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        level.add(Collidable::cuboid(
            SurfaceKind::Wall,
            Vec3::new(1.5, 5.0, 0.0),
            Vec3::new(1.0, 10.0, 20.0),
            Color::WALL,
        ));
        let mut player = standing(&config, 0.5, 0.0);

        // Facing +x, forward + left heads diagonally into the wall
        let report = controller.step(
            &mut player,
            MoveIntent::FORWARD | MoveIntent::LEFT,
            Vec3::x(),
            0.1,
            &level,
        );

        assert!(report.slid);
        assert_relative_eq!(player.position.x, 0.5);
        let expected = -0.5 * std::f32::consts::FRAC_1_SQRT_2 * config.slide_damping;
        assert_relative_eq!(player.position.z, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_wall_at_angle_slides_at_full_speed() {
        let config = PlayerConfig::default();
        let controller = CharacterController::new(config.clone());
        let (level, wall) = wall_level(Vec3::new(3.5, 5.0, 0.0), Vec3::new(5.0, 10.0, 20.0));

        // One frame carries the body deeper into the wall than it is wide
        for dt in [1.0 / 30.0, 0.1] {
            let mut player = standing(&config, 0.5, 0.0);
            let report = controller.step(
                &mut player,
                MoveIntent::FORWARD | MoveIntent::LEFT,
                Vec3::x(),
                dt,
                &level,
            );

            assert!(report.slid, "dt {dt}: {report:?}");
            assert!(!report.rejected);
            assert_eq!(report.blocked_by, Some(wall));
            assert_relative_eq!(player.position.x, 0.5);
            let expected =
                -config.speed * dt * std::f32::consts::FRAC_1_SQRT_2 * config.slide_damping;
            assert_relative_eq!(player.position.z, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_inside_corner_rejects_move() {
        let mut level = floor_level();
        level.add(Collidable::cuboid(
            SurfaceKind::Wall,
            Vec3::new(1.5, 5.0, 0.0),
            Vec3::new(1.0, 10.0, 20.0),
            Color::WALL,
        ));
        let back = level.add(Collidable::cuboid(
            SurfaceKind::Wall,
            Vec3::new(0.0, 5.0, -1.5),
            Vec3::new(20.0, 10.0, 1.0),
            Color::WALL,
        ));

        for attempts in [1, 3] {
            let mut config = slow_config();
            config.max_slide_attempts = attempts;
            let controller = CharacterController::new(config.clone());
            // Wedged into the corner formed by x = 1 and z = -1
            let mut player = standing(&config, 0.5, -0.5);
            let start = player.position;

            // Facing +x, forward + left heads into the corner; sliding off
            // the first wall runs into the second
            let report = controller.step(
                &mut player,
                MoveIntent::FORWARD | MoveIntent::LEFT,
                Vec3::x(),
                0.1,
                &level,
            );

            assert!(report.rejected);
            assert!(!report.slid);
            assert_eq!(report.blocked_by, Some(back));
            assert_relative_eq!(player.position, start, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_low_step_is_walked_onto() {
        let config = slow_config();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        let step = level.add(Collidable::cuboid(
            SurfaceKind::Ground,
            Vec3::new(0.0, 0.15, -1.0),
            Vec3::new(4.0, 0.3, 1.0),
            Color::STAIR,
        ));
        let mut player = standing(&config, 0.0, 0.0);

        let mut last = StepReport::default();
        for _ in 0..3 {
            last = controller.step(&mut player, MoveIntent::FORWARD, -Vec3::z(), 0.1, &level);
        }

        assert!(player.position.z < -0.5);
        assert_relative_eq!(player.feet_y(), 0.3, epsilon = 1e-4);
        assert_eq!(last.ground.map(|g| g.collider), Some(step));
    }

    #[test]
    fn test_jump_needs_ground_and_rearms_on_landing() {
        let config = PlayerConfig::default();
        let controller = CharacterController::new(config.clone());
        let level = floor_level();
        let mut player = standing(&config, 0.0, 0.0);

        let report = controller.step(&mut player, MoveIntent::JUMP, -Vec3::z(), 0.02, &level);
        assert!(report.jumped);
        assert_eq!(player.velocity.y, config.jump_force);
        assert!(!player.can_jump);

        // Holding jump mid-air does nothing
        let report = controller.step(&mut player, MoveIntent::JUMP, -Vec3::z(), 0.02, &level);
        assert!(!report.jumped);
        assert!(player.feet_y() > 0.0);
        assert!(player.velocity.y < config.jump_force);

        for _ in 0..200 {
            controller.step(&mut player, MoveIntent::empty(), -Vec3::z(), 0.02, &level);
        }
        assert!(player.on_ground);
        assert!(player.can_jump);
    }

    #[test]
    fn test_ceiling_stops_rise() {
        let config = PlayerConfig::default();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        level.add(Collidable::cuboid(
            SurfaceKind::Generic,
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(4.0, 1.0, 4.0),
            Color::WALL,
        ));
        let mut player = standing(&config, 0.0, 0.0);
        controller.step(&mut player, MoveIntent::JUMP, -Vec3::z(), 0.05, &level);

        let mut hit_ceiling = false;
        for _ in 0..10 {
            let report =
                controller.step(&mut player, MoveIntent::empty(), -Vec3::z(), 0.05, &level);
            hit_ceiling |= report.hit_ceiling;
            // Head never enters the slab starting at y = 2.5
            assert!(player.position.y + config.height / 2.0 <= 2.5 + 1e-4);
        }
        assert!(hit_ceiling);
    }

    #[test]
    fn test_kill_plane_respawns() {
        let config = PlayerConfig::default();
        let controller = CharacterController::new(config.clone());
        let level = Level::new();
        let mut player = Player::new(&config);
        player.position = Vec3::new(5.0, -99.9, 5.0);
        player.velocity = Vec3::new(0.0, -10.0, 0.0);

        let report = controller.step(&mut player, MoveIntent::empty(), -Vec3::z(), 0.1, &level);

        assert!(report.respawned);
        assert_eq!(player.position, config.respawn_point);
        assert_eq!(player.velocity, Vec3::zeros());
        assert!(player.on_ground);
    }

    #[test]
    fn test_ramp_is_climbed() {
        let config = slow_config();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        let ramp = level.add(Collidable::ramp(
            RampSurface::from_corners(
                Vec3::new(-5.0, 0.0, 0.0),
                Vec3::new(5.0, 0.0, 0.0),
                Vec3::new(-5.0, 5.0, 10.0),
                Vec3::new(5.0, 5.0, 10.0),
                0.0,
            ),
            Color::STAIR,
            true,
        ));
        let mut player = standing(&config, 0.0, -1.0);

        let mut last = StepReport::default();
        for _ in 0..30 {
            last = controller.step(&mut player, MoveIntent::FORWARD, Vec3::z(), 0.05, &level);
        }

        assert!(player.position.z > 3.0);
        assert!(player.feet_y() > 1.0);
        assert!(player.on_ground);
        assert!(last.on_ramp);
        assert_eq!(last.ground.map(|g| g.collider), Some(ramp));
        // Feet rest on the incline y = z / 2
        assert_relative_eq!(player.feet_y(), player.position.z / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wish_direction_follows_camera() {
        let forward = -Vec3::z();
        assert_relative_eq!(wish_direction(MoveIntent::FORWARD, forward).unwrap(), -Vec3::z());
        assert_relative_eq!(wish_direction(MoveIntent::LEFT, forward).unwrap(), -Vec3::x());
        assert_relative_eq!(wish_direction(MoveIntent::RIGHT, forward).unwrap(), Vec3::x());
        // Pitch does not slow walking
        let pitched = Vec3::new(0.0, -0.8, -0.6);
        assert_relative_eq!(
            wish_direction(MoveIntent::FORWARD, pitched).unwrap(),
            -Vec3::z(),
            epsilon = 1e-6
        );
        assert!(wish_direction(MoveIntent::FORWARD | MoveIntent::BACK, forward).is_none());
        assert!(wish_direction(MoveIntent::FORWARD, Vec3::y()).is_none());
    }

    #[test]
    fn test_slab_ramp_is_climbed() {
        // Long enough to reach the incline between the treads under it
        let mut config = slow_config();
        config.ground_probe_factor = 1.0;
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        level.add_platform(build_platform(&small_platform(Some(RampStyle::Slab), 0.0)).unwrap());
        let mut player = standing(&config, 0.0, -7.0);

        let mut rode_ramp = false;
        for _ in 0..40 {
            let report = controller.step(&mut player, MoveIntent::FORWARD, Vec3::z(), 0.05, &level);
            assert!(!report.rejected, "stuck at {:?}", player.position);
            rode_ramp |= report.on_ramp;
        }

        assert!(rode_ramp);
        assert!(player.position.z > 0.0);
        assert!(player.on_ground);
        assert_relative_eq!(player.feet_y(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_quarter_turned_stairs_are_climbed() {
        let config = slow_config();
        let controller = CharacterController::new(config.clone());
        let mut level = floor_level();
        // A quarter turn points the front face toward -x
        level.add_platform(build_platform(&small_platform(None, HALF_PI)).unwrap());
        let mut player = standing(&config, -7.0, 0.0);

        let mut highest = 0.0_f32;
        for _ in 0..40 {
            let report = controller.step(&mut player, MoveIntent::FORWARD, Vec3::x(), 0.05, &level);
            assert!(!report.rejected, "stuck at {:?}", player.position);
            highest = highest.max(player.feet_y());
        }

        assert!(player.position.x > 0.0);
        assert!(player.on_ground);
        assert_relative_eq!(player.feet_y(), 2.0, epsilon = 1e-4);
        assert_relative_eq!(highest, 2.0, epsilon = 1e-4);
    }
}
