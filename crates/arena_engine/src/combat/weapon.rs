//! Camera-mounted weapon placement

use crate::core::config::WeaponConfig;
use crate::foundation::math::{Quat, Transform, Vec3};

/// A gun rigidly attached to the camera
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    mount_offset: Vec3,
    orientation: Quat,
    barrel_offset: Vec3,
}

impl Weapon {
    /// Build from its configuration
    pub fn new(config: &WeaponConfig) -> Self {
        let [x, y, z] = config.orientation;
        let orientation = Quat::from_axis_angle(&Vec3::x_axis(), x)
            * Quat::from_axis_angle(&Vec3::y_axis(), y)
            * Quat::from_axis_angle(&Vec3::z_axis(), z);
        Self {
            mount_offset: config.mount_offset,
            orientation,
            barrel_offset: config.barrel_offset,
        }
    }

    /// World placement of the weapon body
    pub fn world_transform(&self, camera_position: Vec3, camera_rotation: Quat) -> Transform {
        Transform::from_position_rotation(camera_position, camera_rotation)
            .combine(&Transform::from_position_rotation(self.mount_offset, self.orientation))
    }

    /// Where bullets leave the barrel
    pub fn muzzle_position(&self, camera_position: Vec3, camera_rotation: Quat) -> Vec3 {
        self.world_transform(camera_position, camera_rotation)
            .transform_point(self.barrel_offset)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(&WeaponConfig::default())
    }
}
