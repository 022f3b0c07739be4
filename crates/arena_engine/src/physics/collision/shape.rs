//! Level collision shapes
//!
//! Shapes are stored as local geometry plus a world placement and only
//! reduced to world-space boxes or triangles when a test needs them.

use crate::foundation::math::{utils, Transform, Vec3};
use super::primitives::{Aabb, Ray, Triangle};
use super::GeometryError;

/// An oriented box: local half extents placed by a rigid transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// Half size along the local axes
    pub half_extents: Vec3,
    /// World placement of the box centre
    pub transform: Transform,
}

impl Cuboid {
    /// Box of full `size` centred at `center`, axis aligned
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            half_extents: size * 0.5,
            transform: Transform::from_position(center),
        }
    }

    /// World-space corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let h = self.half_extents;
        let mut corners = [Vec3::zeros(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let local = Vec3::new(
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            );
            *corner = self.transform.transform_point(local);
        }
        corners
    }
}

/// Walkable inclined surface: a quad split into two triangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampSurface {
    /// The two triangles of the surface, in world space
    pub triangles: [Triangle; 2],
    /// Slab thickness below the surface (zero for a bare prism face)
    pub thickness: f32,
}

impl RampSurface {
    /// Build from the four corners of the incline
    ///
    /// `low_left`/`low_right` sit at the foot, `high_left`/`high_right` at the
    /// crest. Winding is fixed up so the surface normal points upward.
    pub fn from_corners(
        low_left: Vec3,
        low_right: Vec3,
        high_left: Vec3,
        high_right: Vec3,
        thickness: f32,
    ) -> Self {
        let mut triangles = [
            Triangle::new(low_left, low_right, high_right),
            Triangle::new(low_left, high_right, high_left),
        ];
        if triangles[0].normal().y < 0.0 {
            for tri in &mut triangles {
                std::mem::swap(&mut tri.v1, &mut tri.v2);
            }
        }
        Self { triangles, thickness }
    }

    /// Upward-facing unit normal of the incline
    pub fn normal(&self) -> Vec3 {
        self.triangles[0].normal()
    }

    /// Incline angle from the horizontal, in radians
    pub fn incline(&self) -> f32 {
        self.normal().y.clamp(-1.0, 1.0).acos()
    }

    /// Apply a rigid transform to every vertex
    pub fn transformed(&self, transform: &Transform) -> Self {
        let map = |tri: &Triangle| {
            Triangle::new(
                transform.transform_point(tri.v0),
                transform.transform_point(tri.v1),
                transform.transform_point(tri.v2),
            )
        };
        Self {
            triangles: [map(&self.triangles[0]), map(&self.triangles[1])],
            thickness: self.thickness,
        }
    }

    fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.triangles.iter().flat_map(|tri| [tri.v0, tri.v1, tri.v2])
    }
}

/// Collision geometry of a level piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Solid (possibly rotated) box
    Cuboid(Cuboid),
    /// Inclined walking surface
    Ramp(RampSurface),
}

impl ColliderShape {
    /// World-space bounding box of the shape
    ///
    /// Fails for geometry with non-finite or negative extents, which is the
    /// one way a level piece can be malformed.
    pub fn world_aabb(&self) -> Result<Aabb, GeometryError> {
        let aabb = match self {
            Self::Cuboid(cuboid) => {
                if !utils::is_finite(&cuboid.half_extents) || cuboid.half_extents.min() < 0.0 {
                    return Err(GeometryError::BadExtents(cuboid.half_extents));
                }
                Aabb::from_points(cuboid.corners())
            }
            Self::Ramp(ramp) => {
                let thickness = Vec3::new(0.0, ramp.thickness, 0.0);
                Aabb::from_points(ramp.vertices().flat_map(|v| [v, v - thickness]))
            }
        }
        .ok_or(GeometryError::Empty)?;

        if aabb.is_valid() {
            Ok(aabb)
        } else {
            Err(GeometryError::NonFinite(aabb.min, aabb.max))
        }
    }

    /// Cast a ray against the exact shape
    ///
    /// Boxes are tested through their world AABB (exact for the axis-aligned
    /// level pieces). Returns distance and surface normal.
    pub fn intersect_ray(&self, ray: &Ray, world_aabb: &Aabb) -> Option<(f32, Vec3)> {
        match self {
            Self::Cuboid(_) => world_aabb.intersect_ray(ray),
            Self::Ramp(ramp) => {
                let normal = ramp.normal();
                ramp.triangles
                    .iter()
                    .filter_map(|tri| tri.intersect_ray(ray))
                    .map(|(t, _, _)| t)
                    .min_by(f32::total_cmp)
                    .map(|t| (t, normal))
            }
        }
    }
}
