//! Primitive collision shapes and intersection algorithms
//!
//! Provides basic geometric primitives (rays, boxes, triangles) with
//! the intersection tests the character controller and projectiles use.

use crate::foundation::math::{utils, Vec3};
use crate::level::ColliderKey;

/// A ray for ground probes and wall casts
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray cast against the level
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// The collider that was hit
    pub collider: ColliderKey,
    /// The distance from the ray origin to the hit point
    pub distance: f32,
    /// The point of intersection in world space
    pub point: Vec3,
    /// The surface normal at the intersection point
    pub normal: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing every point; `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        }))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half extents of the AABB
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the full size of the AABB
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Finite corners with `min <= max` on every axis
    pub fn is_valid(&self) -> bool {
        utils::is_finite(&self.min)
            && utils::is_finite(&self.max)
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Check if the boxes share interior volume (touching does not count)
    ///
    /// Movement resolution uses this so a player resting flush against a
    /// floor or wall is not treated as penetrating it.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Penetration depth along each axis (non-positive when separated)
    pub fn penetration(&self, other: &Self) -> Vec3 {
        Vec3::new(
            self.max.x.min(other.max.x) - self.min.x.max(other.min.x),
            self.max.y.min(other.max.y) - self.min.y.max(other.min.y),
            self.max.z.min(other.max.z) - self.min.z.max(other.min.z),
        )
    }

    /// Closest point inside the box to `point`
    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        point.sup(&self.min).inf(&self.max)
    }

    /// Distance from `point` to the box (zero inside)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.clamp_point(point)).norm()
    }

    /// Test ray intersection with this AABB using slab method
    ///
    /// Returns the entry distance and the normal of the entry face. A ray
    /// starting inside the box reports distance 0 and the face it leaves by,
    /// negated.
    /// Based on "An Efficient and Robust Ray–Box Intersection Algorithm"
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_normal = Vec3::zeros();
        let mut exit_normal = Vec3::zeros();

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between the planes
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t1 = (self.min[axis] - origin) * inv;
            let mut t2 = (self.max[axis] - origin) * inv;
            let mut near_sign = -1.0;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
                near_sign = 1.0;
            }

            if t1 > t_enter {
                t_enter = t1;
                enter_normal = Vec3::zeros();
                enter_normal[axis] = near_sign;
            }
            if t2 < t_exit {
                t_exit = t2;
                exit_normal = Vec3::zeros();
                exit_normal[axis] = near_sign;
            }
        }

        if t_exit < t_enter || t_exit < 0.0 {
            return None;
        }
        if t_enter >= 0.0 {
            Some((t_enter, enter_normal))
        } else {
            Some((0.0, exit_normal))
        }
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex in world space
    pub v0: Vec3,
    /// Second vertex
    pub v1: Vec3,
    /// Third vertex
    pub v2: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Calculates the normal of the triangle (right-hand rule)
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        edge1.cross(&edge2).normalize()
    }

    /// Möller-Trumbore ray-triangle intersection algorithm
    /// Returns (t, u, v) barycentric coordinates if hit, None otherwise
    ///
    /// See: "Fast, Minimum Storage Ray/Triangle Intersection" by Möller & Trumbore
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        const EPSILON: f32 = 0.000_001;

        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(&edge2);
        let a = edge1.dot(&h);

        // Ray parallel to triangle?
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * ray.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(&q);
        if t >= 0.0 {
            Some((t, u, v))
        } else {
            None // Behind ray origin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = unit_box();
        let b = Aabb::new(Vec3::new(1.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(!a.overlaps(&b));
        let c = Aabb::new(Vec3::new(0.9, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(a.overlaps(&c));
        assert_relative_eq!(a.penetration(&c).x, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_point_and_distance() {
        let aabb = unit_box();
        let outside = Vec3::new(4.0, 0.5, 0.0);
        assert_relative_eq!(aabb.clamp_point(outside), Vec3::new(1.0, 0.5, 0.0));
        assert_relative_eq!(aabb.distance_to_point(outside), 3.0);
        assert_eq!(aabb.distance_to_point(Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_ray_enters_top_face() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let (t, normal) = unit_box().intersect_ray(&ray).unwrap();
        assert_relative_eq!(t, 4.0);
        assert_relative_eq!(normal, Vec3::y());
    }

    #[test]
    fn test_ray_misses_box() {
        let ray = Ray::new(Vec3::new(3.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(unit_box().intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_invalid_box_detected() {
        let inverted = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        let nan = Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(!inverted.is_valid());
        assert!(!nan.is_valid());
        assert!(unit_box().is_valid());
    }

    #[test]
    fn test_triangle_ray_hit() {
        let tri = Triangle::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let (t, _, _) = tri.intersect_ray(&ray).unwrap();
        assert_relative_eq!(t, 2.0);
    }
}
