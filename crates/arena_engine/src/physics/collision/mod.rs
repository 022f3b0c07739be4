//! Collision geometry for static level pieces
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (rays, boxes, triangles)
//! - [`shape`] - Level shapes stored as local geometry plus placement
//!
//! # Key Types
//!
//! - [`ColliderShape`] - Box or ramp geometry of a collidable
//! - [`Aabb`] - World-space box every broad test runs against
//! - [`Ray`], [`Triangle`] - Ground probes and ramp surfaces

pub mod primitives;
pub mod shape;

use crate::foundation::math::Vec3;

// Re-export commonly used types
pub use primitives::{Aabb, Ray, RayHit, Triangle};
pub use shape::{ColliderShape, Cuboid, RampSurface};

/// Reasons a shape's bounding box cannot be computed
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Local half extents are negative or not finite
    #[error("bad half extents {0:?}")]
    BadExtents(Vec3),

    /// The world transform produced non-finite or inverted bounds
    #[error("non-finite bounds min={0:?} max={1:?}")]
    NonFinite(Vec3, Vec3),

    /// The shape has no vertices
    #[error("shape has no geometry")]
    Empty,
}
