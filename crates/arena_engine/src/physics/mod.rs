//! Physics module for collision detection and character movement
//!
//! Static level pieces are tested as axis-aligned boxes; ramps add an exact
//! triangle surface for the ground probe.

pub mod collider;
pub mod collision;
pub mod controller;

pub use collider::{Collidable, Color, SurfaceKind};
pub use collision::{Aabb, ColliderShape, GeometryError, Ray, RayHit};
pub use controller::{CharacterController, GroundContact, Player, StepReport};
