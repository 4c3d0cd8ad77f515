//! Shared types and math: ids, transforms, rays and bounding volumes, smoothing curves.
//!
//! # Invariants
//! - Ray directions are unit length; zero directions never produce a ray.
//! - Easing and smoothing helpers never return values outside their target range.

pub mod geometry;
pub mod math;
pub mod types;

pub use geometry::{Aabb, BoundingSphere, ObstacleSet, Ray};
pub use math::{EPSILON, exp_lerp_factor, lerp, log_ease, smooth_toward};
pub use types::{EntityId, Transform};
