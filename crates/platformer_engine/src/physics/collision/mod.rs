//! Narrow geometry for the platformer collision pipeline
//!
//! Everything here is a pure function of box geometry; entity identity,
//! filtering and dispatch live one level up in [`crate::physics`].
//!
//! # Module Organization
//!
//! - [`aabb`] - Axis-aligned bounding boxes
//! - [`sweep`] - Swept-AABB time of impact (slab method)

pub mod aabb;
pub mod sweep;

// Re-export commonly used types
pub use aabb::BoundingBox;
pub use sweep::{sweep, sweep_with_epsilon, Axis, SweepHit};
