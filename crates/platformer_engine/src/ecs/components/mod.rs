//! ECS Components module
//!
//! Contains the collision contract shared by every collidable entity

pub mod collision;

pub use collision::{Capabilities, Collidable, ColliderProfile, SceneId};
