//! Entity storage for game logic
//!
//! Provides the entity arena, generational handles, the deferred command
//! buffer and the collision contract entities implement.

pub mod world;
pub mod entity;
pub mod commands;
pub mod components;

pub use world::World;
pub use entity::{display_id, EntityId};
pub use commands::Commands;
pub use components::{Capabilities, Collidable, ColliderProfile, SceneId};
