//! # Platformer Engine
//!
//! The collision core of a 2D platformer: swept axis-aligned boxes, a
//! per-axis event filter and a detect-and-notify orchestrator, on top of a
//! small generational entity arena.
//!
//! ## Features
//!
//! - **Swept AABB**: time of impact and struck face for moving boxes, no tunnelling
//! - **Per-axis winners**: earliest hit per axis, blocking targets win ties
//! - **Deferred removal**: callbacks mark entities; the arena compacts at end of frame
//! - **Capability profiles**: responses branch on layers and capabilities, not types
//!
//! ## Quick Start
//!
//! ```rust
//! use platformer_engine::prelude::*;
//!
//! struct Crate {
//!     position: Vec2,
//!     velocity: Vec2,
//! }
//!
//! impl Collidable for Crate {
//!     type Message = ();
//!
//!     fn bounding_box(&self) -> BoundingBox {
//!         BoundingBox::from_center_half_extents(self.position, Vec2::new(0.5, 0.5))
//!     }
//!     fn position(&self) -> Vec2 {
//!         self.position
//!     }
//!     fn velocity(&self) -> Vec2 {
//!         self.velocity
//!     }
//!     fn is_collidable(&self) -> bool {
//!         true
//!     }
//!     fn profile(&self) -> ColliderProfile {
//!         ColliderProfile::new(CollisionLayers::ENVIRONMENT).blocking()
//!     }
//!     fn on_no_collision(&mut self, dt: f32, _commands: &mut Commands<()>) {
//!         self.position += self.velocity * dt;
//!     }
//!     fn on_collision_with(&mut self, event: &CollisionEvent, _commands: &mut Commands<()>) {
//!         self.position += event.correction();
//!         self.velocity = Vec2::zeros();
//!     }
//! }
//!
//! let mut world = World::new();
//! let falling = world.create_entity(Crate { position: Vec2::new(0.0, 0.0), velocity: Vec2::new(0.0, 10.0) });
//! world.create_entity(Crate { position: Vec2::new(0.0, 3.0), velocity: Vec2::zeros() });
//!
//! let system = CollisionSystem::new();
//! let mut commands = Commands::new();
//! system.process_all(&mut world, 0.5, &mut commands);
//! world.compact();
//!
//! // Resting on top of the lower crate
//! assert_eq!(world.get(falling).map(|c| c.position.y), Some(2.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod ecs;
pub mod physics;

pub use crate::core::config::{CollisionConfig, EngineConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        core::config::{CollisionConfig, EngineConfig},
        ecs::{Capabilities, Collidable, ColliderProfile, Commands, EntityId, SceneId, World},
        foundation::{
            math::Vec2,
            time::{FixedTimestep, Stopwatch},
        },
        physics::{
            Axis, BoundingBox, CollisionEvent, CollisionLayers, CollisionSystem, EventFilter, FrameStats,
            ProcessOutcome,
        },
    };
}
