//! Physics module for swept collision detection
//!
//! Boxes and the swept-AABB primitive live in [`collision`]; the per-frame
//! pipeline is [`scanner`] → [`filter`] → [`collision_system`], exchanging
//! [`CollisionEvent`] records.

pub mod collision;
pub mod collision_event;
pub mod collision_layers;
pub mod collision_system;
pub mod filter;
pub mod scanner;

pub use collision::{sweep, sweep_with_epsilon, Axis, BoundingBox, SweepHit};
pub use collision_event::{CollisionEvent, Participant};
pub use collision_layers::{layer_veto, CollisionLayers};
pub use collision_system::{CollisionSystem, FrameStats, ProcessOutcome};
pub use filter::{AxisWinners, EventFilter, Veto};
pub use scanner::Scanner;
