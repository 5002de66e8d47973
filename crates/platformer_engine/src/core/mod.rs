//! # Core Engine Module
//!
//! Shared abstractions other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for all engine subsystems
//! - **Foundation**: Low-level utilities (math, collections, time, logging)
//! - **ECS**: Entity arena and deferred commands

pub mod config;

// Re-export foundation modules for convenience
pub use crate::ecs;
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{CollisionConfig, Config, ConfigError, ConfigFormat, EngineConfig};
