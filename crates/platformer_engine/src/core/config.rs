//! # Unified Configuration System
//!
//! All engine-side configuration lives here so it can be discovered in one
//! place and loaded from a single TOML or RON file.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging filter and fixed-step loop settings
//! - **Collision Config**: tolerances and switches for the swept-AABB pipeline

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// Default tolerance for near-zero negative times of impact
pub const DEFAULT_TIME_EPSILON: f32 = 1.0e-4;

/// # Collision Configuration
///
/// Tunables for the scan/filter/dispatch pipeline in [`crate::physics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Entry times in `[-time_epsilon, 0)` are treated as touching (`t = 0`)
    pub time_epsilon: f32,
    /// Subtract each target's own planned displacement before sweeping
    pub relative_motion: bool,
    /// Veto events whose layer/mask pair says the two entities never interact
    pub layer_filtering: bool,
    /// Log every scanned event at trace level
    pub trace_events: bool,
}

impl CollisionConfig {
    /// Create a collision configuration with defaults
    pub fn new() -> Self {
        Self {
            time_epsilon: DEFAULT_TIME_EPSILON,
            relative_motion: false,
            layer_filtering: true,
            trace_events: false,
        }
    }

    /// Enable or disable relative-motion sweeping
    pub fn with_relative_motion(mut self, enabled: bool) -> Self {
        self.relative_motion = enabled;
        self
    }

    /// Enable or disable layer/mask vetoes
    pub fn with_layer_filtering(mut self, enabled: bool) -> Self {
        self.layer_filtering = enabled;
        self
    }

    /// Set the near-zero tolerance
    pub fn with_time_epsilon(mut self, epsilon: f32) -> Self {
        self.time_epsilon = epsilon;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_epsilon.is_finite() || !(0.0..0.5).contains(&self.time_epsilon) {
            return Err(ConfigError::Invalid {
                field: "collision.time_epsilon",
                reason: format!("{} is not in [0, 0.5)", self.time_epsilon),
            });
        }
        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Engine Configuration
///
/// Core engine behavior: logging and the fixed-step update loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Logic step length in seconds
    pub fixed_timestep: f32,
    /// Upper bound on logic steps run for one rendered frame
    pub max_frame_steps: u32,
    /// Collision pipeline settings
    pub collision: CollisionConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_filter: "info".to_string(),
            fixed_timestep: 1.0 / 60.0,
            max_frame_steps: 5,
            collision: CollisionConfig::default(),
        }
    }

    /// Set log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the fixed logic step
    pub fn with_fixed_timestep(mut self, seconds: f32) -> Self {
        self.fixed_timestep = seconds;
        self
    }

    /// Replace collision settings
    pub fn with_collision(mut self, collision: CollisionConfig) -> Self {
        self.collision = collision;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(ConfigError::Invalid {
                field: "fixed_timestep",
                reason: format!("{} must be a positive number of seconds", self.fixed_timestep),
            });
        }
        if self.max_frame_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "max_frame_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        self.collision.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let text = r#"
            fixed_timestep = 0.02

            [collision]
            relative_motion = true
        "#;
        let config = EngineConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.fixed_timestep, 0.02);
        assert!(config.collision.relative_motion);
        assert!(config.collision.layer_filtering);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_ron_roundtrip_preserves_collision_settings() {
        let config = EngineConfig::default()
            .with_log_filter("platformer=trace")
            .with_collision(CollisionConfig::default().with_layer_filtering(false).with_relative_motion(true));
        let text = config.to_string_as(ConfigFormat::Ron).unwrap();
        let parsed = EngineConfig::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        let config = EngineConfig::default()
            .with_collision(CollisionConfig::default().with_time_epsilon(-1.0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_zero_timestep() {
        let config = EngineConfig::default().with_fixed_timestep(0.0);
        assert!(config.validate().is_err());
    }
}
