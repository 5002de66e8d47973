//! Game configuration
//!
//! Every tunable has a default, so the demo runs without any file on disk.
//! A TOML or RON file may override any subset of fields.

use serde::{Deserialize, Serialize};

use platformer_engine::config::{Config, ConfigError};
use platformer_engine::ecs::SceneId;
use platformer_engine::EngineConfig;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings (logging, fixed step, collision)
    pub engine: EngineConfig,
    /// Movement and combat tuning
    pub gameplay: GameplayConfig,
    /// Scene the demo starts in
    pub start_scene: SceneId,
}

/// Movement and combat tuning, in world units and seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Downward acceleration
    pub gravity: f32,
    /// Terminal falling speed
    pub max_fall_speed: f32,
    /// Horizontal player speed
    pub walk_speed: f32,
    /// Horizontal acceleration towards the input direction
    pub walk_acceleration: f32,
    /// Initial upward speed of a jump
    pub jump_speed: f32,
    /// Upward speed after stomping an enemy
    pub stomp_bounce_speed: f32,
    /// Grace period after being hurt
    pub invulnerability_time: f32,
    /// Horizontal enemy speed
    pub goomba_speed: f32,
    /// How long a squashed enemy lingers before it is removed
    pub squash_time: f32,
    /// Score per coin
    pub coin_score: u32,
    /// Score per stomped enemy
    pub stomp_score: u32,
    /// Anything falling below this height is lost
    pub kill_plane_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            gameplay: GameplayConfig::default(),
            start_scene: 1,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            gravity: 980.0,
            max_fall_speed: 480.0,
            walk_speed: 96.0,
            walk_acceleration: 640.0,
            jump_speed: 360.0,
            stomp_bounce_speed: 200.0,
            invulnerability_time: 2.0,
            goomba_speed: 32.0,
            squash_time: 0.5,
            coin_score: 200,
            stomp_score: 100,
            kill_plane_y: 480.0,
        }
    }
}

impl GameplayConfig {
    /// Validate gameplay values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gameplay.gravity", self.gravity),
            ("gameplay.max_fall_speed", self.max_fall_speed),
            ("gameplay.walk_speed", self.walk_speed),
            ("gameplay.walk_acceleration", self.walk_acceleration),
            ("gameplay.jump_speed", self.jump_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} must be positive"),
                });
            }
        }
        if self.invulnerability_time < 0.0 || self.squash_time < 0.0 {
            return Err(ConfigError::Invalid {
                field: "gameplay timers",
                reason: "timers cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl GameConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.gameplay.validate()
    }
}

impl Config for GameConfig {}

/// Game errors
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No level is registered under this id
    #[error("unknown scene {0}")]
    UnknownScene(SceneId),

    /// A scene was built without a player
    #[error("scene {0} has no player")]
    MissingPlayer(SceneId),
}
