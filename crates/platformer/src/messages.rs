//! Messages raised by collision callbacks
//!
//! Callbacks only get `&mut self`; anything that touches another entity or
//! the scene travels as a message and is applied by [`crate::scene::Scene`]
//! once the collision pass is over.

use platformer_engine::ecs::{EntityId, SceneId};

/// Something gameplay-relevant happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMessage {
    /// The player picked up a coin
    CoinCollected { coin: EntityId },
    /// The player landed on an enemy
    EnemyStomped { enemy: EntityId },
    /// An enemy walked into the player
    PlayerHurt { by: EntityId },
    /// The player lost its power-up
    PlayerShrunk,
    /// The player was hit while small or fell out of the level
    PlayerDied,
    /// The player entered a portal
    SceneSwitch(SceneId),
}
