//! # Platformer
//!
//! A small headless platformer built on `platformer_engine`: a player,
//! walking enemies, coins, solid blocks and portals, all talking to each
//! other only through collision events and messages.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod config;
pub mod entities;
pub mod input;
pub mod level;
pub mod messages;
pub mod scene;

#[cfg(test)]
mod tests;

pub use config::{GameConfig, GameError, GameplayConfig};
pub use entities::GameObject;
pub use input::{InputScript, PlayerInput};
pub use messages::GameMessage;
pub use scene::{Scene, StepReport};
