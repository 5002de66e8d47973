//! Game objects
//!
//! Every object in a scene is one [`GameObject`] variant stored in the
//! engine's `World`. Collision responses never look at the variant of the
//! other party; they branch on the [`ColliderProfile`] carried by the event.

pub mod block;
pub mod body;
pub mod coin;
pub mod goomba;
pub mod player;
pub mod portal;

pub use block::Block;
pub use body::Body;
pub use coin::Coin;
pub use goomba::Goomba;
pub use player::{DamageOutcome, Player, PlayerForm};
pub use portal::Portal;

use platformer_engine::ecs::{Collidable, ColliderProfile, Commands, EntityId};
use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{BoundingBox, CollisionEvent};

use crate::input::PlayerInput;
use crate::messages::GameMessage;

/// Any object that can live in a scene
#[derive(Debug, Clone)]
pub enum GameObject {
    /// The player character
    Player(Player),
    /// Walking enemy
    Goomba(Goomba),
    /// Collectible
    Coin(Coin),
    /// Solid geometry
    Block(Block),
    /// Scene switch
    Portal(Portal),
}

macro_rules! each_variant {
    ($self:expr, $object:ident => $body:expr) => {
        match $self {
            GameObject::Player($object) => $body,
            GameObject::Goomba($object) => $body,
            GameObject::Coin($object) => $body,
            GameObject::Block($object) => $body,
            GameObject::Portal($object) => $body,
        }
    };
}

impl GameObject {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Player(_) => "player",
            Self::Goomba(_) => "goomba",
            Self::Coin(_) => "coin",
            Self::Block(_) => "block",
            Self::Portal(_) => "portal",
        }
    }

    /// Behaviour that runs before the collision pass
    pub fn pre_update(&mut self, id: EntityId, dt: f32, input: &PlayerInput, commands: &mut Commands<GameMessage>) {
        match self {
            Self::Player(player) => player.pre_update(dt, input, commands),
            Self::Goomba(goomba) => goomba.pre_update(id, dt, commands),
            Self::Coin(_) | Self::Block(_) | Self::Portal(_) => {}
        }
    }

    /// Integrate whatever the collision pass left unsettled
    pub fn finish_step(&mut self, dt: f32) {
        if let Some(body) = self.body_mut() {
            body.finish_step(dt);
        }
    }

    /// Kinematic state of moving objects
    pub fn body(&self) -> Option<&Body> {
        match self {
            Self::Player(player) => Some(player.body()),
            Self::Goomba(goomba) => Some(goomba.body()),
            Self::Coin(_) | Self::Block(_) | Self::Portal(_) => None,
        }
    }

    fn body_mut(&mut self) -> Option<&mut Body> {
        match self {
            Self::Player(player) => Some(player.body_mut()),
            Self::Goomba(goomba) => Some(goomba.body_mut()),
            Self::Coin(_) | Self::Block(_) | Self::Portal(_) => None,
        }
    }

    /// The player, if this is one
    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }

    /// The player, if this is one
    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }

    /// The goomba, if this is one
    pub fn as_goomba(&self) -> Option<&Goomba> {
        match self {
            Self::Goomba(goomba) => Some(goomba),
            _ => None,
        }
    }

    /// The goomba, if this is one
    pub fn as_goomba_mut(&mut self) -> Option<&mut Goomba> {
        match self {
            Self::Goomba(goomba) => Some(goomba),
            _ => None,
        }
    }
}

impl Collidable for GameObject {
    type Message = GameMessage;

    fn bounding_box(&self) -> BoundingBox {
        each_variant!(self, object => object.bounding_box())
    }

    fn position(&self) -> Vec2 {
        each_variant!(self, object => object.position())
    }

    fn velocity(&self) -> Vec2 {
        each_variant!(self, object => object.velocity())
    }

    fn is_collidable(&self) -> bool {
        each_variant!(self, object => object.is_collidable())
    }

    fn profile(&self) -> ColliderProfile {
        each_variant!(self, object => object.profile())
    }

    fn on_no_collision(&mut self, dt: f32, commands: &mut Commands<GameMessage>) {
        each_variant!(self, object => object.on_no_collision(dt, commands))
    }

    fn on_collision_with(&mut self, event: &CollisionEvent, commands: &mut Commands<GameMessage>) {
        each_variant!(self, object => object.on_collision_with(event, commands))
    }
}

impl From<Player> for GameObject {
    fn from(player: Player) -> Self {
        Self::Player(player)
    }
}

impl From<Goomba> for GameObject {
    fn from(goomba: Goomba) -> Self {
        Self::Goomba(goomba)
    }
}

impl From<Coin> for GameObject {
    fn from(coin: Coin) -> Self {
        Self::Coin(coin)
    }
}

impl From<Block> for GameObject {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Portal> for GameObject {
    fn from(portal: Portal) -> Self {
        Self::Portal(portal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameplayConfig;
    use platformer_engine::physics::CollisionLayers;

    #[test]
    fn test_profiles_describe_capabilities() {
        let tuning = GameplayConfig::default();
        let objects: Vec<GameObject> = vec![
            Player::new(Vec2::new(0.0, 0.0), PlayerForm::Small, &tuning).into(),
            Goomba::new(Vec2::new(0.0, 0.0), &tuning).into(),
            Coin::new(Vec2::zeros()).into(),
            Block::new(Vec2::zeros(), Vec2::new(16.0, 16.0)).into(),
            Portal::new(Vec2::zeros(), Vec2::new(16.0, 32.0), 7).into(),
        ];

        let profiles: Vec<_> = objects.iter().map(Collidable::profile).collect();
        assert_eq!(profiles[0].layer, CollisionLayers::PLAYER);
        assert!(!profiles[0].is_blocking());
        assert!(profiles[1].capabilities.contains(platformer_engine::ecs::Capabilities::STOMPABLE));
        assert!(profiles[2].is_collectible());
        assert!(objects[3].is_blocking());
        assert_eq!(profiles[4].triggers_scene_switch(), Some(7));

        let kinds: Vec<_> = objects.iter().map(GameObject::kind).collect();
        assert_eq!(kinds, ["player", "goomba", "coin", "block", "portal"]);
    }

    #[test]
    fn test_only_movers_have_bodies() {
        let tuning = GameplayConfig::default();
        let player: GameObject = Player::new(Vec2::zeros(), PlayerForm::Big, &tuning).into();
        let block: GameObject = Block::new(Vec2::zeros(), Vec2::new(1.0, 1.0)).into();
        assert!(player.body().is_some());
        assert!(block.body().is_none());
        assert!(player.as_player().is_some());
        assert!(block.as_goomba().is_none());
    }
}
