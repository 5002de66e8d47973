//! Collectible coin

use platformer_engine::ecs::{Capabilities, Collidable, ColliderProfile, Commands};
use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{BoundingBox, CollisionEvent, CollisionLayers};

use crate::messages::GameMessage;

/// Floating coin; the player collects it on touch
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    center: Vec2,
}

impl Coin {
    /// Coin centred on `center`
    pub fn new(center: Vec2) -> Self {
        Self { center }
    }
}

impl Collidable for Coin {
    type Message = GameMessage;

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_half_extents(self.center, Vec2::new(5.0, 7.0))
    }

    fn position(&self) -> Vec2 {
        self.center
    }

    fn velocity(&self) -> Vec2 {
        Vec2::zeros()
    }

    fn is_collidable(&self) -> bool {
        true
    }

    fn profile(&self) -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::PICKUP)
            .with_mask(CollisionLayers::PLAYER)
            .with_capabilities(Capabilities::COLLECTIBLE)
    }

    fn on_no_collision(&mut self, _dt: f32, _commands: &mut Commands<GameMessage>) {}

    fn on_collision_with(&mut self, _event: &CollisionEvent, _commands: &mut Commands<GameMessage>) {}
}
