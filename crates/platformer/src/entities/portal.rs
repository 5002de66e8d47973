//! Door to another scene

use platformer_engine::ecs::{Collidable, ColliderProfile, Commands, SceneId};
use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{BoundingBox, CollisionEvent, CollisionLayers};

use crate::messages::GameMessage;

/// Touching it asks the game loop to switch to `destination`
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    bounds: BoundingBox,
    destination: SceneId,
}

impl Portal {
    /// Portal whose top-left corner is `origin`
    pub fn new(origin: Vec2, size: Vec2, destination: SceneId) -> Self {
        Self {
            bounds: BoundingBox::from_origin_size(origin, size),
            destination,
        }
    }
}

impl Collidable for Portal {
    type Message = GameMessage;

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn position(&self) -> Vec2 {
        self.bounds.center()
    }

    fn velocity(&self) -> Vec2 {
        Vec2::zeros()
    }

    fn is_collidable(&self) -> bool {
        true
    }

    fn profile(&self) -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::PORTAL)
            .with_mask(CollisionLayers::PLAYER)
            .with_scene_switch(self.destination)
    }

    fn on_no_collision(&mut self, _dt: f32, _commands: &mut Commands<GameMessage>) {}

    fn on_collision_with(&mut self, _event: &CollisionEvent, _commands: &mut Commands<GameMessage>) {}
}
