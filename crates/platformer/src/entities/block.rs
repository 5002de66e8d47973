//! Solid level geometry

use platformer_engine::ecs::{Collidable, ColliderProfile, Commands};
use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{BoundingBox, CollisionEvent, CollisionLayers};

use crate::messages::GameMessage;

/// Static, blocking rectangle: ground, walls, pipes, ledges
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    bounds: BoundingBox,
}

impl Block {
    /// Block whose top-left corner is `origin`
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            bounds: BoundingBox::from_origin_size(origin, size),
        }
    }
}

impl Collidable for Block {
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
        ColliderProfile::new(CollisionLayers::ENVIRONMENT).blocking()
    }

    fn on_no_collision(&mut self, _dt: f32, _commands: &mut Commands<GameMessage>) {}

    fn on_collision_with(&mut self, _event: &CollisionEvent, _commands: &mut Commands<GameMessage>) {}
}
