//! Walking enemy
//!
//! Walks in one direction until something stops it sideways, then turns
//! around. Landing on it from above squashes it; walking into the player
//! hurts the player.

use log::debug;

use platformer_engine::ecs::{Capabilities, Collidable, ColliderProfile, Commands, EntityId};
use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{Axis, BoundingBox, CollisionEvent, CollisionLayers};

use crate::config::GameplayConfig;
use crate::entities::body::Body;
use crate::messages::GameMessage;

fn standing_half_extents() -> Vec2 {
    Vec2::new(8.0, 8.0)
}

fn squashed_half_extents() -> Vec2 {
    Vec2::new(8.0, 4.0)
}

/// Walking enemy
#[derive(Debug, Clone)]
pub struct Goomba {
    body: Body,
    direction: f32,
    squashed_for: Option<f32>,
    speed: f32,
    gravity: f32,
    max_fall_speed: f32,
    squash_time: f32,
}

impl Goomba {
    /// Goomba standing with its feet at `feet`, walking left
    pub fn new(feet: Vec2, tuning: &GameplayConfig) -> Self {
        let half = standing_half_extents();
        Self {
            body: Body::new(Vec2::new(feet.x, feet.y - half.y), half),
            direction: -1.0,
            squashed_for: None,
            speed: tuning.goomba_speed,
            gravity: tuning.gravity,
            max_fall_speed: tuning.max_fall_speed,
            squash_time: tuning.squash_time,
        }
    }

    /// Kinematic state
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable kinematic state
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// -1 walking left, 1 walking right
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Whether it has been stomped
    pub fn is_squashed(&self) -> bool {
        self.squashed_for.is_some()
    }

    /// Flatten and stop; returns `false` if it was already squashed
    pub fn squash(&mut self) -> bool {
        if self.is_squashed() {
            return false;
        }
        self.squashed_for = Some(self.squash_time);
        self.body.velocity = Vec2::zeros();
        self.body.resize(squashed_half_extents());
        true
    }

    /// Walk and fall, or count down to removal once squashed
    pub fn pre_update(&mut self, id: EntityId, dt: f32, commands: &mut Commands<GameMessage>) {
        self.body.begin_step();

        if let Some(remaining) = self.squashed_for.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                commands.despawn(id);
            }
            return;
        }

        self.body.velocity.x = self.direction * self.speed;
        self.body.fall(self.gravity, self.max_fall_speed, dt);
    }
}

impl Collidable for Goomba {
    type Message = GameMessage;

    fn bounding_box(&self) -> BoundingBox {
        self.body.bounding_box()
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    fn is_collidable(&self) -> bool {
        !self.is_squashed()
    }

    fn profile(&self) -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::ENEMY)
            .with_mask(CollisionLayers::ENVIRONMENT | CollisionLayers::ENEMY | CollisionLayers::PLAYER)
            .with_capabilities(Capabilities::DAMAGING | Capabilities::STOMPABLE)
    }

    fn on_no_collision(&mut self, dt: f32, _commands: &mut Commands<GameMessage>) {
        self.body.move_freely(dt);
    }

    fn on_collision_with(&mut self, event: &CollisionEvent, commands: &mut Commands<GameMessage>) {
        match event.axis() {
            Axis::X => {
                if event.is_blocking() {
                    self.body.stop_against(event);
                } else {
                    self.body.hold(Axis::X);
                }
                // Turn away from the struck face
                self.direction = event.normal.x;
                debug!("goomba turned {}", if self.direction < 0.0 { "left" } else { "right" });

                if event.target_profile.layer == CollisionLayers::PLAYER {
                    commands.send(GameMessage::PlayerHurt { by: event.source });
                }
            }
            Axis::Y => {
                if event.is_blocking() {
                    self.body.stop_against(event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_engine::ecs::World;

    #[test]
    fn test_squash_once() {
        let mut goomba = Goomba::new(Vec2::new(0.0, 100.0), &GameplayConfig::default());
        assert!(goomba.is_collidable());
        assert!(goomba.squash());
        assert!(!goomba.squash());
        assert!(!goomba.is_collidable());
        assert_eq!(goomba.body().bottom(), 100.0);
    }

    #[test]
    fn test_squashed_goomba_despawns_after_delay() {
        let tuning = GameplayConfig { squash_time: 0.25, ..GameplayConfig::default() };
        let mut world = World::new();
        let id = world.create_entity(());
        let mut goomba = Goomba::new(Vec2::new(0.0, 100.0), &tuning);
        goomba.squash();

        let mut commands = Commands::new();
        goomba.pre_update(id, 0.125, &mut commands);
        assert!(!commands.has_pending_despawns());
        goomba.pre_update(id, 0.125, &mut commands);
        assert!(commands.has_pending_despawns());
        assert_eq!(commands.apply_despawns(&mut world), 1);
    }

    #[test]
    fn test_walks_in_its_direction() {
        let mut goomba = Goomba::new(Vec2::new(0.0, 100.0), &GameplayConfig::default());
        let mut world: World<()> = World::new();
        let id = world.create_entity(());
        goomba.pre_update(id, 0.1, &mut Commands::new());
        assert!(goomba.velocity().x < 0.0);
        assert!(goomba.velocity().y > 0.0);
    }
}
