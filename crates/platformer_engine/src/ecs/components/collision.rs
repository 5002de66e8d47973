//! Collision contract for entities
//!
//! Any entity that wants to take part in collision detection implements
//! [`Collidable`]. The engine only ever reads geometry and flags through it,
//! and hands results back through the two callbacks; all physical response
//! (velocity changes, snapping, state transitions) is the entity's business.

use bitflags::bitflags;

use crate::ecs::Commands;
use crate::foundation::math::Vec2;
use crate::physics::collision::BoundingBox;
use crate::physics::collision_event::CollisionEvent;
use crate::physics::collision_layers::CollisionLayers;

/// Identifier of a scene a portal leads to
pub type SceneId = u32;

bitflags! {
    /// Response-relevant capabilities of a collision target
    ///
    /// Callbacks branch on these instead of on the concrete type of the
    /// entity they ran into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Running into it stops you
        const BLOCKING = 1 << 0;
        /// Touching it collects it
        const COLLECTIBLE = 1 << 1;
        /// Touching it hurts
        const DAMAGING = 1 << 2;
        /// Landing on it from above defeats it
        const STOMPABLE = 1 << 3;
    }
}

/// Snapshot of everything a collision partner needs to know about an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderProfile {
    /// Kind tag; also the layer used for mask filtering
    pub layer: CollisionLayers,
    /// Layers this entity interacts with
    pub mask: CollisionLayers,
    /// What happens to whoever runs into it
    pub capabilities: Capabilities,
    /// Scene to switch to on contact, for portals
    pub scene_switch: Option<SceneId>,
}

impl ColliderProfile {
    /// Profile on `layer` that interacts with every layer and has no capabilities
    pub fn new(layer: CollisionLayers) -> Self {
        Self {
            layer,
            mask: CollisionLayers::all(),
            capabilities: Capabilities::empty(),
            scene_switch: None,
        }
    }

    /// Restrict which layers this entity interacts with
    pub fn with_mask(mut self, mask: CollisionLayers) -> Self {
        self.mask = mask;
        self
    }

    /// Add capabilities
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    /// Mark as a solid obstacle
    pub fn blocking(self) -> Self {
        self.with_capabilities(Capabilities::BLOCKING)
    }

    /// Make contact switch to `scene`
    pub fn with_scene_switch(mut self, scene: SceneId) -> Self {
        self.scene_switch = Some(scene);
        self
    }

    /// Whether running into it produces a physical stop
    pub fn is_blocking(&self) -> bool {
        self.capabilities.contains(Capabilities::BLOCKING)
    }

    /// Whether touching it collects it
    pub fn is_collectible(&self) -> bool {
        self.capabilities.contains(Capabilities::COLLECTIBLE)
    }

    /// Scene id if touching it switches scenes
    pub fn triggers_scene_switch(&self) -> Option<SceneId> {
        self.scene_switch
    }
}

/// The capability set a collision-participating entity exposes
pub trait Collidable {
    /// Messages callbacks may raise for the game loop
    type Message;

    /// Current box for the present state; recomputed on every call
    fn bounding_box(&self) -> BoundingBox;

    /// Current position
    fn position(&self) -> Vec2;

    /// Current velocity in world units per second
    fn velocity(&self) -> Vec2;

    /// Whether the entity takes part in collision right now
    fn is_collidable(&self) -> bool;

    /// Kind, mask and capabilities
    fn profile(&self) -> ColliderProfile;

    /// Whether running into this entity stops the mover
    fn is_blocking(&self) -> bool {
        self.profile().is_blocking()
    }

    /// Nothing was hit this step; the entity applies its own full displacement
    fn on_no_collision(&mut self, dt: f32, commands: &mut Commands<Self::Message>);

    /// `event` won its axis this step
    fn on_collision_with(&mut self, event: &CollisionEvent, commands: &mut Commands<Self::Message>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builders() {
        let brick = ColliderProfile::new(CollisionLayers::ENVIRONMENT).blocking();
        assert!(brick.is_blocking());
        assert!(!brick.is_collectible());
        assert_eq!(brick.mask, CollisionLayers::all());

        let coin = ColliderProfile::new(CollisionLayers::PICKUP)
            .with_mask(CollisionLayers::PLAYER)
            .with_capabilities(Capabilities::COLLECTIBLE);
        assert!(coin.is_collectible());
        assert!(!coin.is_blocking());

        let door = ColliderProfile::new(CollisionLayers::PORTAL).with_scene_switch(2);
        assert_eq!(door.triggers_scene_switch(), Some(2));
    }

    #[test]
    fn test_capabilities_accumulate() {
        let goomba = ColliderProfile::new(CollisionLayers::ENEMY)
            .with_capabilities(Capabilities::DAMAGING)
            .with_capabilities(Capabilities::STOMPABLE);
        assert_eq!(goomba.capabilities, Capabilities::DAMAGING | Capabilities::STOMPABLE);
    }
}
