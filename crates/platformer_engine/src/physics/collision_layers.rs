//! Collision layer system for filtering collision detection
//!
//! Every collidable entity sits on one layer (its kind) and carries a mask of
//! the layers it interacts with. A pair interacts only when each side's layer
//! is in the other side's mask.

use bitflags::bitflags;

use crate::physics::collision_event::CollisionEvent;

bitflags! {
    /// Collision layer bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;
        /// Enemy character layer
        const ENEMY = 1 << 1;
        /// Projectiles (fireballs, shells, etc.)
        const PROJECTILE = 1 << 2;
        /// Static environment geometry (ground, bricks, pipes)
        const ENVIRONMENT = 1 << 3;
        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 4;
        /// Pickups and collectibles
        const PICKUP = 1 << 5;
        /// Scene-switch doors
        const PORTAL = 1 << 6;
    }
}

impl CollisionLayers {
    /// Check if two entities should collide based on their layers and masks
    ///
    /// # Example
    /// ```
    /// use platformer_engine::physics::CollisionLayers;
    ///
    /// // Player collides with enemies and environment
    /// let player_layer = CollisionLayers::PLAYER;
    /// let player_mask = CollisionLayers::ENEMY | CollisionLayers::ENVIRONMENT;
    ///
    /// // Enemies collide with the player and the environment, never with each other
    /// let enemy_layer = CollisionLayers::ENEMY;
    /// let enemy_mask = CollisionLayers::PLAYER | CollisionLayers::ENVIRONMENT;
    ///
    /// assert!(CollisionLayers::should_collide(player_layer, player_mask, enemy_layer, enemy_mask));
    /// assert!(!CollisionLayers::should_collide(enemy_layer, enemy_mask, enemy_layer, enemy_mask));
    /// ```
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        // A's layer must be in B's mask AND B's layer must be in A's mask
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }

    /// Helper to create a mask from multiple layers
    pub fn mask(layers: &[Self]) -> Self {
        layers.iter().fold(Self::empty(), |acc, &layer| acc | layer)
    }
}

/// Category predicate for the event filter
///
/// Returns `true` (veto) when the source and target profiles say the two
/// entities never interact, e.g. enemies whose mask leaves out other enemies.
pub fn layer_veto(event: &CollisionEvent) -> bool {
    let source = &event.source_profile;
    let target = &event.target_profile;
    !CollisionLayers::should_collide(source.layer, source.mask, target.layer, target.mask)
}
