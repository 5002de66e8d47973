//! Specialized collection types

pub use slotmap::{new_key_type, Key, SlotMap};

new_key_type! {
    /// Generational handle to an entity stored in a [`crate::ecs::World`]
    ///
    /// Handles stay valid while the slot is alive and never alias a later
    /// entity that reuses the same slot.
    pub struct EntityId;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<EntityId, T>;
