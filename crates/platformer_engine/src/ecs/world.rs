//! Entity arena
//!
//! The single authoritative owner of every entity in a scene. Entities are
//! addressed by generational [`EntityId`] handles and iterated in
//! registration order. Removal is two-phase: [`World::mark_for_removal`]
//! flips a liveness flag (the slot stays where it is, so handles and any
//! in-flight iteration stay valid) and [`World::compact`] drops every marked
//! slot once the frame is over.

use super::entity::{display_id, EntityId};
use crate::foundation::collections::HandleMap;

#[derive(Debug)]
struct Slot<E> {
    entity: E,
    alive: bool,
}

/// Arena of entities with deferred removal
#[derive(Debug)]
pub struct World<E> {
    slots: HandleMap<Slot<E>>,
    order: Vec<EntityId>,
}

impl<E> World<E> {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            slots: HandleMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Create a world with room for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HandleMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Register a new entity at the end of the update order
    pub fn create_entity(&mut self, entity: E) -> EntityId {
        let id = self.slots.insert(Slot { entity, alive: true });
        self.order.push(id);
        id
    }

    /// Get an entity, including one already marked for removal
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.slots.get(id).map(|slot| &slot.entity)
    }

    /// Get a mutable entity, including one already marked for removal
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut E> {
        self.slots.get_mut(id).map(|slot| &mut slot.entity)
    }

    /// Whether `id` refers to an entity that is present and not marked
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slots.get(id).is_some_and(|slot| slot.alive)
    }

    /// Whether `id` still has a slot (marked or not)
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(id)
    }

    /// Mark an entity for removal at the next [`World::compact`]
    ///
    /// Returns `true` if this call changed the entity from alive to marked.
    pub fn mark_for_removal(&mut self, id: EntityId) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) if slot.alive => {
                slot.alive = false;
                log::trace!("entity {} marked for removal", display_id(id));
                true
            }
            _ => false,
        }
    }

    /// Live entities in registration order
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &E)> + '_ {
        self.order.iter().filter_map(move |&id| {
            self.slots
                .get(id)
                .filter(|slot| slot.alive)
                .map(|slot| (id, &slot.entity))
        })
    }

    /// Snapshot of live handles in registration order
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.iter().copied().filter(|&id| self.is_alive(id)).collect()
    }

    /// Physically remove every marked entity, keeping the order of the rest
    ///
    /// Returns the number of entities removed.
    pub fn compact(&mut self) -> usize {
        let before = self.order.len();
        let slots = &mut self.slots;
        self.order.retain(|&id| {
            let alive = slots.get(id).is_some_and(|slot| slot.alive);
            if !alive {
                slots.remove(id);
            }
            alive
        });
        let removed = before - self.order.len();
        if removed > 0 {
            log::debug!("compacted {removed} entities, {} remain", self.order.len());
        }
        removed
    }

    /// Number of slots, including entities marked for removal
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the world holds no slots at all
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of entities not marked for removal
    pub fn live_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.alive).count()
    }
}

impl<E> Default for World<E> {
    fn default() -> Self {
        Self::new()
    }
}
