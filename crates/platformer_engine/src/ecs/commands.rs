//! Deferred commands raised from inside collision callbacks
//!
//! A callback only ever holds `&mut` to its own entity, so anything it wants
//! done to the rest of the scene is queued here: despawns are applied by the
//! collision system as liveness marks right after the callback returns, and
//! messages are drained by the game loop.

use super::entity::EntityId;
use super::world::World;

/// Command buffer handed to entity callbacks
#[derive(Debug)]
pub struct Commands<M> {
    despawns: Vec<EntityId>,
    messages: Vec<M>,
}

impl<M> Commands<M> {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            despawns: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Request removal of `id` (it becomes non-collidable immediately)
    pub fn despawn(&mut self, id: EntityId) {
        self.despawns.push(id);
    }

    /// Raise a message for the game loop
    pub fn send(&mut self, message: M) {
        self.messages.push(message);
    }

    /// Whether any despawn is waiting to be applied
    pub fn has_pending_despawns(&self) -> bool {
        !self.despawns.is_empty()
    }

    /// Apply queued despawns as removal marks on `world`
    ///
    /// Returns how many entities changed from alive to marked.
    pub fn apply_despawns<E>(&mut self, world: &mut World<E>) -> usize {
        self.despawns
            .drain(..)
            .filter(|&id| world.mark_for_removal(id))
            .count()
    }

    /// Messages raised so far
    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    /// Take every queued message, leaving the buffer empty
    pub fn drain_messages(&mut self) -> Vec<M> {
        std::mem::take(&mut self.messages)
    }

    /// Drop everything queued
    pub fn clear(&mut self) {
        self.despawns.clear();
        self.messages.clear();
    }
}

impl<M> Default for Commands<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_despawns_marks_once() {
        let mut world = World::new();
        let a = world.create_entity(());
        let mut commands: Commands<()> = Commands::new();
        commands.despawn(a);
        commands.despawn(a);
        assert!(commands.has_pending_despawns());
        assert_eq!(commands.apply_despawns(&mut world), 1);
        assert!(!commands.has_pending_despawns());
        assert!(!world.is_alive(a));
    }

    #[test]
    fn test_drain_messages_empties_buffer() {
        let mut commands = Commands::new();
        commands.send("coin");
        commands.send("portal");
        assert_eq!(commands.messages().len(), 2);
        assert_eq!(commands.drain_messages(), vec!["coin", "portal"]);
        assert!(commands.messages().is_empty());
    }
}
