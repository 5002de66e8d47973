//! Per-frame collision orchestration
//!
//! Scan, filter, notify. For each source entity the system sweeps its planned
//! displacement against every live collidable, picks at most one winner per
//! axis and hands the winners to the entity's own callback. The system never
//! moves an entity and never removes one: position and velocity response is
//! the callback's job, and despawns requested by callbacks only mark the
//! target dead so later scans in the same frame skip it. Physical removal
//! happens in [`World::compact`], called by the game loop at end of frame.

use log::{debug, trace, warn};

use crate::core::config::CollisionConfig;
use crate::ecs::{display_id, Collidable, Commands, EntityId, World};
use crate::physics::collision_event::Participant;
use crate::physics::filter::EventFilter;
use crate::physics::scanner::Scanner;

/// What happened to one source in [`CollisionSystem::process`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Source missing, marked for removal, or not collidable; nothing called
    Inactive,
    /// No winners; `on_no_collision` was called once
    NoCollision,
    /// At least one winner; `on_collision_with` was called `dispatched` times
    /// and `skipped` stale winners were dropped
    Collided { dispatched: usize, skipped: usize },
}

/// Summary of one [`CollisionSystem::process_all`] pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Sources that were scanned
    pub processed: usize,
    /// Sources skipped as inactive
    pub inactive: usize,
    /// Sources that had nothing to hit
    pub no_collision: usize,
    /// `on_collision_with` calls made
    pub dispatched: usize,
    /// Winners dropped because their target died first
    pub skipped: usize,
    /// Entities marked for removal by callbacks during the pass
    pub despawned: usize,
}

/// Detect-and-notify collision pipeline
///
/// Stateless between frames; holds only its configuration and filter.
#[derive(Debug)]
pub struct CollisionSystem {
    config: CollisionConfig,
    filter: EventFilter,
}

impl CollisionSystem {
    /// System with default configuration
    pub fn new() -> Self {
        Self::with_config(CollisionConfig::default())
    }

    /// System using `config`; installs the layer veto when layer filtering is on
    pub fn with_config(config: CollisionConfig) -> Self {
        let filter = if config.layer_filtering {
            EventFilter::layers()
        } else {
            EventFilter::new()
        };
        Self { config, filter }
    }

    /// Replace the event filter
    pub fn with_filter(mut self, filter: EventFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Active event filter
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    fn scanner(&self, dt: f32) -> Scanner {
        let scanner = Scanner::new(&self.config);
        if self.config.relative_motion {
            scanner.relative_to_targets(dt)
        } else {
            scanner
        }
    }

    /// Run one source through scan, filter and dispatch
    ///
    /// Winners are dispatched earliest first (X before Y on equal times).
    /// Before each dispatch the target is checked again: if an earlier
    /// callback despawned it the event is marked deleted and skipped, and if
    /// the source despawned itself nothing further is dispatched to it.
    /// Despawns queued on `commands` are applied after every callback.
    pub fn process<E: Collidable>(
        &self,
        world: &mut World<E>,
        source: EntityId,
        dt: f32,
        commands: &mut Commands<E::Message>,
    ) -> ProcessOutcome {
        let Some(entity) = world.get(source) else {
            warn!("collision source {} is not in the world", display_id(source));
            return ProcessOutcome::Inactive;
        };
        if !world.is_alive(source) || !entity.is_collidable() {
            return ProcessOutcome::Inactive;
        }

        let displacement = entity.velocity() * dt;
        let participant = Participant {
            id: source,
            profile: entity.profile(),
            bounding_box: entity.bounding_box(),
        };

        let events = self.scanner(dt).scan(&participant, displacement, world.entities());
        if self.config.trace_events {
            for event in &events {
                trace!(
                    "scan {} -> {}: t={:.4} n=({}, {}) blocking={}",
                    display_id(event.source),
                    display_id(event.target),
                    event.time,
                    event.normal.x,
                    event.normal.y,
                    event.is_blocking()
                );
            }
        }

        let winners = self.filter.filter(&events);
        debug!(
            "{}: {} events, {} winners, displacement ({:.3}, {:.3})",
            display_id(source),
            events.len(),
            winners.len(),
            displacement.x,
            displacement.y
        );

        if winners.is_empty() {
            if let Some(entity) = world.get_mut(source) {
                entity.on_no_collision(dt, commands);
            }
            commands.apply_despawns(world);
            return ProcessOutcome::NoCollision;
        }

        let mut dispatched = 0;
        let mut skipped = 0;
        for mut event in winners.into_dispatch_order() {
            if !world.is_alive(source) {
                skipped += 1;
                continue;
            }
            if !world.is_alive(event.target) {
                event.mark_deleted();
            }
            if event.is_deleted() {
                trace!("skipping stale event {} -> {}", display_id(source), display_id(event.target));
                skipped += 1;
                continue;
            }

            if let Some(entity) = world.get_mut(source) {
                entity.on_collision_with(&event, commands);
                dispatched += 1;
            }
            commands.apply_despawns(world);
        }

        ProcessOutcome::Collided { dispatched, skipped }
    }

    /// Process every live entity once, in registration order
    ///
    /// Entities despawned earlier in the pass are skipped, both as sources
    /// and as targets.
    pub fn process_all<E: Collidable>(
        &self,
        world: &mut World<E>,
        dt: f32,
        commands: &mut Commands<E::Message>,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        let live_before = world.live_count();

        for id in world.ids() {
            match self.process(world, id, dt, commands) {
                ProcessOutcome::Inactive => stats.inactive += 1,
                ProcessOutcome::NoCollision => {
                    stats.processed += 1;
                    stats.no_collision += 1;
                }
                ProcessOutcome::Collided { dispatched, skipped } => {
                    stats.processed += 1;
                    stats.dispatched += dispatched;
                    stats.skipped += skipped;
                }
            }
        }

        stats.despawned = live_before.saturating_sub(world.live_count());
        debug!(
            "collision pass: {} processed, {} dispatched, {} skipped, {} despawned",
            stats.processed, stats.dispatched, stats.skipped, stats.despawned
        );
        stats
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Capabilities, ColliderProfile};
    use crate::foundation::math::Vec2;
    use crate::physics::collision::{Axis, BoundingBox};
    use crate::physics::collision_event::CollisionEvent;
    use crate::physics::collision_layers::CollisionLayers;
    use approx::assert_relative_eq;

    /// Minimal collidable that records what the engine told it
    struct Probe {
        bounds: BoundingBox,
        velocity: Vec2,
        profile: ColliderProfile,
        hits: Vec<CollisionEvent>,
        misses: usize,
        /// Despawn whatever it hits
        consumes: bool,
        /// Despawn itself on first hit
        fragile: bool,
        /// Despawn this entity on any hit
        despawn_on_hit: Option<EntityId>,
    }

    impl Probe {
        fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
            Self {
                bounds: BoundingBox::new(left, top, left + width, top + height),
                velocity: Vec2::zeros(),
                profile: ColliderProfile::new(CollisionLayers::PLAYER),
                hits: Vec::new(),
                misses: 0,
                consumes: false,
                fragile: false,
                despawn_on_hit: None,
            }
        }

        fn solid(left: f32, top: f32, width: f32, height: f32) -> Self {
            let mut probe = Self::new(left, top, width, height);
            probe.profile = ColliderProfile::new(CollisionLayers::ENVIRONMENT).blocking();
            probe
        }

        fn moving(mut self, vx: f32, vy: f32) -> Self {
            self.velocity = Vec2::new(vx, vy);
            self
        }
    }

    impl Collidable for Probe {
        type Message = EntityId;

        fn bounding_box(&self) -> BoundingBox {
            self.bounds
        }
        fn position(&self) -> Vec2 {
            self.bounds.center()
        }
        fn velocity(&self) -> Vec2 {
            self.velocity
        }
        fn is_collidable(&self) -> bool {
            true
        }
        fn profile(&self) -> ColliderProfile {
            self.profile
        }
        fn on_no_collision(&mut self, _dt: f32, _commands: &mut Commands<EntityId>) {
            self.misses += 1;
        }
        fn on_collision_with(&mut self, event: &CollisionEvent, commands: &mut Commands<EntityId>) {
            self.hits.push(event.clone());
            if self.consumes {
                commands.despawn(event.target);
                commands.send(event.target);
            }
            if self.fragile {
                commands.despawn(event.source);
            }
            if let Some(id) = self.despawn_on_hit {
                commands.despawn(id);
            }
        }
    }

    #[test]
    fn test_falling_onto_platform_yields_one_vertical_event() {
        let mut world = World::new();
        let faller = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(0.0, 5.0));
        let platform = world.create_entity(Probe::solid(-5.0, 3.0, 10.0, 1.0));
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, faller, 1.0, &mut commands);
        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 1, skipped: 0 });

        let probe = world.get(faller).unwrap();
        assert_eq!(probe.misses, 0);
        assert_eq!(probe.hits.len(), 1);
        let hit = &probe.hits[0];
        assert_eq!(hit.target, platform);
        assert_eq!(hit.axis(), Axis::Y);
        assert_eq!(hit.normal, Vec2::new(0.0, -1.0));
        assert_relative_eq!(hit.time, 0.4);
        assert!(probe.hits.iter().all(|e| e.axis() != Axis::X));
    }

    #[test]
    fn test_one_winner_per_axis_dispatches_twice() {
        let mut world = World::new();
        let mover = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(4.0, 4.0));
        // Floor under the mover and a wall to its right
        let floor = world.create_entity(Probe::solid(-5.0, 2.0, 20.0, 1.0));
        let wall = world.create_entity(Probe::solid(3.0, -5.0, 1.0, 8.0));
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, mover, 1.0, &mut commands);
        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 2, skipped: 0 });

        let probe = world.get(mover).unwrap();
        assert_eq!(probe.misses, 0);
        let targets: Vec<_> = probe.hits.iter().map(|e| (e.target, e.axis())).collect();
        // Floor at t=0.25 comes before the wall at t=0.5
        assert_eq!(targets, vec![(floor, Axis::Y), (wall, Axis::X)]);
    }

    #[test]
    fn test_no_winner_calls_no_collision_once() {
        let mut world = World::new();
        let mover = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(1.0, 0.0));
        world.create_entity(Probe::solid(10.0, 0.0, 1.0, 1.0));
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, mover, 1.0, &mut commands);
        assert_eq!(outcome, ProcessOutcome::NoCollision);

        let probe = world.get(mover).unwrap();
        assert_eq!(probe.misses, 1);
        assert!(probe.hits.is_empty());
        // The engine does not move anything
        assert_eq!(probe.bounds, BoundingBox::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_callbacks_can_despawn_their_targets() {
        let mut world = World::new();
        let mut eater = Probe::new(0.0, 0.0, 1.0, 1.0).moving(4.0, 4.0);
        eater.consumes = true;
        let eater = world.create_entity(eater);
        let floor = world.create_entity(Probe::solid(-5.0, 2.0, 20.0, 1.0));
        let wall = world.create_entity(Probe::solid(3.0, -5.0, 1.0, 8.0));
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, eater, 1.0, &mut commands);

        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 2, skipped: 0 });
        assert!(!world.is_alive(floor));
        assert!(!world.is_alive(wall));
        assert!(!commands.has_pending_despawns());
        assert_eq!(commands.drain_messages(), vec![floor, wall]);
    }

    #[test]
    fn test_stale_target_produces_no_callback() {
        crate::foundation::logging::init();
        let mut world = World::new();
        let mover = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(4.0, 4.0));
        world.create_entity(Probe::solid(-5.0, 2.0, 20.0, 1.0));
        let wall = world.create_entity(Probe::solid(3.0, -5.0, 1.0, 8.0));
        // Landing on the floor knocks the wall down before its event is dispatched
        world.get_mut(mover).unwrap().despawn_on_hit = Some(wall);
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, mover, 1.0, &mut commands);

        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 1, skipped: 1 });
        let probe = world.get(mover).unwrap();
        assert_eq!(probe.hits.len(), 1);
        assert!(probe.hits.iter().all(|e| e.target != wall));
        assert_eq!(probe.misses, 0);
    }

    #[test]
    fn test_source_despawning_itself_stops_dispatch() {
        let mut world = World::new();
        let mut glass = Probe::new(0.0, 0.0, 1.0, 1.0).moving(4.0, 4.0);
        glass.fragile = true;
        let glass = world.create_entity(glass);
        world.create_entity(Probe::solid(-5.0, 2.0, 20.0, 1.0));
        world.create_entity(Probe::solid(3.0, -5.0, 1.0, 8.0));
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, glass, 1.0, &mut commands);
        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 1, skipped: 1 });
        assert!(!world.is_alive(glass));
        assert_eq!(world.get(glass).unwrap().hits.len(), 1);
    }

    #[test]
    fn test_marked_source_is_inactive() {
        let mut world = World::new();
        let mover = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(1.0, 0.0));
        world.mark_for_removal(mover);
        let mut commands = Commands::new();

        let outcome = CollisionSystem::new().process(&mut world, mover, 1.0, &mut commands);
        assert_eq!(outcome, ProcessOutcome::Inactive);
        assert_eq!(world.get(mover).unwrap().misses, 0);
    }

    #[test]
    fn test_process_all_skips_entities_despawned_mid_frame() {
        let mut world = World::new();
        let mut eater = Probe::new(0.0, 0.0, 1.0, 1.0).moving(2.0, 0.0);
        eater.consumes = true;
        let eater = world.create_entity(eater);
        // Prey moves too, but it is eaten before its turn
        let prey = world.create_entity(Probe::new(2.0, 0.0, 1.0, 1.0).moving(0.0, 1.0));
        let bystander = world.create_entity(Probe::solid(20.0, 20.0, 1.0, 1.0));
        let mut commands = Commands::new();

        let stats = CollisionSystem::new().process_all(&mut world, 1.0, &mut commands);

        assert_eq!(stats.dispatched, 1);
        assert_eq!(stats.despawned, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.no_collision, 1);
        assert_eq!(world.get(prey).unwrap().misses, 0);
        assert_eq!(world.get(bystander).unwrap().misses, 1);
        assert_eq!(world.get(eater).unwrap().hits.len(), 1);

        // Removal is deferred until the game loop compacts
        assert_eq!(world.len(), 3);
        assert_eq!(world.compact(), 1);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_layer_filtering_can_be_disabled() {
        let aloof = ColliderProfile::new(CollisionLayers::ENEMY)
            .with_mask(CollisionLayers::ENVIRONMENT)
            .with_capabilities(Capabilities::BLOCKING);

        let build = || {
            let mut world = World::new();
            let mover = world.create_entity(Probe::new(0.0, 0.0, 1.0, 1.0).moving(2.0, 0.0));
            let mut enemy = Probe::new(2.0, 0.0, 1.0, 1.0);
            enemy.profile = aloof;
            world.create_entity(enemy);
            (world, mover)
        };

        let (mut world, mover) = build();
        let outcome = CollisionSystem::new().process(&mut world, mover, 1.0, &mut Commands::new());
        assert_eq!(outcome, ProcessOutcome::NoCollision);

        let (mut world, mover) = build();
        let system = CollisionSystem::with_config(CollisionConfig::default().with_layer_filtering(false));
        let outcome = system.process(&mut world, mover, 1.0, &mut Commands::new());
        assert_eq!(outcome, ProcessOutcome::Collided { dispatched: 1, skipped: 0 });
    }
}
