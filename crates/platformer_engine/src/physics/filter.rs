//! Per-axis winner selection
//!
//! From an unordered batch of scanned events, pick at most one event for the
//! horizontal axis and one for the vertical axis. Earliest impact wins; equal
//! times prefer a blocking target; anything still tied keeps scan order.

use std::cmp::Ordering;
use std::fmt;

use crate::physics::collision::Axis;
use crate::physics::collision_event::CollisionEvent;
use crate::physics::collision_layers::layer_veto;

/// Caller-supplied category rule; returning `true` vetoes the event
pub type Veto = Box<dyn Fn(&CollisionEvent) -> bool>;

/// Winning event per axis; either or both may be absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisWinners {
    /// Earliest horizontal impact
    pub x: Option<CollisionEvent>,
    /// Earliest vertical impact
    pub y: Option<CollisionEvent>,
}

impl AxisWinners {
    /// No winner on either axis
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Number of winners (0 to 2)
    pub fn len(&self) -> usize {
        usize::from(self.x.is_some()) + usize::from(self.y.is_some())
    }

    /// Winner on `axis`
    pub fn get(&self, axis: Axis) -> Option<&CollisionEvent> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
        }
    }

    /// Winners in the order they should be dispatched: earlier time first,
    /// X before Y when both hit at the same time
    pub fn into_dispatch_order(self) -> Vec<CollisionEvent> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if y.time < x.time => vec![y, x],
            (Some(x), Some(y)) => vec![x, y],
            (Some(x), None) => vec![x],
            (None, Some(y)) => vec![y],
            (None, None) => Vec::new(),
        }
    }
}

/// Selects per-axis winners, optionally vetoing events by category
#[derive(Default)]
pub struct EventFilter {
    veto: Option<Veto>,
}

impl EventFilter {
    /// Filter with no category rule
    pub fn new() -> Self {
        Self { veto: None }
    }

    /// Filter that vetoes pairs whose layers and masks never interact
    pub fn layers() -> Self {
        Self::with_veto(layer_veto)
    }

    /// Filter with a custom category rule
    pub fn with_veto(veto: impl Fn(&CollisionEvent) -> bool + 'static) -> Self {
        Self {
            veto: Some(Box::new(veto)),
        }
    }

    /// Whether a category rule is installed
    pub fn has_veto(&self) -> bool {
        self.veto.is_some()
    }

    /// Whether `event` may take part in selection at all
    pub fn admits(&self, event: &CollisionEvent) -> bool {
        !event.is_deleted() && !self.veto.as_ref().is_some_and(|veto| veto(event))
    }

    /// Pick the winner for each axis
    ///
    /// Pure over its input: the same batch always yields the same winners.
    pub fn filter(&self, events: &[CollisionEvent]) -> AxisWinners {
        AxisWinners {
            x: self.best_on(events, Axis::X).cloned(),
            y: self.best_on(events, Axis::Y).cloned(),
        }
    }

    fn best_on<'a>(&self, events: &'a [CollisionEvent], axis: Axis) -> Option<&'a CollisionEvent> {
        // min_by keeps the first of equal elements, which preserves scan order
        events
            .iter()
            .filter(|event| event.axis() == axis && self.admits(event))
            .min_by(|a, b| precedence(a, b))
    }
}

impl fmt::Debug for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventFilter").field("has_veto", &self.has_veto()).finish()
    }
}

/// Earlier time first, then blocking before non-blocking
fn precedence(a: &CollisionEvent, b: &CollisionEvent) -> Ordering {
    a.time
        .total_cmp(&b.time)
        .then_with(|| b.is_blocking().cmp(&a.is_blocking()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ColliderProfile, EntityId, World};
    use crate::foundation::math::Vec2;
    use crate::physics::collision::{BoundingBox, SweepHit};
    use crate::physics::collision_event::Participant;
    use crate::physics::collision_layers::CollisionLayers;

    struct Fixture {
        world: World<()>,
        source: EntityId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut world = World::new();
            let source = world.create_entity(());
            Self { world, source }
        }

        fn event(&mut self, time: f32, normal: Vec2, target_profile: ColliderProfile) -> CollisionEvent {
            let target = self.world.create_entity(());
            let unit = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
            CollisionEvent::new(
                SweepHit { time, normal },
                Vec2::new(1.0, 1.0),
                Participant {
                    id: self.source,
                    profile: ColliderProfile::new(CollisionLayers::PLAYER),
                    bounding_box: unit,
                },
                Participant {
                    id: target,
                    profile: target_profile,
                    bounding_box: unit,
                },
            )
        }
    }

    fn solid() -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::ENVIRONMENT).blocking()
    }

    fn pickup() -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::PICKUP)
    }

    fn left() -> Vec2 {
        Vec2::new(-1.0, 0.0)
    }

    fn up() -> Vec2 {
        Vec2::new(0.0, -1.0)
    }

    #[test]
    fn test_empty_batch_has_no_winners() {
        let winners = EventFilter::new().filter(&[]);
        assert!(winners.is_empty());
        assert_eq!(winners.len(), 0);
    }

    #[test]
    fn test_earliest_time_wins_per_axis() {
        let mut f = Fixture::new();
        let late = f.event(0.8, left(), solid());
        let early = f.event(0.3, left(), solid());
        let floor = f.event(0.5, up(), solid());
        let events = vec![late, early.clone(), floor.clone()];

        let winners = EventFilter::new().filter(&events);
        assert_eq!(winners.x.as_ref().map(|e| e.target), Some(early.target));
        assert_eq!(winners.y.as_ref().map(|e| e.target), Some(floor.target));
        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn test_tie_prefers_blocking_target() {
        let mut f = Fixture::new();
        let coin = f.event(0.5, up(), pickup());
        let ground = f.event(0.5, up(), solid());

        // Either scan order gives the same answer
        for events in [vec![coin.clone(), ground.clone()], vec![ground.clone(), coin.clone()]] {
            let winners = EventFilter::new().filter(&events);
            assert_eq!(winners.y.map(|e| e.target), Some(ground.target));
        }
    }

    #[test]
    fn test_full_tie_keeps_scan_order() {
        let mut f = Fixture::new();
        let first = f.event(0.25, left(), solid());
        let second = f.event(0.25, left(), solid());
        let winners = EventFilter::new().filter(&[first.clone(), second]);
        assert_eq!(winners.x.map(|e| e.target), Some(first.target));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut f = Fixture::new();
        let events = vec![
            f.event(0.7, left(), solid()),
            f.event(0.2, up(), pickup()),
            f.event(0.2, up(), solid()),
            f.event(0.1, left(), pickup()),
        ];
        let filter = EventFilter::layers();
        let first = filter.filter(&events);
        for _ in 0..5 {
            assert_eq!(filter.filter(&events), first);
        }
    }

    #[test]
    fn test_deleted_events_are_ignored() {
        let mut f = Fixture::new();
        let mut stale = f.event(0.1, up(), solid());
        stale.mark_deleted();
        let fallback = f.event(0.6, up(), solid());

        let winners = EventFilter::new().filter(&[stale, fallback.clone()]);
        assert_eq!(winners.y.map(|e| e.target), Some(fallback.target));
        assert!(winners.x.is_none());
    }

    #[test]
    fn test_veto_falls_back_to_next_best() {
        let mut f = Fixture::new();
        let coin = f.event(0.1, left(), pickup());
        let wall = f.event(0.4, left(), solid());
        let only_solid = EventFilter::with_veto(|event| !event.is_blocking());

        let winners = only_solid.filter(&[coin.clone(), wall.clone()]);
        assert_eq!(winners.x.map(|e| e.target), Some(wall.target));

        let winners = only_solid.filter(&[coin]);
        assert!(winners.is_empty());
    }

    #[test]
    fn test_layer_veto_uses_masks() {
        let mut f = Fixture::new();
        // Source is a PLAYER; this enemy's mask leaves players out
        let aloof = ColliderProfile::new(CollisionLayers::ENEMY).with_mask(CollisionLayers::ENVIRONMENT);
        let ignored = f.event(0.1, up(), aloof);
        let ground = f.event(0.9, up(), solid());

        let winners = EventFilter::layers().filter(&[ignored.clone(), ground.clone()]);
        assert_eq!(winners.y.map(|e| e.target), Some(ground.target));

        let winners = EventFilter::new().filter(&[ignored.clone(), ground]);
        assert_eq!(winners.y.map(|e| e.target), Some(ignored.target));
    }

    #[test]
    fn test_axes_are_independent() {
        let mut f = Fixture::new();
        let wall = f.event(0.9, left(), solid());
        let ground = f.event(0.1, up(), solid());
        let winners = EventFilter::new().filter(&[wall.clone(), ground.clone()]);
        assert_eq!(winners.get(Axis::X).map(|e| e.target), Some(wall.target));
        assert_eq!(winners.get(Axis::Y).map(|e| e.target), Some(ground.target));
    }

    #[test]
    fn test_dispatch_order() {
        let mut f = Fixture::new();
        let wall = f.event(0.9, left(), solid());
        let ground = f.event(0.1, up(), solid());

        let order = AxisWinners { x: Some(wall.clone()), y: Some(ground.clone()) }.into_dispatch_order();
        assert_eq!(order.iter().map(|e| e.target).collect::<Vec<_>>(), vec![ground.target, wall.target]);

        let corner = f.event(0.1, left(), solid());
        let order = AxisWinners { x: Some(corner.clone()), y: Some(ground.clone()) }.into_dispatch_order();
        assert_eq!(order.iter().map(|e| e.target).collect::<Vec<_>>(), vec![corner.target, ground.target]);
    }
}
