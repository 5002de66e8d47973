//! Collision event record
//!
//! One event describes the earliest contact between a moving source and one
//! target over one frame's displacement. Events are built fresh by the
//! scanner, live only until the orchestrator has dispatched them, and carry
//! handles (never references) to both entities.

use crate::ecs::{ColliderProfile, EntityId};
use crate::foundation::math::Vec2;
use crate::physics::collision::{Axis, BoundingBox, SweepHit};

/// One side of a collision as seen at scan time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    /// Handle into the world
    pub id: EntityId,
    /// Kind and capabilities at scan time
    pub profile: ColliderProfile,
    /// Box at scan time
    pub bounding_box: BoundingBox,
}

/// Candidate impact between a source and a target
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Fraction of `displacement` at first contact, in `[0, 1]`
    pub time: f32,
    /// Struck face normal; exactly one component is `±1`
    pub normal: Vec2,
    /// Displacement of the source relative to the target that produced this event
    pub displacement: Vec2,
    /// The moving entity
    pub source: EntityId,
    /// The entity that was hit
    pub target: EntityId,
    /// Source kind and capabilities
    pub source_profile: ColliderProfile,
    /// Target kind and capabilities
    pub target_profile: ColliderProfile,
    /// Source box at scan time
    pub source_box: BoundingBox,
    /// Target box at scan time
    pub target_box: BoundingBox,
    deleted: bool,
}

impl CollisionEvent {
    /// Build an event from a sweep result
    pub fn new(hit: SweepHit, displacement: Vec2, source: Participant, target: Participant) -> Self {
        Self {
            time: hit.time,
            normal: hit.normal,
            displacement,
            source: source.id,
            target: target.id,
            source_profile: source.profile,
            target_profile: target.profile,
            source_box: source.bounding_box.normalized(),
            target_box: target.bounding_box.normalized(),
            deleted: false,
        }
    }

    /// Axis of the struck face
    pub fn axis(&self) -> Axis {
        if self.normal.x != 0.0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Whether the target physically stops the source
    pub fn is_blocking(&self) -> bool {
        self.target_profile.is_blocking()
    }

    /// Mark the event stale; stale events are never dispatched
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Whether the event has been marked stale
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// How far the source travels before contact
    pub fn contact_offset(&self) -> Vec2 {
        self.displacement * self.time
    }

    /// Signed distance along the normal's axis that puts the source face
    /// flush against the struck target face
    ///
    /// For a swept hit this is the displacement component times `time`; for
    /// boxes that were already interpenetrating it is the push-out distance.
    pub fn separation(&self) -> f32 {
        let s = &self.source_box;
        let t = &self.target_box;
        match self.axis() {
            Axis::X if self.normal.x < 0.0 => t.left - s.right,
            Axis::X => t.right - s.left,
            Axis::Y if self.normal.y < 0.0 => t.top - s.bottom,
            Axis::Y => t.bottom - s.top,
        }
    }

    /// [`CollisionEvent::separation`] as a vector on the normal's axis
    pub fn correction(&self) -> Vec2 {
        self.axis().vector(self.separation())
    }
}
