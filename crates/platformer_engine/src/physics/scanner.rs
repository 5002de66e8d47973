//! Scanner: sweep one source against every candidate target
//!
//! Produces an unordered list of events; choosing between them is the
//! filter's job. Nothing is mutated here.

use crate::core::config::CollisionConfig;
use crate::ecs::{Collidable, EntityId};
use crate::foundation::math::Vec2;
use crate::physics::collision::sweep_with_epsilon;
use crate::physics::collision_event::{CollisionEvent, Participant};

/// Sweeps a source box against candidate targets
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    time_epsilon: f32,
    relative_dt: Option<f32>,
}

impl Scanner {
    /// Scanner using the tolerance from `config`
    ///
    /// Relative motion is left off; see [`Scanner::relative_to_targets`].
    pub fn new(config: &CollisionConfig) -> Self {
        Self {
            time_epsilon: config.time_epsilon,
            relative_dt: None,
        }
    }

    /// Subtract each target's own displacement over `dt` before sweeping
    pub fn relative_to_targets(mut self, dt: f32) -> Self {
        self.relative_dt = Some(dt);
        self
    }

    /// Sweep `source` by `displacement` against every candidate
    ///
    /// Skips the source itself and targets that are not collidable right now.
    /// Only hits with `0 <= t <= 1` become events.
    pub fn scan<'a, E, I>(&self, source: &Participant, displacement: Vec2, candidates: I) -> Vec<CollisionEvent>
    where
        E: Collidable + 'a,
        I: IntoIterator<Item = (EntityId, &'a E)>,
    {
        let mut events = Vec::new();

        for (id, target) in candidates {
            if id == source.id || !target.is_collidable() {
                continue;
            }

            let relative = match self.relative_dt {
                Some(dt) => displacement - target.velocity() * dt,
                None => displacement,
            };

            let target_box = target.bounding_box();
            let Some(hit) = sweep_with_epsilon(&source.bounding_box, relative, &target_box, self.time_epsilon) else {
                continue;
            };
            if !(0.0..=1.0).contains(&hit.time) {
                continue;
            }

            let target = Participant {
                id,
                profile: target.profile(),
                bounding_box: target_box,
            };
            events.push(CollisionEvent::new(hit, relative, *source, target));
        }

        events
    }
}
