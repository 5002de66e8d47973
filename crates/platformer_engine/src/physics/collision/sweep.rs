//! Swept-AABB time of impact
//!
//! Classic slab method: for each axis, find the fraction of the displacement
//! at which the moving box's leading edge reaches the target's near edge
//! (entry) and its trailing edge clears the far edge (exit). The boxes touch
//! when every axis has entered and none has exited yet.
//!
//! A zero displacement component never divides: that axis contributes an
//! unbounded window if the projections already overlap, and rules out any hit
//! otherwise.

use crate::core::config::DEFAULT_TIME_EPSILON;
use crate::foundation::math::{utils, Vec2};
use crate::physics::collision::aabb::BoundingBox;

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn of(self, v: &Vec2) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }

    /// Unit vector along this axis scaled by `length`
    pub fn vector(self, length: f32) -> Vec2 {
        match self {
            Self::X => Vec2::new(length, 0.0),
            Self::Y => Vec2::new(0.0, length),
        }
    }
}

/// Earliest contact between a moving box and a static one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the displacement at first contact, in `[0, 1]`
    pub time: f32,
    /// Face normal of the struck side; exactly one component is `±1`
    ///
    /// Points out of the struck face, towards the mover.
    pub normal: Vec2,
}

impl SweepHit {
    /// Axis the normal lies on
    pub fn axis(&self) -> Axis {
        if self.normal.x != 0.0 {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

/// Entry/exit window along one axis, in displacement fractions
#[derive(Debug, Clone, Copy)]
struct Slab {
    entry: f32,
    exit: f32,
}

impl Slab {
    /// `None` when a stationary axis has no overlap, which rules out any hit
    fn along(moving_min: f32, moving_max: f32, target_min: f32, target_max: f32, d: f32) -> Option<Self> {
        if d > 0.0 {
            Some(Self {
                entry: (target_min - moving_max) / d,
                exit: (target_max - moving_min) / d,
            })
        } else if d < 0.0 {
            Some(Self {
                entry: (target_max - moving_min) / d,
                exit: (target_min - moving_max) / d,
            })
        } else if moving_min < target_max && target_min < moving_max {
            Some(Self {
                entry: f32::NEG_INFINITY,
                exit: f32::INFINITY,
            })
        } else {
            None
        }
    }
}

/// Sweep `moving` by `displacement` against the stationary `target`
///
/// Returns `None` when the boxes do not touch within the displacement.
/// Boxes that already interpenetrate report `time == 0` with the normal on
/// the axis of smaller penetration. Inverted boxes are normalized first.
pub fn sweep(moving: &BoundingBox, displacement: Vec2, target: &BoundingBox) -> Option<SweepHit> {
    sweep_with_epsilon(moving, displacement, target, DEFAULT_TIME_EPSILON)
}

/// [`sweep`] with an explicit tolerance for near-zero negative entry times
pub fn sweep_with_epsilon(
    moving: &BoundingBox,
    displacement: Vec2,
    target: &BoundingBox,
    epsilon: f32,
) -> Option<SweepHit> {
    if !utils::is_finite(&displacement) {
        log::warn!("sweep called with non-finite displacement {displacement:?}");
        return None;
    }

    let a = moving.normalized();
    let b = target.normalized();

    if a.overlaps(&b) {
        return Some(penetration_hit(&a, &b, displacement));
    }

    let x = Slab::along(a.left, a.right, b.left, b.right, displacement.x)?;
    let y = Slab::along(a.top, a.bottom, b.top, b.bottom, displacement.y)?;

    let entry = x.entry.max(y.entry);
    let exit = x.exit.min(y.exit);

    // `exit <= 0` is a box already leaving a face it touches
    if entry > exit || entry > 1.0 || entry < -epsilon || exit <= 0.0 {
        return None;
    }

    // The later-entering axis is the face that gets struck
    let axis = if x.entry > y.entry {
        Axis::X
    } else if y.entry > x.entry {
        Axis::Y
    } else if displacement.x.abs() < displacement.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };

    let time = if entry <= 0.0 { 0.0 } else { entry };
    let normal = axis.vector(-utils::sign(axis.of(&displacement)));
    Some(SweepHit { time, normal })
}

/// Contact for boxes that already overlap before moving
///
/// The normal points out of the target on the side the mover's centre is
/// on, so the push-out is always the shorter one. Coincident centres fall
/// back to the larger box counting as "before" the smaller one, then to the
/// displacement.
fn penetration_hit(a: &BoundingBox, b: &BoundingBox, displacement: Vec2) -> SweepHit {
    let depth = a.overlap_depth(b);
    let axis = if depth.x < depth.y { Axis::X } else { Axis::Y };

    let (a_min, b_min) = match axis {
        Axis::X => (a.left, b.left),
        Axis::Y => (a.top, b.top),
    };
    let offset = axis.of(&a.center()) - axis.of(&b.center());
    let sign = if offset != 0.0 {
        utils::sign(offset)
    } else if a_min != b_min {
        utils::sign(a_min - b_min)
    } else if axis.of(&displacement) != 0.0 {
        -utils::sign(axis.of(&displacement))
    } else {
        -1.0
    };

    SweepHit {
        time: 0.0,
        normal: axis.vector(sign),
    }
}
