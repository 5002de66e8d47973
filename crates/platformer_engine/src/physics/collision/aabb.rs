//! Axis-aligned bounding boxes
//!
//! Boxes are described by their four edges in world units with `+y` pointing
//! down, so a normalized box has `left <= right` and `top <= bottom`.
//! Entities rebuild their box from position and per-state half extents every
//! time it is asked for; nothing here is cached.

use crate::foundation::math::Vec2;

/// Axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge (minimum x)
    pub left: f32,
    /// Top edge (minimum y)
    pub top: f32,
    /// Right edge (maximum x)
    pub right: f32,
    /// Bottom edge (maximum y)
    pub bottom: f32,
}

impl BoundingBox {
    /// Creates a box from its four edges, as given
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Creates a box of `size` whose top-left corner is `origin`
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y).normalized()
    }

    /// Creates a box centered on `center` extending `half_extents` each way
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(
            center.x - half_extents.x,
            center.y - half_extents.y,
            center.x + half_extents.x,
            center.y + half_extents.y,
        )
        .normalized()
    }

    /// Returns the same rectangle with inverted edges swapped back into order
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Width (negative for an inverted box)
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height (negative for an inverted box)
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom
    }

    /// Penetration depth along each axis
    ///
    /// Positive components mean the projections on that axis overlap by that
    /// much; zero or negative means they touch or are separated.
    pub fn overlap_depth(&self, other: &Self) -> Vec2 {
        let a = self.normalized();
        let b = other.normalized();
        Vec2::new(
            a.right.min(b.right) - a.left.max(b.left),
            a.bottom.min(b.bottom) - a.top.max(b.top),
        )
    }
}
