//! Kinematic body shared by moving objects
//!
//! A body tracks which axes a collision callback has already settled during
//! the current step. Whatever is left unsettled when the collision pass is
//! over is integrated freely by [`Body::finish_step`].

use platformer_engine::foundation::math::Vec2;
use platformer_engine::physics::{Axis, BoundingBox, CollisionEvent};

/// Position, velocity and box of a moving object
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Box centre
    pub position: Vec2,
    /// World units per second
    pub velocity: Vec2,
    /// Half the box size
    pub half_extents: Vec2,
    /// Standing on something blocking as of the last step
    pub on_ground: bool,
    resolved_x: bool,
    resolved_y: bool,
}

impl Body {
    /// Body at rest centred on `position`
    pub fn new(position: Vec2, half_extents: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            half_extents,
            on_ground: false,
            resolved_x: false,
            resolved_y: false,
        }
    }

    /// Current box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_half_extents(self.position, self.half_extents)
    }

    /// Lowest point of the body
    pub fn bottom(&self) -> f32 {
        self.position.y + self.half_extents.y
    }

    /// Forget last step's contacts
    pub fn begin_step(&mut self) {
        self.on_ground = false;
        self.resolved_x = false;
        self.resolved_y = false;
    }

    /// Whether a callback already settled `axis` this step
    pub fn is_resolved(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.resolved_x,
            Axis::Y => self.resolved_y,
        }
    }

    /// Settle `axis` without moving along it
    pub fn hold(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.resolved_x = true,
            Axis::Y => self.resolved_y = true,
        }
    }

    /// Apply the full displacement on both axes
    pub fn move_freely(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.hold(Axis::X);
        self.hold(Axis::Y);
    }

    /// Snap flush against the struck face and stop on that axis
    ///
    /// Velocity heading away from the face is kept.
    pub fn stop_against(&mut self, event: &CollisionEvent) {
        let axis = event.axis();
        self.position += event.correction();
        if axis.of(&self.velocity) * axis.of(&event.normal) < 0.0 {
            match axis {
                Axis::X => self.velocity.x = 0.0,
                Axis::Y => self.velocity.y = 0.0,
            }
        }
        if event.normal.y < 0.0 {
            self.on_ground = true;
        }
        self.hold(axis);
    }

    /// Integrate every axis no callback settled
    pub fn finish_step(&mut self, dt: f32) {
        if !self.resolved_x {
            self.position.x += self.velocity.x * dt;
        }
        if !self.resolved_y {
            self.position.y += self.velocity.y * dt;
        }
        self.resolved_x = true;
        self.resolved_y = true;
    }

    /// Change the box size keeping the feet where they are
    pub fn resize(&mut self, half_extents: Vec2) {
        self.position.y += self.half_extents.y - half_extents.y;
        self.half_extents = half_extents;
    }

    /// Add gravity, clamped to a terminal speed
    pub fn fall(&mut self, gravity: f32, max_fall_speed: f32, dt: f32) {
        self.velocity.y = (self.velocity.y + gravity * dt).min(max_fall_speed);
    }
}
