//! Math utilities and types
//!
//! Provides the small 2D math layer the platformer needs. Screen convention
//! throughout: `+x` points right, `+y` points down.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Sign of `value` as -1, 0 or 1.
    ///
    /// Unlike [`f32::signum`], zero (of either sign) maps to zero.
    pub fn sign(value: f32) -> f32 {
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Move `current` towards `target` by at most `max_delta`
    pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
        if current < target {
            (current + max_delta).min(target)
        } else {
            (current - max_delta).max(target)
        }
    }

    /// Component-wise check that both coordinates are finite
    pub fn is_finite(v: &Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}
