//! Player input
//!
//! Real key polling is outside this crate; the scene consumes a plain
//! [`PlayerInput`] snapshot per step, and the demo feeds it from a script.

/// Buttons held during one logic step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// Walk left
    pub left: bool,
    /// Walk right
    pub right: bool,
    /// Jump (only takes effect on the ground)
    pub jump: bool,
}

impl PlayerInput {
    /// Nothing pressed
    pub const IDLE: Self = Self { left: false, right: false, jump: false };

    /// Holding right
    pub const RIGHT: Self = Self { left: false, right: true, jump: false };

    /// Holding left
    pub const LEFT: Self = Self { left: true, right: false, jump: false };

    /// Same input with jump held
    pub const fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    /// Horizontal direction as -1, 0 or 1; opposite buttons cancel
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Timed sequence of inputs
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    segments: Vec<(f32, PlayerInput)>,
    cursor: usize,
    elapsed: f32,
}

impl InputScript {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `input` held for `seconds`
    pub fn then(mut self, seconds: f32, input: PlayerInput) -> Self {
        self.segments.push((seconds.max(0.0), input));
        self
    }

    /// Total scripted time
    pub fn duration(&self) -> f32 {
        self.segments.iter().map(|(seconds, _)| seconds).sum()
    }

    /// Whether every segment has played out
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.segments.len()
    }

    /// Input for the next `dt` seconds
    ///
    /// Returns [`PlayerInput::IDLE`] once the script has finished.
    pub fn next(&mut self, dt: f32) -> PlayerInput {
        while let Some(&(seconds, input)) = self.segments.get(self.cursor) {
            if self.elapsed < seconds {
                self.elapsed += dt;
                return input;
            }
            self.cursor += 1;
            self.elapsed = 0.0;
        }
        PlayerInput::IDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(PlayerInput::LEFT.direction(), -1.0);
        assert_eq!(PlayerInput::RIGHT.with_jump().direction(), 1.0);
        let both = PlayerInput { left: true, right: true, jump: false };
        assert_eq!(both.direction(), 0.0);
    }

    #[test]
    fn test_script_plays_segments_in_order() {
        let mut script = InputScript::new()
            .then(0.5, PlayerInput::RIGHT)
            .then(0.25, PlayerInput::LEFT.with_jump());
        assert_eq!(script.duration(), 0.75);

        let played: Vec<_> = (0..8).map(|_| script.next(0.125)).collect();
        assert_eq!(&played[..4], &[PlayerInput::RIGHT; 4]);
        assert_eq!(&played[4..6], &[PlayerInput::LEFT.with_jump(); 2]);
        assert_eq!(&played[6..], &[PlayerInput::IDLE; 2]);
        assert!(script.is_finished());
    }
}
