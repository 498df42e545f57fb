mod animatable;
mod timing;
mod tween;
mod value;

pub use animatable::Animatable;
pub use timing::TimingFunction;
pub use tween::{AdvanceResult, Tween};
pub use value::AnimatedValue;

use std::time::Duration;

/// Configuration for how a property should animate when it changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::new(duration, TimingFunction::Linear)
    }

    pub fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, TimingFunction::EaseInOut)
    }

    /// Normalized progress (0.0 to 1.0) after `elapsed` time since the start.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_over_duration() {
        let transition = Transition::linear(Duration::from_millis(200));
        assert_eq!(transition.progress(Duration::ZERO), 0.0);
        assert!((transition.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
        assert_eq!(transition.progress(Duration::from_millis(200)), 1.0);
        assert_eq!(transition.progress(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let transition = Transition::linear(Duration::ZERO);
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
    }
}
