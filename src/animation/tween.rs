use std::time::Duration;

use crate::animation::{Animatable, Transition};
use crate::reactive::Transaction;

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Interpolation state for one animatable property
#[derive(Debug, Clone)]
pub struct Tween<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated towards
    target: T,
    /// Value when the animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// When the running animation started
    started_at: Duration,
    /// Curve and duration of the running animation
    transition: Option<Transition>,
}

impl<T: Animatable> Tween<T> {
    pub fn new(initial_value: T) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            started_at: Duration::ZERO,
            transition: None,
        }
    }

    /// Start animating from the current value to a new target
    pub fn animate_to(&mut self, new_target: T, transaction: &Transaction) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.started_at = transaction.started_at;
        self.transition = Some(transaction.transition);
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.transition = None;
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }
        let Some(transition) = self.transition.as_ref() else {
            return AdvanceResult::NoChange;
        };

        let t = transition.progress(now.saturating_sub(self.started_at));
        // Land exactly on the target so repeated runs never drift
        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, transition.timing.evaluate(t))
        };
        self.progress = t;

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    pub fn current(&self) -> &T {
        &self.current
    }
}
