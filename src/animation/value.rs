use std::time::Duration;

use crate::animation::{AdvanceResult, Animatable, Tween};
use crate::reactive::ReadSignal;

/// A property that follows a signal through a mapping, animating whenever
/// the signal is written inside a transaction and snapping otherwise.
///
/// The source is polled once per frame with [`AnimatedValue::sync`]; only
/// the last write since the previous poll is considered.
#[derive(Debug, Clone)]
pub struct AnimatedValue<T: Animatable> {
    tween: Tween<T>,
    seen_version: u64,
}

impl<T: Animatable> AnimatedValue<T> {
    pub fn new<S>(source: &ReadSignal<S>, map: impl Fn(&S) -> T) -> Self {
        Self {
            tween: Tween::new(source.with(map)),
            seen_version: source.version(),
        }
    }

    /// Pick up any write to `source` and advance the interpolation to `now`.
    pub fn sync<S>(
        &mut self,
        source: &ReadSignal<S>,
        map: impl Fn(&S) -> T,
        now: Duration,
    ) -> AdvanceResult<T> {
        let version = source.version();
        let mut snapped = false;
        if version != self.seen_version {
            self.seen_version = version;
            let target = source.with(map);
            match source.transaction() {
                Some(transaction) => {
                    log::trace!(
                        "retargeting with {:?} over {:?}",
                        transaction.transition.timing,
                        transaction.transition.duration
                    );
                    self.tween.animate_to(target, &transaction);
                }
                None => {
                    snapped = target != *self.tween.current();
                    self.tween.set_immediate(target);
                }
            }
        }

        match self.tween.advance(now) {
            AdvanceResult::NoChange if snapped => AdvanceResult::Changed(self.tween.current().clone()),
            result => result,
        }
    }

    pub fn current(&self) -> &T {
        self.tween.current()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }
}
