//! The tap interaction as an explicit phase machine.
//!
//! ```text
//!  Idle ──trigger──▶ Transitioning ──300ms──▶ Settling ──150ms──▶ Idle
//!   ▲                 input disabled           input enabled         │
//!   └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entering `Transitioning` disables input and, inside one ease-in-out
//! transaction, flips the [`AnimationState`] and raises the pulse. When that
//! transaction has run its course the state snaps back to `Start`, input is
//! re-enabled, and the pulse is lowered inside a shorter linear transaction.
//! Phase changes are noticed by [`TransitionController::tick`], so whoever
//! owns the frame loop decides how often time moves.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::Transition;
use crate::reactive::{with_transaction, without_transaction, Signal, Transaction};
use crate::state::AnimationState;

pub const PRIMARY_DURATION: Duration = Duration::from_millis(300);
pub const SETTLE_DURATION: Duration = Duration::from_millis(150);

/// Ease-in-out curve driving the state flip and the pulse up.
pub fn primary_transition() -> Transition {
    Transition::ease_in_out(PRIMARY_DURATION)
}

/// Linear curve lowering the pulse after the flip completes.
pub fn settle_transition() -> Transition {
    Transition::linear(SETTLE_DURATION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Input disabled, state and pulse animating forward
    Transitioning { started_at: Duration },
    /// Input enabled again, pulse animating back
    Settling { started_at: Duration },
}

/// Drives the three interaction flags through one tap.
///
/// Clones share the same phase and signals, so a clone can live inside the
/// button's press callback while the owner keeps ticking its own copy.
#[derive(Clone)]
pub struct TransitionController {
    state: Signal<AnimationState>,
    pulse: Signal<bool>,
    enabled: Signal<bool>,
    phase: Rc<Cell<Phase>>,
}

impl TransitionController {
    pub fn new(state: Signal<AnimationState>, pulse: Signal<bool>, enabled: Signal<bool>) -> Self {
        Self {
            state,
            pulse,
            enabled,
            phase: Rc::new(Cell::new(Phase::Idle)),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }

    fn set_phase(&self, phase: Phase) {
        log::debug!("transition phase {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }

    /// Start one interaction at `now`.
    ///
    /// Callers must only reach this while input is enabled; the button's
    /// disabled state is what guarantees it.
    pub fn trigger(&self, now: Duration) {
        let enabled = self.enabled.get();
        debug_assert!(enabled, "trigger reached while input is disabled");
        if !enabled {
            log::warn!("ignoring trigger while input is disabled ({:?})", self.phase());
            return;
        }

        without_transaction(|| self.enabled.set(false));
        with_transaction(Transaction::new(primary_transition(), now), || {
            self.state.update(|s| s.advance());
            self.pulse.set(true);
        });
        self.set_phase(Phase::Transitioning { started_at: now });
    }

    /// Move the phase machine forward to `now`.
    ///
    /// A single late tick can finish both phases; completion instants are
    /// computed from the schedule, not from when the tick happened to run.
    pub fn tick(&self, now: Duration) {
        if let Phase::Transitioning { started_at } = self.phase() {
            let completed_at = started_at + PRIMARY_DURATION;
            if now >= completed_at {
                self.complete_primary(completed_at);
            }
        }

        if let Phase::Settling { started_at } = self.phase() {
            if now >= started_at + SETTLE_DURATION {
                self.set_phase(Phase::Idle);
            }
        }
    }

    fn complete_primary(&self, at: Duration) {
        // Order matters: the snap back must land before the pulse starts easing down
        without_transaction(|| {
            self.state.set(AnimationState::Start);
            self.enabled.set(true);
        });
        with_transaction(Transaction::new(settle_transition(), at), || {
            self.pulse.set(false);
        });
        self.set_phase(Phase::Settling { started_at: at });
    }
}
