//! The split button screen: four overlapping icons inside one tappable button.
//!
//! At rest two glyphs show side by side (icons two and three). A tap slides
//! the second icon into the third's slot while the first grows in from half
//! an offset to take the second's slot and the third shrinks away. When the
//! motion lands every visible icon sits exactly where a resting icon would,
//! so snapping the state back to start is invisible. The fourth icon is never
//! visible and only reserves room for the overlapping arrangement.

use std::time::Duration;

use crate::config::{self, Metrics, SplitButtonConfig};
use crate::controller::{Phase, TransitionController};
use crate::geometry::Size;
use crate::reactive::{create_signal, ChangeFlags, Invalidation, Signal};
use crate::renderer::PaintContext;
use crate::state::AnimationState;
use crate::style::AnimatedVisualProperties;
use crate::widgets::{AnimatableIcon, Button, Event, EventResponse, Row};

/// Start and end styles of the four icons, left to right.
pub fn icon_profiles(metrics: &Metrics) -> [(AnimatedVisualProperties, AnimatedVisualProperties); 4] {
    let hidden = AnimatedVisualProperties::new()
        .scale_uniform(0.0)
        .offset(metrics.half_offset, 0.0)
        .opacity(0.0);
    let shifted = AnimatedVisualProperties::new().offset(metrics.full_offset, 0.0);
    let resting = AnimatedVisualProperties::new();
    let placeholder = AnimatedVisualProperties::new().opacity(0.0);

    [
        (hidden, shifted),
        (resting, shifted),
        (resting, hidden),
        (placeholder, placeholder),
    ]
}

pub struct SplitButton {
    metrics: Metrics,
    state: Signal<AnimationState>,
    pulse: Signal<bool>,
    enabled: Signal<bool>,
    controller: TransitionController,
    button: Button,
    invalidation: Invalidation,
    origin: (f32, f32),
}

impl SplitButton {
    /// Build the screen from a config already known to be valid.
    ///
    /// Use [`SplitButton::try_new`] for configs that come from outside.
    pub fn new(config: SplitButtonConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "split button built from an invalid config: {:?}",
            config
        );
        let metrics = config.metrics();
        let state = create_signal(AnimationState::Start);
        let pulse = create_signal(false);
        let enabled = create_signal(true);
        let controller = TransitionController::new(state.clone(), pulse.clone(), enabled.clone());

        // Slots are one full offset apart; each glyph keeps its square box
        // centered on its slot and overhangs into its neighbours
        let slot = Size::new(metrics.glyph_advance, metrics.glyph_size);
        let glyph = Size::new(metrics.glyph_size, metrics.glyph_size);
        let row = icon_profiles(&metrics).into_iter().fold(
            Row::new(slot, metrics.spacing, pulse.read_only(), metrics.pulse_scale.0),
            |row, (start, end)| {
                row.child(
                    AnimatableIcon::new(start, end, state.read_only(), config.glyph.clone())
                        .size(glyph),
                )
            },
        );

        let trigger = controller.clone();
        let button = Button::new(row, enabled.read_only())
            .tint(config.tint)
            .on_press(move |now| trigger.trigger(now));

        log::debug!("split button created with {:?}", metrics);

        Self {
            metrics,
            state,
            pulse,
            enabled,
            controller,
            button,
            invalidation: Invalidation::new(),
            origin: (0.0, 0.0),
        }
    }

    /// Validate `config`, then build the screen.
    pub fn try_new(config: SplitButtonConfig) -> config::Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn animation_state(&self) -> AnimationState {
        self.state.get()
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Whether anything still moves; a frame loop may sleep when false.
    pub fn is_animating(&self) -> bool {
        !self.controller.is_idle() || self.button.content().is_animating()
    }

    /// Place the button at `origin` now. Until this is called the first
    /// [`tick`](Self::tick) lays it out at the origin.
    pub fn layout(&mut self, origin: (f32, f32)) -> Size {
        self.origin = origin;
        self.invalidation.clear_layout();
        self.button.layout(origin)
    }

    pub fn event(&mut self, event: &Event, now: Duration) -> EventResponse {
        self.button.event(event, now)
    }

    /// Tap the button as a user would.
    pub fn tap(&mut self, now: Duration) -> EventResponse {
        self.event(&Event::Activate, now)
    }

    /// Advance the interaction and every animated property to `now`.
    ///
    /// Returns whether this screen's next paint would differ from its
    /// previous one. Other screens on the same thread have no effect on it.
    pub fn tick(&mut self, now: Duration) -> bool {
        // Land running tweens at `now` before a completion can retarget them,
        // then pick up whatever the completion wrote at the same instant
        let mut changed = self.button.update(now);
        self.controller.tick(now);
        changed |= self.button.update(now);
        if changed {
            self.invalidation.request_paint();
        }

        let flags = self.invalidation.take();
        if flags.contains(ChangeFlags::NEEDS_LAYOUT) {
            self.button.layout(self.origin);
        }
        flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn paint(&self) -> PaintContext {
        let mut ctx = PaintContext::new();
        self.button.paint(&mut ctx);
        ctx
    }
}

impl Default for SplitButton {
    fn default() -> Self {
        Self::new(SplitButtonConfig::default())
    }
}
