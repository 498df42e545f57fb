//! An animated split-icon button.
//!
//! Four copies of one glyph sit in an overlapping row inside a button. Tapping
//! it flips a shared [`AnimationState`](state::AnimationState); each icon
//! eases between its own start and end style while the whole row pulses, and
//! once the transition lands everything snaps back so the next tap plays the
//! same motion again.
//!
//! The crate is headless: time comes in as `Duration` readings from a
//! [`Clock`](clock::Clock), and painting produces
//! [`DrawCommand`](renderer::DrawCommand)s for a host renderer.
//!
//! ```ignore
//! use splitplay::prelude::*;
//!
//! let clock = SystemClock::new();
//! let mut screen = SplitButton::new(SplitButtonConfig::default());
//! screen.tap(clock.now());
//! loop {
//!     if screen.tick(clock.now()) {
//!         host.render(screen.paint().commands());
//!     }
//! }
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod reactive;
pub mod renderer;
pub mod screen;
pub mod state;
pub mod style;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimatedValue, TimingFunction, Transition, Tween};
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::config::{ConfigError, Metrics, SplitButtonConfig};
    pub use crate::controller::{Phase, TransitionController};
    pub use crate::geometry::{Affine, Color, Rect, Size};
    pub use crate::reactive::{
        create_signal, with_transaction, ReadSignal, Signal, Transaction,
    };
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::screen::SplitButton;
    pub use crate::state::AnimationState;
    pub use crate::style::{AnimatedVisualProperties, ResolvedVisual};
    pub use crate::widgets::{AnimatableIcon, Button, Event, EventResponse, Row};
}
