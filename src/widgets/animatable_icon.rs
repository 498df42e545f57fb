use std::time::Duration;

use crate::animation::AnimatedValue;
use crate::geometry::{Affine, Rect, Size};
use crate::reactive::ReadSignal;
use crate::renderer::PaintContext;
use crate::state::AnimationState;
use crate::style::{AnimatedVisualProperties, ResolvedVisual};

fn select(
    state: &AnimationState,
    start: &AnimatedVisualProperties,
    end: &AnimatedVisualProperties,
) -> ResolvedVisual {
    match state {
        AnimationState::Start => start.resolve(),
        AnimationState::End => end.resolve(),
    }
}

/// A glyph whose scale, offset and opacity follow a shared [`AnimationState`].
///
/// The icon never writes the state. Each frame it resolves the style for the
/// current state and interpolates toward it with whatever transaction the
/// state was last written under.
///
/// The glyph is drawn in a box of its own size centered on the icon's slot.
/// Without an explicit size it fills the slot.
pub struct AnimatableIcon {
    glyph: String,
    size: Option<Size>,
    start: AnimatedVisualProperties,
    end: AnimatedVisualProperties,
    state: ReadSignal<AnimationState>,
    visual: AnimatedValue<ResolvedVisual>,
    bounds: Rect,
}

impl AnimatableIcon {
    pub fn new(
        start: AnimatedVisualProperties,
        end: AnimatedVisualProperties,
        state: ReadSignal<AnimationState>,
        glyph: impl Into<String>,
    ) -> Self {
        let visual = AnimatedValue::new(&state, |s| select(s, &start, &end));
        Self {
            glyph: glyph.into(),
            size: None,
            start,
            end,
            state,
            visual,
            bounds: Rect::default(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// The style currently painted, mid-interpolation if a transition runs.
    pub fn visual(&self) -> &ResolvedVisual {
        self.visual.current()
    }

    pub fn is_animating(&self) -> bool {
        self.visual.is_animating()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Box the glyph is drawn in, before any animated transform.
    pub fn glyph_rect(&self) -> Rect {
        match self.size {
            Some(size) => {
                let (cx, cy) = self.bounds.center();
                Rect::new(cx - size.width / 2.0, cy - size.height / 2.0, size.width, size.height)
            }
            None => self.bounds,
        }
    }

    /// Follow the state to `now`; returns whether the painted style changed.
    pub fn update(&mut self, now: Duration) -> bool {
        let (start, end) = (self.start, self.end);
        self.visual
            .sync(&self.state, |s| select(s, &start, &end), now)
            .is_changed()
    }

    /// Scale about the center, then translate, then fade.
    pub fn paint(&self, ctx: &mut PaintContext) {
        let visual = self.visual.current();
        let (sx, sy) = visual.scale;
        let (dx, dy) = visual.offset;
        let rect = self.glyph_rect();
        let local = Affine::translate(dx, dy).then(&Affine::scale_about(sx, sy, rect.center()));
        ctx.draw_glyph(&self.glyph, rect, local, visual.opacity);
    }
}
