use std::time::Duration;

use crate::animation::AnimatedValue;
use crate::geometry::{Affine, Rect, Size};
use crate::reactive::ReadSignal;
use crate::renderer::PaintContext;
use crate::widgets::AnimatableIcon;

/// Fixed-size icons laid out left to right, scaled as a group while `pulse` is set.
///
/// A negative spacing makes neighbours overlap.
pub struct Row {
    children: Vec<AnimatableIcon>,
    item_size: Size,
    spacing: f32,
    pulse: ReadSignal<bool>,
    pulse_factor: f32,
    pulse_scale: AnimatedValue<f32>,
    bounds: Rect,
}

impl Row {
    pub fn new(item_size: Size, spacing: f32, pulse: ReadSignal<bool>, pulse_factor: f32) -> Self {
        let pulse_scale = AnimatedValue::new(&pulse, |on| scale_for(*on, pulse_factor));
        Self {
            children: Vec::new(),
            item_size,
            spacing,
            pulse,
            pulse_factor,
            pulse_scale,
            bounds: Rect::default(),
        }
    }

    pub fn child(mut self, child: AnimatableIcon) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[AnimatableIcon] {
        &self.children
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Uniform scale currently applied to the whole row.
    pub fn pulse_scale(&self) -> f32 {
        *self.pulse_scale.current()
    }

    pub fn is_animating(&self) -> bool {
        self.pulse_scale.is_animating() || self.children.iter().any(|c| c.is_animating())
    }

    pub fn layout(&mut self, origin: (f32, f32)) -> Size {
        let count = self.children.len();
        let step = self.item_size.width + self.spacing;
        for (i, child) in self.children.iter_mut().enumerate() {
            let x = origin.0 + step * i as f32;
            child.set_bounds(Rect::from_origin_size((x, origin.1), self.item_size));
        }

        let width = if count == 0 {
            0.0
        } else {
            self.item_size.width * count as f32 + self.spacing * (count - 1) as f32
        };
        let size = Size::new(width.max(0.0), self.item_size.height);
        self.bounds = Rect::from_origin_size(origin, size);
        size
    }

    /// Advance the pulse and every child to `now`; returns whether anything moved.
    pub fn update(&mut self, now: Duration) -> bool {
        let factor = self.pulse_factor;
        let mut changed = self
            .pulse_scale
            .sync(&self.pulse, |on| scale_for(*on, factor), now)
            .is_changed();
        for child in &mut self.children {
            changed |= child.update(now);
        }
        changed
    }

    pub fn paint(&self, ctx: &mut PaintContext) {
        let scale = self.pulse_scale();
        ctx.with_transform(Affine::scale_about(scale, scale, self.bounds.center()), |ctx| {
            for child in &self.children {
                child.paint(ctx);
            }
        });
    }
}

fn scale_for(pulsing: bool, factor: f32) -> f32 {
    if pulsing {
        factor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Transition;
    use crate::reactive::{create_signal, with_transaction, Signal, Transaction};
    use crate::state::AnimationState;
    use crate::style::AnimatedVisualProperties;

    fn row_of(count: usize, pulse: &Signal<bool>) -> Row {
        let state = create_signal(AnimationState::Start);
        let mut row = Row::new(Size::new(28.0, 28.0), -3.5, pulse.read_only(), 1.05);
        for _ in 0..count {
            row = row.child(AnimatableIcon::new(
                AnimatedVisualProperties::new(),
                AnimatedVisualProperties::new(),
                state.read_only(),
                "play.fill",
            ));
        }
        row
    }

    #[test]
    fn test_layout_overlaps_neighbours() {
        let pulse = create_signal(false);
        let mut row = row_of(4, &pulse);
        let size = row.layout((0.0, 0.0));
        assert_eq!(size, Size::new(101.5, 28.0));

        let xs: Vec<f32> = row.children().iter().map(|c| c.bounds().x).collect();
        assert_eq!(xs, vec![0.0, 24.5, 49.0, 73.5]);
    }

    #[test]
    fn test_empty_row_has_no_width() {
        let pulse = create_signal(false);
        let mut row = row_of(0, &pulse);
        assert_eq!(row.layout((5.0, 5.0)).width, 0.0);
    }

    #[test]
    fn test_pulse_scales_group_about_center() {
        let pulse = create_signal(false);
        let mut row = row_of(1, &pulse);
        row.layout((0.0, 0.0));

        let tx = Transaction::new(Transition::linear(Duration::from_millis(300)), Duration::ZERO);
        with_transaction(tx, || pulse.set(true));
        assert!(row.update(Duration::from_millis(300)));
        assert_eq!(row.pulse_scale(), 1.05);

        let mut ctx = PaintContext::new();
        row.paint(&mut ctx);
        let rect = ctx.commands()[0].visual_rect();
        assert!((rect.width - 29.4).abs() < 1e-4);
        assert!((rect.x - (-0.7)).abs() < 1e-4);
    }
}
