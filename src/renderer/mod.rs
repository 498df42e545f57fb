pub mod commands;

pub use commands::DrawCommand;

use crate::geometry::{Affine, Color, Rect};

/// Records draw commands during a paint pass.
///
/// Widgets push transforms as they descend; each recorded command carries the
/// composition of everything above it, so the host never walks a tree.
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Affine>,
    foreground: Color,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Affine::IDENTITY],
            foreground: Color::WHITE,
        }
    }

    fn current_transform(&self) -> Affine {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Affine::IDENTITY)
    }

    /// Apply `transform` to everything painted inside `f`.
    pub fn with_transform<F, R>(&mut self, transform: Affine, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let composed = self.current_transform().then(&transform);
        self.transform_stack.push(composed);
        let result = f(self);
        self.transform_stack.pop();
        result
    }

    /// Color glyphs are drawn with from here on.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// Draw a glyph with an extra local transform on top of the current one.
    pub fn draw_glyph(&mut self, name: &str, rect: Rect, local: Affine, opacity: f32) {
        let transform = self.current_transform().then(&local);
        self.commands.push(DrawCommand::Glyph {
            name: name.to_string(),
            rect,
            transform,
            opacity,
            color: self.foreground,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
