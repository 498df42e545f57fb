//! Draw command definitions handed to the host renderer.

use crate::geometry::{Affine, Color, Rect};

/// A single draw operation.
///
/// `rect` is the box the element is drawn in at its natural size; `transform`
/// maps it to where the host should actually draw it, with every ancestor
/// transform already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a named glyph (icon) filling `rect`.
    Glyph {
        /// Glyph name, e.g. a symbol font identifier
        name: String,
        /// Glyph box at the glyph's size, before transformation
        rect: Rect,
        /// Layout space to surface space
        transform: Affine,
        /// Opacity from 0.0 to 1.0
        opacity: f32,
        /// Fill color
        color: Color,
    },
}

impl DrawCommand {
    /// Where the command lands once its transform is applied.
    pub fn visual_rect(&self) -> Rect {
        match self {
            DrawCommand::Glyph {
                rect, transform, ..
            } => transform.transform_rect(rect),
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            DrawCommand::Glyph { opacity, .. } => *opacity,
        }
    }

    /// Whether the host would actually put pixels on screen.
    pub fn is_visible(&self) -> bool {
        let visual = self.visual_rect();
        self.opacity() > 0.0 && visual.width > 0.0 && visual.height > 0.0
    }
}
