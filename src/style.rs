//! Partial visual styles.
//!
//! [`AnimatedVisualProperties`] overrides any subset of scale, offset and
//! opacity. Unset fields fall back to the identity when resolved, so a style
//! only mentions what it changes:
//!
//! ```ignore
//! let hidden = AnimatedVisualProperties::new()
//!     .scale_uniform(0.0)
//!     .offset(10.5, 0.0)
//!     .opacity(0.0);
//! let resting = AnimatedVisualProperties::new();
//! ```

/// A partial style; `None` means "leave at the default".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedVisualProperties {
    /// Scale factor in x and y, about the element's center
    pub scale: Option<(f32, f32)>,
    /// Translation in x and y
    pub offset: Option<(f32, f32)>,
    /// Opacity from 0.0 (invisible) to 1.0 (opaque)
    pub opacity: Option<f32>,
}

impl AnimatedVisualProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, x: f32, y: f32) -> Self {
        self.scale = Some((x, y));
        self
    }

    pub fn scale_uniform(self, scale: f32) -> Self {
        self.scale(scale, scale)
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Some((x, y));
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Fill every unset field with its default.
    pub fn resolve(&self) -> ResolvedVisual {
        ResolvedVisual {
            scale: self.scale.unwrap_or(ResolvedVisual::IDENTITY.scale),
            offset: self.offset.unwrap_or(ResolvedVisual::IDENTITY.offset),
            opacity: self
                .opacity
                .unwrap_or(ResolvedVisual::IDENTITY.opacity)
                .clamp(0.0, 1.0),
        }
    }
}

/// A fully specified style, ready to paint or interpolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedVisual {
    pub scale: (f32, f32),
    pub offset: (f32, f32),
    pub opacity: f32,
}

impl ResolvedVisual {
    pub const IDENTITY: Self = Self {
        scale: (1.0, 1.0),
        offset: (0.0, 0.0),
        opacity: 1.0,
    };
}

impl Default for ResolvedVisual {
    fn default() -> Self {
        Self::IDENTITY
    }
}
