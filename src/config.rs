use thiserror::Error;

use crate::geometry::Color;

/// Uniform scale applied to the whole row while a transition runs.
pub const PULSE_SCALE: f32 = 1.05;

const SPACING_FACTOR: f32 = -0.125;
const FULL_OFFSET_FACTOR: f32 = 0.75;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("base size must be a positive, finite number (got {0})")]
    InvalidBaseSize(f32),
    #[error("could not parse base size {0:?}")]
    UnparsableBaseSize(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct SplitButtonConfig {
    /// Glyph size; spacing and offsets scale with it
    pub base_size: f32,
    /// Foreground color of the glyphs, constant across enabled/disabled
    pub tint: Color,
    /// Name of the glyph each icon draws
    pub glyph: String,
}

impl Default for SplitButtonConfig {
    fn default() -> Self {
        Self {
            base_size: 28.0,
            tint: Color::SYSTEM_BLUE,
            glyph: "play.fill".to_string(),
        }
    }
}

impl SplitButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_size(mut self, base_size: f32) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_size.is_finite() && self.base_size > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseSize(self.base_size))
        }
    }

    /// Build a config from an optional base size argument.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        let config = match arg {
            None => Self::default(),
            Some(raw) => {
                let base_size = raw
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| ConfigError::UnparsableBaseSize(raw.to_string()))?;
                Self::default().base_size(base_size)
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::from_base_size(self.base_size)
    }
}

/// Every length the screen derives from its base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub glyph_size: f32,
    /// Width of one icon slot; one full offset moves an icon exactly onto
    /// its right neighbour's resting place
    pub glyph_advance: f32,
    /// Gap between adjacent icons; negative so they overlap
    pub spacing: f32,
    pub full_offset: f32,
    pub half_offset: f32,
    pub pulse_scale: (f32, f32),
}

impl Metrics {
    pub fn from_base_size(base_size: f32) -> Self {
        let full_offset = base_size * FULL_OFFSET_FACTOR;
        let spacing = SPACING_FACTOR * base_size;
        Self {
            glyph_size: base_size,
            glyph_advance: full_offset - spacing,
            spacing,
            full_offset,
            half_offset: full_offset / 2.0,
            pulse_scale: (PULSE_SCALE, PULSE_SCALE),
        }
    }
}
