//! Decorated boxes - a single base box plus a rendering-only decoration

use crate::boxes::{BoxNode, TexBox};
use crate::font::FontId;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};

/// A color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// What the renderer draws in addition to (or instead of) the base
///
/// None of these paint glyphs of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decoration {
    /// Rectangle drawn around the base (`\fbox`, `\boxed`)
    Frame { thickness: f32, padding: f32 },
    /// Foreground and/or background color (`\color`, `\colorbox`)
    Color {
        foreground: Option<Color>,
        background: Option<Color>,
    },
    /// Line drawn through the base (`\cancel`, `\sout`)
    Strike { thickness: f32 },
    /// Scaled rendering of the base (`\scalebox`)
    Scale { x: f32, y: f32 },
    /// Horizontally mirrored base (`\reflectbox`)
    Reflect,
}

impl Decoration {
    /// Footprint of the decorated box given the base's metrics
    fn apply(&self, base: Metrics) -> Metrics {
        match *self {
            Decoration::Frame { thickness, padding } => {
                let inset = thickness + padding;
                Metrics {
                    width: base.width + 2.0 * inset,
                    height: base.height + inset,
                    depth: base.depth + inset,
                    shift: base.shift,
                }
            }
            Decoration::Scale { x, y } => Metrics {
                width: base.width * x,
                height: base.height * y,
                depth: base.depth * y,
                shift: base.shift,
            },
            Decoration::Color { .. } | Decoration::Strike { .. } | Decoration::Reflect => base,
        }
    }
}

/// Wrapper adding a [`Decoration`] to exactly one base box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorBox {
    pub(crate) metrics: Metrics,
    decoration: Decoration,
    base: Box<TexBox>,
}

impl DecorBox {
    /// Wrap `base`, taking ownership of it
    ///
    /// Starts from the base's metrics; frames and scaling adjust them.
    pub fn new(base: impl Into<TexBox>, decoration: Decoration) -> Self {
        let base = base.into();
        let metrics = decoration.apply(base.metrics());
        Self {
            metrics,
            decoration,
            base: Box::new(base),
        }
    }

    pub fn base(&self) -> &TexBox {
        &self.base
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Unwrap the decoration, returning the base
    pub fn into_base(self) -> TexBox {
        *self.base
    }
}

impl BoxNode for DecorBox {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        self.metrics = other.metrics();
    }

    fn last_font_id(&self) -> FontId {
        self.base.last_font_id()
    }

    fn name(&self) -> &'static str {
        match self.decoration {
            Decoration::Frame { .. } => "FramedBox",
            Decoration::Color { .. } => "ColorBox",
            Decoration::Strike { .. } => "StrikeBox",
            Decoration::Scale { .. } => "ScaleBox",
            Decoration::Reflect => "ReflectBox",
        }
    }
}
