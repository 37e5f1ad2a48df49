//! Length units and their conversion to points
//!
//! Most units convert with a fixed factor. The font-relative ones (em, ex,
//! mu), screen pixels and the default rule thickness resolve through a
//! [`UnitContext`] describing the current font and output device.

use crate::error::{BoxError, BoxResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum LengthUnit {
    /// Width of the capital 'M' in the current font
    Em = 0,
    /// Height of the character 'x' in the current font
    Ex = 1,
    Pixel = 2,
    /// PostScript point
    Point = 3,
    /// 1 pica = 12 point
    Pica = 4,
    /// 1 mu = 1/18 em, em taken from the mu font
    Mu = 5,
    Cm = 6,
    Mm = 7,
    In = 8,
    /// Scaled point, 1/65536 of a point
    Sp = 9,
    Pt = 10,
    /// Didot point
    Dd = 11,
    /// Cicero, 12 didot points
    Cc = 12,
    /// One default rule thickness
    X8 = 13,
}

/// Unit names recognized in length specifications
const UNIT_NAMES: &[(&str, LengthUnit)] = &[
    ("em", LengthUnit::Em),
    ("ex", LengthUnit::Ex),
    ("px", LengthUnit::Pixel),
    ("pix", LengthUnit::Pixel),
    ("pixel", LengthUnit::Pixel),
    ("pt", LengthUnit::Pt),
    ("point", LengthUnit::Point),
    ("pc", LengthUnit::Pica),
    ("pica", LengthUnit::Pica),
    ("mu", LengthUnit::Mu),
    ("cm", LengthUnit::Cm),
    ("mm", LengthUnit::Mm),
    ("in", LengthUnit::In),
    ("sp", LengthUnit::Sp),
    ("dd", LengthUnit::Dd),
    ("cc", LengthUnit::Cc),
    ("x8", LengthUnit::X8),
];

impl LengthUnit {
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Points per unit for units that do not depend on the current font or device
    pub fn fixed_points(self) -> Option<f32> {
        match self {
            Self::Em | Self::Ex | Self::Pixel | Self::Mu | Self::X8 => None,
            _ => Some(self.points_per_unit(&UnitContext::default())),
        }
    }

    /// Points per unit, resolving font-relative units against `ctx`
    pub fn points_per_unit(self, ctx: &UnitContext) -> f32 {
        match self {
            Self::Em => ctx.em,
            Self::Ex => ctx.ex,
            Self::Mu => ctx.mu_em / 18.0,
            Self::Pixel => 1.0 / ctx.pixels_per_point,
            Self::X8 => ctx.rule_thickness,
            Self::Point | Self::Pt => 1.0,
            Self::Pica => 12.0,
            Self::In => 72.0,
            Self::Cm => 28.346_456_693,
            Self::Mm => 2.834_645_669_3,
            Self::Sp => 1.0 / 65536.0,
            Self::Dd => 1.066_034_942_2,
            Self::Cc => 12.792_419_307,
        }
    }

    /// Canonical name used when formatting
    pub fn name(self) -> &'static str {
        match self {
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Pixel => "px",
            Self::Point => "point",
            Self::Pica => "pc",
            Self::Mu => "mu",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Sp => "sp",
            Self::Pt => "pt",
            Self::Dd => "dd",
            Self::Cc => "cc",
            Self::X8 => "x8",
        }
    }
}

impl From<LengthUnit> for i32 {
    fn from(unit: LengthUnit) -> Self {
        unit.value()
    }
}

impl TryFrom<i32> for LengthUnit {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Em),
            1 => Ok(Self::Ex),
            2 => Ok(Self::Pixel),
            3 => Ok(Self::Point),
            4 => Ok(Self::Pica),
            5 => Ok(Self::Mu),
            6 => Ok(Self::Cm),
            7 => Ok(Self::Mm),
            8 => Ok(Self::In),
            9 => Ok(Self::Sp),
            10 => Ok(Self::Pt),
            11 => Ok(Self::Dd),
            12 => Ok(Self::Cc),
            13 => Ok(Self::X8),
            _ => Err(BoxError::UnknownConstant {
                family: "length unit",
                value,
            }),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNIT_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| BoxError::InvalidLength(format!("unknown unit '{}'", s)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit context
// =============================================================================

/// Font and device parameters needed to resolve relative units
///
/// All values are in points. Loaded by the embedding engine, typically from
/// the current font's metrics. Every constructor validates, so a context in
/// hand always converts to finite lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnitContextFields")]
pub struct UnitContext {
    em: f32,
    ex: f32,
    mu_em: f32,
    pixels_per_point: f32,
    rule_thickness: f32,
}

/// Unvalidated form of [`UnitContext`] as it appears in configuration files
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct UnitContextFields {
    /// Quad width of the current font
    em: f32,
    /// x-height of the current font
    ex: f32,
    /// Quad width of the mu font
    mu_em: f32,
    /// Output device pixels per point
    pixels_per_point: f32,
    /// Default rule thickness
    rule_thickness: f32,
}

impl Default for UnitContextFields {
    fn default() -> Self {
        let ctx = UnitContext::default();
        Self {
            em: ctx.em,
            ex: ctx.ex,
            mu_em: ctx.mu_em,
            pixels_per_point: ctx.pixels_per_point,
            rule_thickness: ctx.rule_thickness,
        }
    }
}

impl TryFrom<UnitContextFields> for UnitContext {
    type Error = BoxError;

    fn try_from(fields: UnitContextFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.em,
            fields.ex,
            fields.mu_em,
            fields.pixels_per_point,
            fields.rule_thickness,
        )
    }
}

impl Default for UnitContext {
    fn default() -> Self {
        Self::for_size(10.0)
    }
}

impl UnitContext {
    /// Build a context, rejecting non-finite factors and non-positive resolutions
    pub fn new(
        em: f32,
        ex: f32,
        mu_em: f32,
        pixels_per_point: f32,
        rule_thickness: f32,
    ) -> BoxResult<Self> {
        let fields = [
            ("em", em),
            ("ex", ex),
            ("mu_em", mu_em),
            ("pixels_per_point", pixels_per_point),
            ("rule_thickness", rule_thickness),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BoxError::Config(format!("{} is not finite: {}", name, value)));
        }
        if pixels_per_point <= 0.0 {
            return Err(BoxError::Config(format!(
                "pixels_per_point must be positive: {}",
                pixels_per_point
            )));
        }
        Ok(Self {
            em,
            ex,
            mu_em,
            pixels_per_point,
            rule_thickness,
        })
    }

    /// Approximate context for a font of the given size
    pub fn for_size(font_size: f32) -> Self {
        let em = font_size;
        Self {
            em,
            ex: em * 0.430_555,
            mu_em: em,
            pixels_per_point: 1.0,
            rule_thickness: em * 0.04,
        }
    }

    /// Parse and validate a context from JSON
    pub fn from_json(json: &str) -> BoxResult<Self> {
        let fields: UnitContextFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    /// Parse a context from JSON, falling back to defaults when it is unusable
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(ctx) => ctx,
            Err(e) => {
                tracing::warn!("Invalid unit context, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Quad width of the current font
    pub fn em(&self) -> f32 {
        self.em
    }

    /// x-height of the current font
    pub fn ex(&self) -> f32 {
        self.ex
    }

    /// Quad width of the mu font
    pub fn mu_em(&self) -> f32 {
        self.mu_em
    }

    /// Output device pixels per point
    pub fn pixels_per_point(&self) -> f32 {
        self.pixels_per_point
    }

    /// Default rule thickness
    pub fn rule_thickness(&self) -> f32 {
        self.rule_thickness
    }
}

// =============================================================================
// Dimensions
// =============================================================================

/// A length with its unit, as written by the author (e.g. `3mu`, `-0.5em`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimen {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Default for Dimen {
    fn default() -> Self {
        Self::new(0.0, LengthUnit::Pt)
    }
}

impl Dimen {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn pt(value: f32) -> Self {
        Self::new(value, LengthUnit::Pt)
    }

    pub fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Convert to points in the given context
    pub fn to_points(&self, ctx: &UnitContext) -> f32 {
        self.value * self.unit.points_per_unit(ctx)
    }
}

impl FromStr for Dimen {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| BoxError::InvalidLength(format!("missing unit in '{}'", trimmed)))?;
        let (number, unit) = trimmed.split_at(split);
        let number = number.trim();
        let value = number
            .parse::<f32>()
            .map_err(|_| BoxError::InvalidLength(format!("bad number '{}'", number)))?;
        let unit = unit.trim().to_ascii_lowercase().parse::<LengthUnit>()?;
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Dimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
