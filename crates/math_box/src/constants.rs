//! Constant Vocabulary - Symbolic constants shared by the layout engine
//!
//! Each family is an independent enumeration. Some families share numeric
//! values, but values are never interchangeable across families. Every
//! family serializes as its integer value so persisted formats keep the
//! exact numeric encoding.

use crate::error::BoxError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Alignment
// =============================================================================

/// Alignment of a formula inside the space allotted to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum Alignment {
    /// Extra space is added to the right of the formula
    Left = 0,
    /// Extra space is added to the left of the formula
    Right = 1,
    /// Centered, valid both horizontally and vertically
    Center = 2,
    /// Extra space is added under the formula
    Top = 3,
    /// Extra space is added above the formula
    Bottom = 4,
    None = 5,
}

impl Alignment {
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Whether this alignment applies along the horizontal axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Center)
    }

    /// Whether this alignment applies along the vertical axis
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Center)
    }
}

impl From<Alignment> for i32 {
    fn from(align: Alignment) -> Self {
        align.value()
    }
}

impl TryFrom<i32> for Alignment {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Center),
            3 => Ok(Self::Top),
            4 => Ok(Self::Bottom),
            5 => Ok(Self::None),
            _ => Err(BoxError::UnknownConstant {
                family: "alignment",
                value,
            }),
        }
    }
}

// =============================================================================
// Space sizes
// =============================================================================

/// Math spacing amounts, in units of the corresponding mu-skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum SpaceSize {
    NegThick = -3,
    NegMed = -2,
    NegThin = -1,
    Thin = 1,
    Med = 2,
    Thick = 3,
}

impl SpaceSize {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn is_negative(self) -> bool {
        self.value() < 0
    }

    /// The same amount of space with the opposite sign
    pub fn negated(self) -> Self {
        match self {
            Self::NegThick => Self::Thick,
            Self::NegMed => Self::Med,
            Self::NegThin => Self::Thin,
            Self::Thin => Self::NegThin,
            Self::Med => Self::NegMed,
            Self::Thick => Self::NegThick,
        }
    }
}

/// Space code for a quad (`\quad`)
///
/// Shares its value with [`SpaceSize::Thick`] but names a different amount,
/// so it is kept outside the [`SpaceSize`] family.
pub const QUAD: i32 = 3;

impl From<SpaceSize> for i32 {
    fn from(size: SpaceSize) -> Self {
        size.value()
    }
}

impl TryFrom<i32> for SpaceSize {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -3 => Ok(Self::NegThick),
            -2 => Ok(Self::NegMed),
            -1 => Ok(Self::NegThin),
            1 => Ok(Self::Thin),
            2 => Ok(Self::Med),
            3 => Ok(Self::Thick),
            _ => Err(BoxError::UnknownConstant {
                family: "space size",
                value,
            }),
        }
    }
}

// =============================================================================
// Script display
// =============================================================================

/// How scripts attached to a big operator are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum ScriptDisplay {
    /// Placement decided by the current math style
    #[default]
    Normal = 0,
    /// Scripts attached to the side (`\nolimits`)
    NoLimits = 1,
    /// Scripts stacked above and below (`\limits`)
    Limits = 2,
}

impl ScriptDisplay {
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl From<ScriptDisplay> for i32 {
    fn from(display: ScriptDisplay) -> Self {
        display.value()
    }
}

impl TryFrom<i32> for ScriptDisplay {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::NoLimits),
            2 => Ok(Self::Limits),
            _ => Err(BoxError::UnknownConstant {
                family: "script display",
                value,
            }),
        }
    }
}

// =============================================================================
// Atom types
// =============================================================================

/// Semantic class of an atom, driving inter-atom spacing
///
/// Values 8 and 9 are reserved and must stay unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum AtomType {
    /// Ordinary symbol, e.g. "slash"
    #[default]
    Ordinary = 0,
    /// Big operator, e.g. "sum"
    BigOperator = 1,
    /// Binary operator, e.g. "plus"
    BinaryOperator = 2,
    /// Relation, e.g. "equals"
    Relation = 3,
    /// Opening symbol, e.g. "lbrace"
    Opening = 4,
    /// Closing symbol, e.g. "rbrace"
    Closing = 5,
    /// Punctuation symbol, e.g. "comma"
    Punctuation = 6,
    /// Inner atom (never used for symbols)
    Inner = 7,
    /// Accent, e.g. "hat"
    Accent = 10,
    /// Inter-text in a matrix environment
    Intertext = 11,
    /// Multi-column cell in a matrix environment
    Multicolumn = 12,
    /// Horizontal line in a matrix environment
    Hline = 13,
    /// Multi-row cell in a matrix environment
    Multirow = 14,
}

impl AtomType {
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Whether the type only occurs inside matrix environments
    pub fn is_matrix_only(self) -> bool {
        matches!(
            self,
            Self::Intertext | Self::Multicolumn | Self::Hline | Self::Multirow
        )
    }
}

impl From<AtomType> for i32 {
    fn from(atom_type: AtomType) -> Self {
        atom_type.value()
    }
}

impl TryFrom<i32> for AtomType {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ordinary),
            1 => Ok(Self::BigOperator),
            2 => Ok(Self::BinaryOperator),
            3 => Ok(Self::Relation),
            4 => Ok(Self::Opening),
            5 => Ok(Self::Closing),
            6 => Ok(Self::Punctuation),
            7 => Ok(Self::Inner),
            10 => Ok(Self::Accent),
            11 => Ok(Self::Intertext),
            12 => Ok(Self::Multicolumn),
            13 => Ok(Self::Hline),
            14 => Ok(Self::Multirow),
            _ => Err(BoxError::UnknownConstant {
                family: "atom type",
                value,
            }),
        }
    }
}

// =============================================================================
// Over/under delimiters
// =============================================================================

/// Delimiter drawn over or under a base (`\overbrace`, `\underrightarrow`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum DelimiterType {
    Brace = 0,
    SquareBracket = 1,
    Bracket = 2,
    LeftArrow = 3,
    RightArrow = 4,
    LeftRightArrow = 5,
    DoubleLeftArrow = 6,
    DoubleRightArrow = 7,
    DoubleLeftRightArrow = 8,
    SingleLine = 9,
    DoubleLine = 10,
}

impl DelimiterType {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::LeftArrow
                | Self::RightArrow
                | Self::LeftRightArrow
                | Self::DoubleLeftArrow
                | Self::DoubleRightArrow
                | Self::DoubleLeftRightArrow
        )
    }
}

impl From<DelimiterType> for i32 {
    fn from(delim: DelimiterType) -> Self {
        delim.value()
    }
}

impl TryFrom<i32> for DelimiterType {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Brace),
            1 => Ok(Self::SquareBracket),
            2 => Ok(Self::Bracket),
            3 => Ok(Self::LeftArrow),
            4 => Ok(Self::RightArrow),
            5 => Ok(Self::LeftRightArrow),
            6 => Ok(Self::DoubleLeftArrow),
            7 => Ok(Self::DoubleRightArrow),
            8 => Ok(Self::DoubleLeftRightArrow),
            9 => Ok(Self::SingleLine),
            10 => Ok(Self::DoubleLine),
            _ => Err(BoxError::UnknownConstant {
                family: "delimiter type",
                value,
            }),
        }
    }
}

// =============================================================================
// Math styles
// =============================================================================

/// TeX math style
///
/// Styles are spaced by two so the layout engine can step between sizes
/// pairwise; odd values are never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum MathStyle {
    /// Large operators with limits above and below; largest symbol size
    Display = 0,
    /// Small operators with limits as scripts; same symbol size as display
    #[default]
    Text = 2,
    /// Like text, with smaller symbols
    Script = 4,
    /// Like script, with smaller symbols still
    ScriptScript = 6,
}

impl MathStyle {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn is_display(self) -> bool {
        self == Self::Display
    }

    /// Style used for superscripts and subscripts attached in this style
    pub fn script_style(self) -> Self {
        match self {
            Self::Display | Self::Text => Self::Script,
            Self::Script | Self::ScriptScript => Self::ScriptScript,
        }
    }

    /// Style used for the numerator and denominator of a fraction
    pub fn fraction_style(self) -> Self {
        match self {
            Self::Display => Self::Text,
            Self::Text => Self::Script,
            Self::Script | Self::ScriptScript => Self::ScriptScript,
        }
    }
}

impl From<MathStyle> for i32 {
    fn from(style: MathStyle) -> Self {
        style.value()
    }
}

impl TryFrom<i32> for MathStyle {
    type Error = BoxError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Display),
            2 => Ok(Self::Text),
            4 => Ok(Self::Script),
            6 => Ok(Self::ScriptScript),
            _ => Err(BoxError::UnknownConstant {
                family: "math style",
                value,
            }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_type_values() {
        assert_eq!(AtomType::Ordinary.value(), 0);
        assert_eq!(AtomType::Inner.value(), 7);
        assert_eq!(AtomType::Accent.value(), 10);
        assert_eq!(AtomType::Multirow.value(), 14);
    }

    #[test]
    fn test_atom_type_reserved_gap() {
        for value in [8, 9, 15, -1] {
            let err = AtomType::try_from(value).unwrap_err();
            assert!(matches!(
                err,
                BoxError::UnknownConstant {
                    family: "atom type",
                    ..
                }
            ));
        }
        assert_eq!(AtomType::try_from(11).unwrap(), AtomType::Intertext);
    }

    #[test]
    fn test_math_style_values() {
        assert_eq!(MathStyle::Display.value(), 0);
        assert_eq!(MathStyle::Text.value(), 2);
        assert_eq!(MathStyle::Script.value(), 4);
        assert_eq!(MathStyle::ScriptScript.value(), 6);
        assert!(MathStyle::try_from(3).is_err());
        assert!(MathStyle::Display < MathStyle::ScriptScript);
    }

    #[test]
    fn test_math_style_reduction() {
        assert_eq!(MathStyle::Display.script_style(), MathStyle::Script);
        assert_eq!(MathStyle::Text.script_style(), MathStyle::Script);
        assert_eq!(MathStyle::Script.script_style(), MathStyle::ScriptScript);
        assert_eq!(MathStyle::Display.fraction_style(), MathStyle::Text);
        assert_eq!(MathStyle::Text.fraction_style(), MathStyle::Script);
        assert_eq!(
            MathStyle::ScriptScript.fraction_style(),
            MathStyle::ScriptScript
        );
    }

    #[test]
    fn test_alignment_axes() {
        assert!(Alignment::Left.is_horizontal());
        assert!(!Alignment::Left.is_vertical());
        assert!(Alignment::Center.is_horizontal());
        assert!(Alignment::Center.is_vertical());
        assert!(!Alignment::None.is_horizontal());
        assert!(!Alignment::None.is_vertical());
        assert_eq!(Alignment::try_from(5).unwrap(), Alignment::None);
        assert!(Alignment::try_from(6).is_err());
    }

    #[test]
    fn test_space_size_negation() {
        assert_eq!(SpaceSize::Thin.negated(), SpaceSize::NegThin);
        assert_eq!(SpaceSize::NegThick.negated(), SpaceSize::Thick);
        assert!(SpaceSize::NegMed.is_negative());
        assert!(SpaceSize::try_from(0).is_err());
    }

    #[test]
    fn test_delimiter_types() {
        assert_eq!(DelimiterType::DoubleLine.value(), 10);
        assert!(DelimiterType::DoubleLeftRightArrow.is_arrow());
        assert!(!DelimiterType::Brace.is_arrow());
        assert!(DelimiterType::try_from(11).is_err());
    }

    #[test]
    fn test_script_display_default() {
        assert_eq!(ScriptDisplay::default(), ScriptDisplay::Normal);
        assert_eq!(ScriptDisplay::try_from(2).unwrap(), ScriptDisplay::Limits);
    }

    #[test]
    fn test_serialization_as_integers() {
        let json = serde_json::to_string(&AtomType::Accent).unwrap();
        assert_eq!(json, "10");

        let style: MathStyle = serde_json::from_str("4").unwrap();
        assert_eq!(style, MathStyle::Script);

        assert!(serde_json::from_str::<AtomType>("8").is_err());

        assert_eq!(serde_json::to_string(&SpaceSize::NegThick).unwrap(), "-3");
        let size: SpaceSize = serde_json::from_str("-3").unwrap();
        assert_eq!(size, SpaceSize::NegThick);
        assert!(serde_json::from_str::<SpaceSize>("0").is_err());

        assert_eq!(serde_json::to_string(&Alignment::Bottom).unwrap(), "4");
        let align: Alignment = serde_json::from_str("1").unwrap();
        assert_eq!(align, Alignment::Right);
        assert!(serde_json::from_str::<Alignment>("6").is_err());

        assert_eq!(serde_json::to_string(&DelimiterType::SingleLine).unwrap(), "9");
        let delim: DelimiterType = serde_json::from_str("3").unwrap();
        assert_eq!(delim, DelimiterType::LeftArrow);
        assert!(serde_json::from_str::<DelimiterType>("11").is_err());

        assert_eq!(serde_json::to_string(&ScriptDisplay::NoLimits).unwrap(), "1");
        let display: ScriptDisplay = serde_json::from_str("2").unwrap();
        assert_eq!(display, ScriptDisplay::Limits);
        assert!(serde_json::from_str::<ScriptDisplay>("3").is_err());

        assert!(serde_json::from_str::<MathStyle>("5").is_err());
    }

    #[test]
    fn test_quad_code() {
        assert_eq!(QUAD, 3);
        assert_eq!(SpaceSize::try_from(QUAD).unwrap(), SpaceSize::Thick);
    }
}
