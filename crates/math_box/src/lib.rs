//! Math Box Crate - Box model for math typesetting
//!
//! This crate provides the structural backbone of a formula layout engine:
//! - The box tree a laid out formula is represented as (glyphs, rules,
//!   space, groups and decorated boxes)
//! - Metrics (width, height, depth, baseline shift) and their propagation
//! - Font queries over the tree ("which font governs the last glyph")
//! - The constant vocabulary layout decisions are expressed in: atom types,
//!   alignments, math styles, delimiters, script display and space sizes
//! - Length units and their conversion to points
//!
//! Parsing formulas, computing layout and painting boxes are left to the
//! embedding engine.

pub mod boxes;
pub mod constants;
pub mod decor;
pub mod error;
pub mod font;
pub mod group;
pub mod metrics;
pub mod units;

pub use boxes::{BoxNode, CharBox, RuleBox, StrutBox, TexBox};
pub use constants::{
    Alignment, AtomType, DelimiterType, MathStyle, QUAD, ScriptDisplay, SpaceSize,
};
pub use decor::{Color, DecorBox, Decoration};
pub use error::*;
pub use font::FontId;
pub use group::{Axis, BoxGroup};
pub use metrics::Metrics;
pub use units::{Dimen, LengthUnit, UnitContext};
