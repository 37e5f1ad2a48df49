//! Box tree - the laid out form of a formula
//!
//! A [`TexBox`] is one node of the render tree handed from the layout
//! algorithm to the rendering backend. Leaves carry glyphs, rules or empty
//! space; [`BoxGroup`] composes children and [`DecorBox`] wraps a single
//! base with a rendering-only decoration.
//!
//! Every node exclusively owns its children, so a box can never be shared
//! between two parents. Metrics are set at construction and only replaced
//! wholesale through [`BoxNode::copy_metrics`]; nothing here recomputes them
//! from content.

use crate::decor::DecorBox;
use crate::font::FontId;
use crate::group::BoxGroup;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Box capabilities
// =============================================================================

/// Capabilities shared by every kind of box
pub trait BoxNode {
    /// Current footprint of the box
    fn metrics(&self) -> Metrics;

    /// Overwrite width, height, depth and shift with those of `other`
    ///
    /// Structural content (children, base) is left untouched.
    fn copy_metrics(&mut self, other: &dyn BoxNode);

    /// Font governing the last glyph this box paints, or [`FontId::NO_FONT`]
    fn last_font_id(&self) -> FontId;

    /// Short tag for diagnostics
    fn name(&self) -> &'static str;

    fn width(&self) -> f32 {
        self.metrics().width
    }

    fn height(&self) -> f32 {
        self.metrics().height
    }

    fn depth(&self) -> f32 {
        self.metrics().depth
    }

    fn shift(&self) -> f32 {
        self.metrics().shift
    }
}

// =============================================================================
// Leaf boxes
// =============================================================================

/// A single glyph from a known font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharBox {
    pub(crate) metrics: Metrics,
    ch: char,
    font_id: FontId,
}

impl CharBox {
    pub fn new(ch: char, font_id: FontId, metrics: Metrics) -> Self {
        Self {
            metrics,
            ch,
            font_id,
        }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn font_id(&self) -> FontId {
        self.font_id
    }
}

impl BoxNode for CharBox {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        self.metrics = other.metrics();
    }

    fn last_font_id(&self) -> FontId {
        self.font_id
    }

    fn name(&self) -> &'static str {
        "CharBox"
    }
}

/// Invisible box occupying space (glue, kerns, phantoms, struts)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrutBox {
    pub(crate) metrics: Metrics,
}

impl StrutBox {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    /// Empty box with all metrics zero
    pub fn empty() -> Self {
        Self::default()
    }

    /// Horizontal space of the given width
    pub fn space(width: f32) -> Self {
        Self::new(Metrics::new(width, 0.0, 0.0))
    }
}

impl BoxNode for StrutBox {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        self.metrics = other.metrics();
    }

    fn last_font_id(&self) -> FontId {
        FontId::NO_FONT
    }

    fn name(&self) -> &'static str {
        "StrutBox"
    }
}

/// Filled rectangle (fraction bars, radical overlines, table rules)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBox {
    pub(crate) metrics: Metrics,
}

impl RuleBox {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    /// Horizontal rule of `thickness` whose bottom edge sits `raise` above the baseline
    pub fn horizontal(width: f32, thickness: f32, raise: f32) -> Self {
        Self::new(Metrics::new(width, raise + thickness, -raise))
    }

    pub fn thickness(&self) -> f32 {
        self.metrics.total_height()
    }
}

impl BoxNode for RuleBox {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        self.metrics = other.metrics();
    }

    fn last_font_id(&self) -> FontId {
        FontId::NO_FONT
    }

    fn name(&self) -> &'static str {
        "RuleBox"
    }
}

// =============================================================================
// Box node
// =============================================================================

/// A node of the box tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TexBox {
    Char(CharBox),
    Strut(StrutBox),
    Rule(RuleBox),
    Group(BoxGroup),
    Decor(DecorBox),
}

impl TexBox {
    /// Direct children: all of a group's children, a decoration's base, none for leaves
    pub fn children(&self) -> &[TexBox] {
        match self {
            TexBox::Group(group) => group.children(),
            TexBox::Decor(decor) => std::slice::from_ref(decor.base()),
            TexBox::Char(_) | TexBox::Strut(_) | TexBox::Rule(_) => &[],
        }
    }

    /// Visit this box and all descendants depth-first, parents before children
    ///
    /// The callback receives each box along with its nesting depth (0 for `self`).
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&TexBox, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&TexBox, usize),
    {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }

    pub fn as_group(&self) -> Option<&BoxGroup> {
        match self {
            TexBox::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut BoxGroup> {
        match self {
            TexBox::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_decor(&self) -> Option<&DecorBox> {
        match self {
            TexBox::Decor(decor) => Some(decor),
            _ => None,
        }
    }

    fn node(&self) -> &dyn BoxNode {
        match self {
            TexBox::Char(b) => b,
            TexBox::Strut(b) => b,
            TexBox::Rule(b) => b,
            TexBox::Group(b) => b,
            TexBox::Decor(b) => b,
        }
    }

    fn node_mut(&mut self) -> &mut dyn BoxNode {
        match self {
            TexBox::Char(b) => b,
            TexBox::Strut(b) => b,
            TexBox::Rule(b) => b,
            TexBox::Group(b) => b,
            TexBox::Decor(b) => b,
        }
    }

    /// One-line description used in tree dumps
    fn label(&self) -> String {
        let m = self.metrics();
        let detail = match self {
            TexBox::Char(b) => format!(" '{}' {}", b.ch(), b.font_id()),
            TexBox::Group(g) => format!(" ({} children)", g.len()),
            _ => String::new(),
        };
        format!(
            "{}{} w={:.2} h={:.2} d={:.2} s={:.2}",
            self.name(),
            detail,
            m.width,
            m.height,
            m.depth,
            m.shift
        )
    }
}

impl BoxNode for TexBox {
    fn metrics(&self) -> Metrics {
        self.node().metrics()
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        tracing::trace!("{}: copying metrics {:?}", self.name(), other.metrics());
        self.node_mut().copy_metrics(other);
    }

    fn last_font_id(&self) -> FontId {
        self.node().last_font_id()
    }

    fn name(&self) -> &'static str {
        self.node().name()
    }
}

impl fmt::Display for TexBox {
    /// Indented dump of the whole subtree, one box per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        let mut first = true;
        self.walk(&mut |node, depth| {
            if result.is_err() {
                return;
            }
            if !first {
                result = writeln!(f);
            }
            first = false;
            if result.is_ok() {
                result = write!(f, "{:indent$}{}", "", node.label(), indent = depth * 2);
            }
        });
        result
    }
}

impl From<CharBox> for TexBox {
    fn from(b: CharBox) -> Self {
        TexBox::Char(b)
    }
}

impl From<StrutBox> for TexBox {
    fn from(b: StrutBox) -> Self {
        TexBox::Strut(b)
    }
}

impl From<RuleBox> for TexBox {
    fn from(b: RuleBox) -> Self {
        TexBox::Rule(b)
    }
}

impl From<BoxGroup> for TexBox {
    fn from(b: BoxGroup) -> Self {
        TexBox::Group(b)
    }
}

impl From<DecorBox> for TexBox {
    fn from(b: DecorBox) -> Self {
        TexBox::Decor(b)
    }
}

// =============================================================================
// Tests
// =============================================================================
