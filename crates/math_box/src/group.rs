//! Box groups - ordered composition of child boxes

use crate::boxes::{BoxNode, TexBox};
use crate::error::{BoxError, BoxResult};
use crate::font::FontId;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};

/// Direction in which a group's children are composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along the baseline
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// A box composed of an ordered sequence of exclusively owned children
///
/// The group's metrics are whatever the layout algorithm gave it; adding
/// children does not change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub(crate) metrics: Metrics,
    axis: Axis,
    children: Vec<TexBox>,
}

impl BoxGroup {
    pub fn new(axis: Axis, metrics: Metrics) -> Self {
        Self {
            metrics,
            axis,
            children: Vec::new(),
        }
    }

    pub fn horizontal(metrics: Metrics) -> Self {
        Self::new(Axis::Horizontal, metrics)
    }

    pub fn vertical(metrics: Metrics) -> Self {
        Self::new(Axis::Vertical, metrics)
    }

    /// Builder form of [`BoxGroup::add`]
    pub fn with_child(mut self, child: impl Into<TexBox>) -> Self {
        self.add(child);
        self
    }

    /// Append a child after all existing children
    pub fn add(&mut self, child: impl Into<TexBox>) {
        let child = child.into();
        tracing::trace!("{}: appending {}", self.name(), child.name());
        self.children.push(child);
    }

    /// Insert a child so that it ends up at `position`
    ///
    /// Later children move one slot back. `position == len()` appends.
    /// Positions past the end are rejected and leave the group unchanged.
    pub fn insert(&mut self, position: usize, child: impl Into<TexBox>) -> BoxResult<()> {
        let len = self.children.len();
        if position > len {
            tracing::debug!(
                "{}: rejected insert at {} with {} children",
                self.name(),
                position,
                len
            );
            return Err(BoxError::IndexOutOfRange { position, len });
        }
        let child = child.into();
        tracing::trace!("{}: inserting {} at {}", self.name(), child.name(), position);
        self.children.insert(position, child);
        Ok(())
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn children(&self) -> &[TexBox] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Release the children, dropping the group itself
    pub fn into_children(self) -> Vec<TexBox> {
        self.children
    }
}

impl BoxNode for BoxGroup {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn copy_metrics(&mut self, other: &dyn BoxNode) {
        self.metrics = other.metrics();
    }

    /// Scans children from last to first and returns the first real font id
    ///
    /// Trailing children without glyphs (spaces, rules) are skipped.
    fn last_font_id(&self) -> FontId {
        self.children
            .iter()
            .rev()
            .map(|child| child.last_font_id())
            .find(|id| !id.is_no_font())
            .unwrap_or(FontId::NO_FONT)
    }

    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "HBox",
            Axis::Vertical => "VBox",
        }
    }
}
