//! Box metrics - the footprint of a box relative to its baseline

use serde::{Deserialize, Serialize};

/// Width, height, depth and baseline shift of a box
///
/// Values are signed; negative widths are used for kerns and backspacing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Horizontal extent
    pub width: f32,
    /// Extent above the baseline
    pub height: f32,
    /// Extent below the baseline
    pub depth: f32,
    /// Vertical offset of the baseline from the parent's reference line
    pub shift: f32,
}

impl Metrics {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            shift: 0.0,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: f32) -> Self {
        self.shift = shift;
        self
    }

    /// Height plus depth
    pub fn total_height(&self) -> f32 {
        self.height + self.depth
    }
}
