//! Font identifiers as seen by the box model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a loaded font
///
/// The font context owns the mapping from ids to fonts; the box model only
/// compares ids and tests for [`FontId::NO_FONT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(i32);

impl FontId {
    /// Sentinel for "no glyph here"
    pub const NO_FONT: FontId = FontId(-1);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn is_no_font(self) -> bool {
        self == Self::NO_FONT
    }

    /// The raw id, or `None` for the sentinel
    pub fn get(self) -> Option<i32> {
        if self.is_no_font() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for FontId {
    fn default() -> Self {
        Self::NO_FONT
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(id) => write!(f, "font#{}", id),
            None => f.write_str("no-font"),
        }
    }
}
