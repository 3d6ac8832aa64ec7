//! Emissive highlight levels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Emissive intensity pair for an interactable's material.
///
/// The renderer reads the current intensity; the attachment core only flips
/// between the two levels. Defaults match a detachable part (dark at rest,
/// bright when highlighted).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightLevels {
    /// Intensity when idle.
    pub normal: f64,
    /// Intensity when highlighted (hovered or held).
    pub highlight: f64,
}

impl Default for HighlightLevels {
    fn default() -> Self {
        Self {
            normal: 0.0,
            highlight: 5.0,
        }
    }
}

impl HighlightLevels {
    /// Create a new level pair.
    #[must_use]
    pub const fn new(normal: f64, highlight: f64) -> Self {
        Self { normal, highlight }
    }
}
