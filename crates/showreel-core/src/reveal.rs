//! Scroll-triggered reveal bookkeeping.
//!
//! The frontend installs a viewport intersection observer (threshold
//! [`REVEAL_THRESHOLD`], bottom margin contracted by
//! [`REVEAL_BOTTOM_MARGIN_PX`]) over the animatable elements and feeds every
//! crossing here. The first sufficient crossing reveals an element; elements
//! stay observed, and later crossings are absorbed without effect.

use std::collections::HashSet;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Contraction of the bottom viewport edge, in pixels.
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 50;

/// Set of element ids that have crossed the reveal threshold.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report for `id`.
    ///
    /// Returns `true` only when this crossing reveals the element for the
    /// first time; sub-threshold reports and repeat crossings return `false`.
    pub fn observe(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
