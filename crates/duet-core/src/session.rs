//! A comparison session: the two input strings and the results computed
//! from them.

use crate::block::{count_navigable, reconcile, DiffBlock};
use crate::diff::diff_lines;
use crate::render::{render_rows, Row};
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// The two texts being compared. This is the only state that survives
/// between comparisons; everything derived from it is recomputed in full
/// by [`Session::compare`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    left: String,
    right: String,
}

/// The complete result of one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub blocks: Vec<DiffBlock>,
    pub rows: Vec<Row>,
    /// Number of navigable (non-unchanged) blocks.
    pub total_diffs: usize,
}

impl Session {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Exchange the two sides.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Run a normalization over both sides.
    pub fn apply(&mut self, transform: Transform) {
        self.left = transform.apply(&self.left);
        self.right = transform.apply(&self.right);
    }

    /// Character count of each side, for the header display.
    pub fn char_counts(&self) -> (usize, usize) {
        (self.left.chars().count(), self.right.chars().count())
    }

    /// Compute the full comparison for the current inputs.
    pub fn compare(&self) -> Comparison {
        let segments = diff_lines(&self.left, &self.right);
        let blocks = reconcile(&segments);
        let rows = render_rows(&blocks);
        let total_diffs = count_navigable(&blocks);
        Comparison {
            blocks,
            rows,
            total_diffs,
        }
    }
}
