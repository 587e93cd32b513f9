//! Position tracking while stepping through the navigable diffs.

use serde::{Deserialize, Serialize};

/// Cursor over the navigable blocks of one comparison.
///
/// `current` is 1-based and `0` only when there is nothing to navigate.
/// Stepping wraps around in both directions. The navigator is a plain
/// value owned by the caller; it holds no reference to the comparison it
/// was built from and is rebuilt whenever the inputs are re-compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Start on the first diff, or on nothing when `total` is zero.
    pub fn new(total: usize) -> Self {
        Self {
            current: if total > 0 { 1 } else { 0 },
            total,
        }
    }

    /// 1-based index of the current diff, 0 when there are none.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of navigable diffs.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Step forward, wrapping from the last diff to the first.
    pub fn next(&mut self) -> usize {
        if self.total > 0 {
            self.current = if self.current >= self.total {
                1
            } else {
                self.current + 1
            };
        }
        self.current
    }

    /// Step backward, wrapping from the first diff to the last.
    pub fn prev(&mut self) -> usize {
        if self.total > 0 {
            self.current = if self.current <= 1 {
                self.total
            } else {
                self.current - 1
            };
        }
        self.current
    }

    /// Jump to a specific diff, clamped into `1..=total`.
    pub fn goto(&mut self, index: usize) -> usize {
        if self.total > 0 {
            self.current = index.clamp(1, self.total);
        }
        self.current
    }
}
