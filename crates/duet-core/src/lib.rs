//! Core comparison engine for duet.
//!
//! The engine is strictly layered: [`diff`] computes an LCS edit script
//! over lines or words, [`block`] reconciles adjacent delete/insert runs
//! into user-facing blocks, and [`render`] lays the blocks out as paired
//! side-by-side rows with word-level highlight spans. [`nav`] tracks the
//! current position while stepping through differences, [`transform`]
//! normalizes inputs before comparison, and [`session`] ties a left/right
//! input pair to its computed comparison.
//!
//! Everything here is synchronous and purely functional over the input
//! strings: a comparison is recomputed in full on every call and no state
//! is shared between calls.

pub mod block;
pub mod diff;
pub mod nav;
pub mod render;
pub mod session;
pub mod transform;

pub use block::{count_navigable, reconcile, BlockKind, DiffBlock};
pub use diff::{diff_lines, diff_tokens, diff_words, ChangeSegment, ChangeTag};
pub use nav::Navigator;
pub use render::{render_rows, Cell, LineKind, Row, SpanKind, WordSpan};
pub use session::{Comparison, Session};
pub use transform::{ParseTransformError, Transform};
