//! Presentation-agnostic side-by-side layout.
//!
//! Maps reconciled blocks onto parallel rows: every row has a left and a
//! right cell, where a cell is either a numbered line or a spacer that
//! keeps the opposite side aligned. Modified rows carry word-level
//! highlight spans; all other rows carry their full text as a single
//! equal span and are styled by line kind alone.

use crate::block::{BlockKind, DiffBlock};
use crate::diff::{diff_words, ChangeTag};
use serde::{Deserialize, Serialize};

/// Highlight classification of a span within a modified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Equal,
    Added,
    Removed,
}

/// A run of characters with one highlight classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl WordSpan {
    fn equal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Equal,
        }
    }
}

/// Classification of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// One side of a row: a real line or an alignment spacer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Spacer,
    Line {
        /// 1-based line number on this side.
        number: usize,
        kind: LineKind,
        spans: Vec<WordSpan>,
    },
}

impl Cell {
    fn line(number: usize, kind: LineKind, spans: Vec<WordSpan>) -> Self {
        Cell::Line {
            number,
            kind,
            spans,
        }
    }

    /// The cell's text with highlight spans flattened out; empty for spacers.
    pub fn text(&self) -> String {
        match self {
            Cell::Spacer => String::new(),
            Cell::Line { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

/// A pair of aligned cells, tagged with the diff it belongs to (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub left: Cell,
    pub right: Cell,
    pub diff_index: Option<usize>,
}

/// Lay the blocks out as parallel rows with per-side line numbers.
pub fn render_rows(blocks: &[DiffBlock]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut left_num = 1usize;
    let mut right_num = 1usize;

    for block in blocks {
        match block.kind {
            BlockKind::Unchanged => {
                for line in &block.left_lines {
                    rows.push(Row {
                        left: Cell::line(left_num, LineKind::Unchanged, vec![WordSpan::equal(line.as_str())]),
                        right: Cell::line(right_num, LineKind::Unchanged, vec![WordSpan::equal(line.as_str())]),
                        diff_index: None,
                    });
                    left_num += 1;
                    right_num += 1;
                }
            }
            BlockKind::Added => {
                for line in &block.right_lines {
                    rows.push(Row {
                        left: Cell::Spacer,
                        right: Cell::line(right_num, LineKind::Added, vec![WordSpan::equal(line.as_str())]),
                        diff_index: block.diff_index,
                    });
                    right_num += 1;
                }
            }
            BlockKind::Removed => {
                for line in &block.left_lines {
                    rows.push(Row {
                        left: Cell::line(left_num, LineKind::Removed, vec![WordSpan::equal(line.as_str())]),
                        right: Cell::Spacer,
                        diff_index: block.diff_index,
                    });
                    left_num += 1;
                }
            }
            BlockKind::Modified => {
                let pairs = block.left_lines.len().max(block.right_lines.len());
                for i in 0..pairs {
                    let left_line = block.left_lines.get(i).map(String::as_str).unwrap_or("");
                    let right_line = block.right_lines.get(i).map(String::as_str).unwrap_or("");

                    if !left_line.is_empty() && !right_line.is_empty() {
                        let (left_spans, right_spans) = word_spans(left_line, right_line);
                        rows.push(Row {
                            left: Cell::line(left_num, LineKind::Modified, left_spans),
                            right: Cell::line(right_num, LineKind::Modified, right_spans),
                            diff_index: block.diff_index,
                        });
                        left_num += 1;
                        right_num += 1;
                    } else if !left_line.is_empty() {
                        rows.push(Row {
                            left: Cell::line(left_num, LineKind::Removed, vec![WordSpan::equal(left_line)]),
                            right: Cell::Spacer,
                            diff_index: block.diff_index,
                        });
                        left_num += 1;
                    } else if !right_line.is_empty() {
                        rows.push(Row {
                            left: Cell::Spacer,
                            right: Cell::line(right_num, LineKind::Added, vec![WordSpan::equal(right_line)]),
                            diff_index: block.diff_index,
                        });
                        right_num += 1;
                    }
                    // Both sides empty at this index: no row. Line numbers
                    // do not advance because neither side rendered a line.
                }
            }
        }
    }

    rows
}

/// Word-level spans for one paired line of a modified block.
///
/// Equal runs appear on both sides, deletions only on the left, insertions
/// only on the right. Pairing is positional by design: the block's lines
/// are never re-aligned by a second LCS pass, so reordered lines within
/// one block will pair against the wrong partner.
fn word_spans(left_line: &str, right_line: &str) -> (Vec<WordSpan>, Vec<WordSpan>) {
    let mut left_spans = Vec::new();
    let mut right_spans = Vec::new();

    for segment in diff_words(left_line, right_line) {
        let text = segment.text();
        match segment.tag {
            ChangeTag::Equal => {
                left_spans.push(WordSpan::equal(text.clone()));
                right_spans.push(WordSpan::equal(text));
            }
            ChangeTag::Deleted => left_spans.push(WordSpan {
                text,
                kind: SpanKind::Removed,
            }),
            ChangeTag::Inserted => right_spans.push(WordSpan {
                text,
                kind: SpanKind::Added,
            }),
        }
    }

    (left_spans, right_spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::reconcile;
    use crate::diff::diff_lines;

    fn rows_for(old: &str, new: &str) -> Vec<Row> {
        render_rows(&reconcile(&diff_lines(old, new)))
    }

    #[test]
    fn unchanged_rows_number_both_sides() {
        let rows = rows_for("a\nb", "a\nb");
        assert_eq!(rows.len(), 2);
        for (idx, row) in rows.iter().enumerate() {
            let expected = idx + 1;
            assert!(matches!(
                row.left,
                Cell::Line { number, kind: LineKind::Unchanged, .. } if number == expected
            ));
            assert!(matches!(
                row.right,
                Cell::Line { number, kind: LineKind::Unchanged, .. } if number == expected
            ));
            assert_eq!(row.diff_index, None);
        }
    }

    #[test]
    fn added_lines_face_spacers() {
        let rows = rows_for("a", "a\nb\nc");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].left, Cell::Spacer);
        assert!(matches!(
            rows[1].right,
            Cell::Line { number: 2, kind: LineKind::Added, .. }
        ));
        assert_eq!(rows[1].diff_index, Some(1));
        // The left side's numbering is untouched by the spacer rows.
        assert!(matches!(rows[0].left, Cell::Line { number: 1, .. }));
    }

    #[test]
    fn removed_lines_face_spacers() {
        let rows = rows_for("a\nb\nc", "a");
        assert_eq!(rows.len(), 3);
        assert!(matches!(
            rows[2].left,
            Cell::Line { number: 3, kind: LineKind::Removed, .. }
        ));
        assert_eq!(rows[2].right, Cell::Spacer);
    }

    #[test]
    fn modified_pair_gets_word_spans() {
        let rows = rows_for("foo bar", "foo baz");
        assert_eq!(rows.len(), 1);

        let Cell::Line { kind, spans, .. } = &rows[0].left else {
            panic!("left side should be a line");
        };
        assert_eq!(*kind, LineKind::Modified);
        assert_eq!(
            spans,
            &vec![
                WordSpan::equal("foo "),
                WordSpan {
                    text: "bar".into(),
                    kind: SpanKind::Removed
                },
            ]
        );

        let Cell::Line { spans, .. } = &rows[0].right else {
            panic!("right side should be a line");
        };
        assert_eq!(
            spans,
            &vec![
                WordSpan::equal("foo "),
                WordSpan {
                    text: "baz".into(),
                    kind: SpanKind::Added
                },
            ]
        );
    }

    #[test]
    fn uneven_modified_block_pads_with_spacers() {
        // Left has one line, right replaces it with three.
        let rows = rows_for("old line", "new line\nsecond\nthird");
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0].left, Cell::Line { kind: LineKind::Modified, .. }));
        assert!(matches!(rows[0].right, Cell::Line { kind: LineKind::Modified, .. }));
        assert_eq!(rows[1].left, Cell::Spacer);
        assert!(matches!(rows[1].right, Cell::Line { kind: LineKind::Added, .. }));
        assert_eq!(rows[2].left, Cell::Spacer);
        // Every row of the block shares its diff index.
        assert!(rows.iter().all(|r| r.diff_index == Some(1)));
    }

    #[test]
    fn empty_paired_with_empty_emits_no_row() {
        use crate::block::{BlockKind, DiffBlock};

        let block = DiffBlock {
            kind: BlockKind::Modified,
            left_lines: vec!["".into(), "x".into()],
            right_lines: vec!["".into(), "y".into()],
            diff_index: Some(1),
        };
        let rows = render_rows(&[block]);
        // Index 0 pairs two empty lines and vanishes; index 1 renders.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].left.text(), "x");
        assert_eq!(rows[0].right.text(), "y");
    }

    #[test]
    fn empty_line_against_content_becomes_one_sided() {
        use crate::block::{BlockKind, DiffBlock};

        let block = DiffBlock {
            kind: BlockKind::Modified,
            left_lines: vec!["".into()],
            right_lines: vec!["text".into()],
            diff_index: Some(1),
        };
        let rows = render_rows(&[block]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].left, Cell::Spacer);
        assert!(matches!(rows[0].right, Cell::Line { kind: LineKind::Added, .. }));
    }

    #[test]
    fn row_text_reconstructs_sides() {
        let old = "one\ntwo\nthree";
        let new = "one\n2\nthree\nfour";
        let rows = rows_for(old, new);

        let left: Vec<String> = rows
            .iter()
            .filter(|r| r.left != Cell::Spacer)
            .map(|r| r.left.text())
            .collect();
        let right: Vec<String> = rows
            .iter()
            .filter(|r| r.right != Cell::Spacer)
            .map(|r| r.right.text())
            .collect();

        assert_eq!(left, vec!["one", "two", "three"]);
        assert_eq!(right, vec!["one", "2", "three", "four"]);
    }
}
