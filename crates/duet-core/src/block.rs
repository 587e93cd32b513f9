//! Reconciles the raw change segments of the line pass into user-facing
//! blocks: unchanged, added, removed, or modified.

use crate::diff::{ChangeSegment, ChangeTag};
use serde::{Deserialize, Serialize};

/// Classification of a reconciled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// A reconciled unit of comparison.
///
/// Holds the lines each side contributes to the block; one side is empty
/// for `Added`/`Removed`. Concatenating the `left_lines` of all blocks in
/// order reproduces the left input's lines, and likewise on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffBlock {
    pub kind: BlockKind,
    pub left_lines: Vec<String>,
    pub right_lines: Vec<String>,
    /// 1-based position among the navigable (non-unchanged) blocks.
    pub diff_index: Option<usize>,
}

impl DiffBlock {
    /// True for every block a user can jump to.
    pub fn is_navigable(&self) -> bool {
        self.kind != BlockKind::Unchanged
    }
}

/// Merge the line-pass segments into blocks.
///
/// Single left-to-right pass with one segment of lookahead. A deleted
/// segment directly followed by an inserted one becomes a single
/// `Modified` block; that adjacency is the only merge rule, and it is
/// order-sensitive: inserted-then-deleted stays two separate blocks.
pub fn reconcile(segments: &[ChangeSegment]) -> Vec<DiffBlock> {
    let mut blocks = Vec::new();
    let mut counter = 0usize;
    let mut numbered = |kind: BlockKind, left: Vec<String>, right: Vec<String>| {
        counter += 1;
        DiffBlock {
            kind,
            left_lines: left,
            right_lines: right,
            diff_index: Some(counter),
        }
    };

    let mut i = 0;
    while i < segments.len() {
        let segment = &segments[i];
        let followed_by_insert = segments
            .get(i + 1)
            .is_some_and(|next| next.tag == ChangeTag::Inserted);

        match segment.tag {
            ChangeTag::Deleted if followed_by_insert => {
                blocks.push(numbered(
                    BlockKind::Modified,
                    segment.tokens.clone(),
                    segments[i + 1].tokens.clone(),
                ));
                i += 2;
            }
            ChangeTag::Deleted => {
                blocks.push(numbered(BlockKind::Removed, segment.tokens.clone(), Vec::new()));
                i += 1;
            }
            ChangeTag::Inserted => {
                blocks.push(numbered(BlockKind::Added, Vec::new(), segment.tokens.clone()));
                i += 1;
            }
            ChangeTag::Equal => {
                blocks.push(DiffBlock {
                    kind: BlockKind::Unchanged,
                    left_lines: segment.tokens.clone(),
                    right_lines: segment.tokens.clone(),
                    diff_index: None,
                });
                i += 1;
            }
        }
    }

    blocks
}

/// Number of blocks a user can navigate between.
pub fn count_navigable(blocks: &[DiffBlock]) -> usize {
    blocks.iter().filter(|b| b.is_navigable()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_lines;

    #[test]
    fn identical_input_is_one_unchanged_block() {
        let blocks = reconcile(&diff_lines("a\nb", "a\nb"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Unchanged);
        assert_eq!(blocks[0].left_lines, vec!["a", "b"]);
        assert_eq!(blocks[0].right_lines, vec!["a", "b"]);
        assert_eq!(blocks[0].diff_index, None);
        assert_eq!(count_navigable(&blocks), 0);
    }

    #[test]
    fn empty_inputs_reconcile_to_nothing() {
        let blocks = reconcile(&diff_lines("", ""));
        assert!(blocks.is_empty());
        assert_eq!(count_navigable(&blocks), 0);
    }

    #[test]
    fn pure_insertion_is_one_added_block() {
        let blocks = reconcile(&diff_lines("", "a\nb"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Added);
        assert!(blocks[0].left_lines.is_empty());
        assert_eq!(blocks[0].right_lines, vec!["a", "b"]);
        assert_eq!(blocks[0].diff_index, Some(1));
        assert_eq!(count_navigable(&blocks), 1);
    }

    #[test]
    fn pure_deletion_is_one_removed_block() {
        let blocks = reconcile(&diff_lines("a\nb", ""));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Removed);
        assert_eq!(blocks[0].left_lines, vec!["a", "b"]);
        assert!(blocks[0].right_lines.is_empty());
        assert_eq!(count_navigable(&blocks), 1);
    }

    #[test]
    fn deleted_then_inserted_merges_into_modified() {
        let blocks = reconcile(&diff_lines("a\nb", "a\nc"));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Unchanged);
        assert_eq!(blocks[1].kind, BlockKind::Modified);
        assert_eq!(blocks[1].left_lines, vec!["b"]);
        assert_eq!(blocks[1].right_lines, vec!["c"]);
        assert_eq!(blocks[1].diff_index, Some(1));
        assert_eq!(count_navigable(&blocks), 1);
    }

    #[test]
    fn inserted_then_deleted_does_not_merge() {
        use crate::diff::{ChangeSegment, ChangeTag};

        // Constructed directly: the engine itself emits delete-first, so
        // force the reversed adjacency to pin down the asymmetry.
        let segments = vec![
            ChangeSegment {
                tag: ChangeTag::Inserted,
                tokens: vec!["x".into()],
            },
            ChangeSegment {
                tag: ChangeTag::Deleted,
                tokens: vec!["y".into()],
            },
        ];
        let blocks = reconcile(&segments);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Added);
        assert_eq!(blocks[1].kind, BlockKind::Removed);
        assert_eq!(blocks[0].diff_index, Some(1));
        assert_eq!(blocks[1].diff_index, Some(2));
        assert_eq!(count_navigable(&blocks), 2);
    }

    #[test]
    fn diff_indices_number_navigable_blocks_in_order() {
        let blocks = reconcile(&diff_lines("a\nb\nc\nd", "a\nx\nc\ny\nd"));
        let indices: Vec<Option<usize>> = blocks.iter().map(|b| b.diff_index).collect();
        assert_eq!(indices, vec![None, Some(1), None, Some(2), None]);
        assert_eq!(count_navigable(&blocks), 2);
    }

    #[test]
    fn blocks_reconstruct_both_inputs() {
        use crate::diff::split_lines;

        let old = "shared\nold only\nshared too\ntail";
        let new = "shared\nnew only\nshared too\ntail\nadded";
        let blocks = reconcile(&diff_lines(old, new));

        let left: Vec<String> = blocks.iter().flat_map(|b| b.left_lines.clone()).collect();
        let right: Vec<String> = blocks.iter().flat_map(|b| b.right_lines.clone()).collect();
        assert_eq!(left, split_lines(old));
        assert_eq!(right, split_lines(new));
    }
}
