//! LCS-based change engine shared by the line and word passes.
//!
//! The same algorithm runs twice per comparison: once over lines for the
//! outer pass, once over whitespace/word runs inside modified lines. It is
//! a classic dynamic-programming LCS with a forward walk over the table,
//! O(n*m) in time and space, which is plenty for the hundreds to low
//! thousands of tokens a text compare sees.

use serde::{Deserialize, Serialize};

/// How a segment relates the two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTag {
    /// Present in both inputs.
    Equal,
    /// Present only in the right (new) input.
    Inserted,
    /// Present only in the left (old) input.
    Deleted,
}

/// A contiguous run of same-tagged tokens from one alignment pass.
///
/// Segments partition both inputs losslessly: concatenating the tokens of
/// all `Equal` and `Deleted` segments reproduces the left input's tokens,
/// and all `Equal` and `Inserted` segments the right input's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSegment {
    pub tag: ChangeTag,
    pub tokens: Vec<String>,
}

impl ChangeSegment {
    /// The segment's tokens joined back into one string.
    ///
    /// Only meaningful for word-mode segments, where the tokens are
    /// alternating whitespace/non-whitespace runs of the original text.
    pub fn text(&self) -> String {
        self.tokens.concat()
    }
}

/// Split text into lines for the outer diff pass.
///
/// Splits on `'\n'` and drops the single empty element a trailing newline
/// produces, so `"a\n"` is one line, not a line plus a phantom blank.
/// Empty input yields no tokens.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// Split text into alternating maximal runs of whitespace and
/// non-whitespace, so whitespace edits surface as their own segments.
pub fn split_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_ws = false;

    for ch in text.chars() {
        let is_ws = ch.is_whitespace();
        if !run.is_empty() && is_ws != run_is_ws {
            tokens.push(std::mem::take(&mut run));
        }
        run_is_ws = is_ws;
        run.push(ch);
    }
    if !run.is_empty() {
        tokens.push(run);
    }
    tokens
}

/// Line-by-line diff of two texts.
pub fn diff_lines(old: &str, new: &str) -> Vec<ChangeSegment> {
    diff_tokens(&split_lines(old), &split_lines(new))
}

/// Word-by-word diff of two texts (whitespace runs are tokens too).
pub fn diff_words(old: &str, new: &str) -> Vec<ChangeSegment> {
    diff_tokens(&split_words(old), &split_words(new))
}

/// Minimal edit script between two token sequences.
///
/// Builds the suffix LCS table and walks it from the front, so segments
/// come out in input order with consecutive same-tagged tokens already
/// coalesced. On a replaced region the deleted tokens are emitted as one
/// run before the inserted ones, matching conventional LCS diff output.
pub fn diff_tokens(old: &[String], new: &[String]) -> Vec<ChangeSegment> {
    let n = old.len();
    let m = new.len();

    // lcs[i][j] = length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut segments: Vec<ChangeSegment> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            push_token(&mut segments, ChangeTag::Equal, &old[i]);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            // Ties take the deletion so replaced regions group as
            // deleted-then-inserted rather than interleaving.
            push_token(&mut segments, ChangeTag::Deleted, &old[i]);
            i += 1;
        } else {
            push_token(&mut segments, ChangeTag::Inserted, &new[j]);
            j += 1;
        }
    }
    while i < n {
        push_token(&mut segments, ChangeTag::Deleted, &old[i]);
        i += 1;
    }
    while j < m {
        push_token(&mut segments, ChangeTag::Inserted, &new[j]);
        j += 1;
    }

    segments
}

/// Append a token, extending the last segment when the tag matches.
fn push_token(segments: &mut Vec<ChangeSegment>, tag: ChangeTag, token: &str) {
    match segments.last_mut() {
        Some(last) if last.tag == tag => last.tokens.push(token.to_string()),
        _ => segments.push(ChangeSegment {
            tag,
            tokens: vec![token.to_string()],
        }),
    }
}
