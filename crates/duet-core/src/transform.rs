//! Input normalization applied to both sides before a comparison.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("static pattern"));
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static pattern"));

/// A normalization step run over both inputs before diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// Lowercase everything, for case-insensitive comparison.
    Lowercase,
    /// Sort lines lexicographically, for order-insensitive comparison.
    SortLines,
    /// Squeeze insignificant whitespace: tabs to spaces, space runs to a
    /// single space, trimmed lines, at most one blank line in a row.
    CollapseWhitespace,
    /// Replace every line break with a space, flattening to one line.
    JoinLines,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown transform '{0}', expected one of: lowercase, sort-lines, collapse-whitespace, join-lines")]
pub struct ParseTransformError(String);

impl Transform {
    pub const ALL: [Transform; 4] = [
        Transform::Lowercase,
        Transform::SortLines,
        Transform::CollapseWhitespace,
        Transform::JoinLines,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Lowercase => "lowercase",
            Transform::SortLines => "sort-lines",
            Transform::CollapseWhitespace => "collapse-whitespace",
            Transform::JoinLines => "join-lines",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Lowercase => text.to_lowercase(),
            Transform::SortLines => {
                let mut lines: Vec<&str> = text.split('\n').collect();
                lines.sort_unstable();
                lines.join("\n")
            }
            Transform::CollapseWhitespace => collapse_whitespace(text),
            Transform::JoinLines => text.replace('\n', " "),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = ParseTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transform::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseTransformError(s.to_string()))
    }
}

fn collapse_whitespace(text: &str) -> String {
    let text = text.replace('\t', " ");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text: String = text
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}
