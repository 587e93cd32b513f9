//! One-shot plain rendering for pipes and `--format plain`.
//!
//! Produces two aligned text columns with per-side line numbers and a
//! change marker per line: `+` added, `-` removed, `~` modified. Colors
//! are ANSI escapes applied after the columns are padded, so alignment is
//! computed on the bare text.

use crossterm::style::Stylize;
use duet_core::{Cell, Comparison, LineKind, SpanKind};
use unicode_width::UnicodeWidthStr;

/// Widest left column we will pad to; longer lines spill over.
const MAX_COLUMN_WIDTH: usize = 100;

pub fn render(comparison: &Comparison, color: bool, line_numbers: bool) -> String {
    let column_width = comparison
        .rows
        .iter()
        .map(|row| row.left.text().width())
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMN_WIDTH);

    let mut out = String::new();
    for row in &comparison.rows {
        let left_plain = row.left.text();
        let padding = column_width.saturating_sub(left_plain.width());

        out.push_str(&format_cell(&row.left, color, line_numbers));
        out.push_str(&" ".repeat(padding));
        out.push_str(" │ ");
        out.push_str(&format_cell(&row.right, color, line_numbers));
        out.push('\n');
    }
    out
}

fn format_cell(cell: &Cell, color: bool, line_numbers: bool) -> String {
    let mut out = String::new();

    match cell {
        Cell::Spacer => {
            if line_numbers {
                out.push_str("     ");
            }
            out.push_str("  ");
        }
        Cell::Line {
            number,
            kind,
            spans,
        } => {
            if line_numbers {
                out.push_str(&format!("{number:4} "));
            }
            out.push(marker(*kind));
            out.push(' ');
            for span in spans {
                if color {
                    out.push_str(&styled(&span.text, *kind, span.kind));
                } else {
                    out.push_str(&span.text);
                }
            }
        }
    }

    out
}

fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged => ' ',
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Modified => '~',
    }
}

fn styled(text: &str, line_kind: LineKind, span_kind: SpanKind) -> String {
    match line_kind {
        LineKind::Unchanged => text.to_string(),
        LineKind::Added => text.green().to_string(),
        LineKind::Removed => text.red().to_string(),
        LineKind::Modified => match span_kind {
            SpanKind::Equal => text.to_string(),
            SpanKind::Added => text.green().bold().to_string(),
            SpanKind::Removed => text.red().bold().to_string(),
        },
    }
}
