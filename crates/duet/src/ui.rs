//! Rendering for the interactive viewer

use crate::app::App;
use duet_core::{Cell, LineKind, Row, SpanKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Which pane of a row is being rendered
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    app.viewport_height = chunks[1].height as usize;
    app.clamp_scroll();

    draw_header(frame, app, chunks[0]);
    draw_panes(frame, app, chunks[1]);
    draw_footer(frame, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let (left_chars, right_chars) = app.session.char_counts();
    let counter = if app.navigator.total() > 0 {
        format!("{} of {}", app.navigator.current(), app.navigator.total())
    } else {
        "0 of 0".to_string()
    };

    let header = Line::from(vec![
        Span::styled(
            format!(" {} ({left_chars} chars)", app.left_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ({right_chars} chars)", app.right_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  —  {counter}"),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_panes(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_pane(frame, app, chunks[0], Side::Left);
    render_pane(frame, app, chunks[1], Side::Right);
}

fn render_pane(frame: &mut Frame, app: &App, area: Rect, side: Side) {
    let visible_height = area.height as usize;
    let current = app.navigator.current();

    let mut lines: Vec<Line> = Vec::new();
    for row in app.comparison.rows.iter().skip(app.scroll) {
        if lines.len() >= visible_height {
            break;
        }
        let is_current = current > 0 && row.diff_index == Some(current);
        lines.push(row_line(app, row, side, is_current));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn row_line<'a>(app: &App, row: &'a Row, side: Side, is_current: bool) -> Line<'a> {
    let cell = match side {
        Side::Left => &row.left,
        Side::Right => &row.right,
    };

    let mut spans: Vec<Span> = Vec::new();

    // Gutter: current-diff marker, then the line number.
    let marker = if is_current {
        Span::styled(
            app.marker.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(" ")
    };
    spans.push(marker);

    if app.line_numbers {
        let number = match cell {
            Cell::Line { number, .. } => format!("{number:4} "),
            Cell::Spacer => "     ".to_string(),
        };
        spans.push(Span::styled(number, Style::default().fg(Color::DarkGray)));
    }

    match cell {
        Cell::Spacer => {}
        Cell::Line {
            kind, spans: cell_spans, ..
        } => {
            for word_span in cell_spans {
                spans.push(Span::styled(
                    word_span.text.as_str(),
                    span_style(*kind, word_span.kind, is_current),
                ));
            }
        }
    }

    Line::from(spans)
}

fn span_style(line_kind: LineKind, span_kind: SpanKind, is_current: bool) -> Style {
    let style = match line_kind {
        LineKind::Unchanged => Style::default(),
        LineKind::Added => Style::default().fg(Color::Green),
        LineKind::Removed => Style::default().fg(Color::Red),
        LineKind::Modified => match span_kind {
            SpanKind::Equal => Style::default(),
            SpanKind::Added => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            SpanKind::Removed => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        },
    };

    if is_current {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = " n/p next/prev diff   j/k scroll   g/G top/bottom   s swap   q quit";
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
