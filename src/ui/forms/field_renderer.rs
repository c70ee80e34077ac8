//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Text shown for an inactive field with nothing in it
fn placeholder(field: &FormField) -> Option<&'static str> {
    match &field.value {
        FieldValue::Text(s) if s.is_empty() => Some("(empty)"),
        FieldValue::Choice { selected: 0, .. } => Some("(select)"),
        _ => None,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = if is_active { Color::Cyan } else { Color::DarkGray };
    let style = Style::default().fg(color);
    let cursor_style = Style::default().fg(Color::Cyan);

    let display_str = match placeholder(field) {
        Some(text) if !is_active => text.to_string(),
        _ => field.display_value(),
    };

    // Selection fields show their arrows instead of a cursor
    let cursor = if is_active && !field.is_choice() {
        CURSOR
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
