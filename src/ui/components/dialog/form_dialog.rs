//! Validation error and success dialogs

use super::base::{render_dialog, DialogConfig};
use crate::state::Dialog;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the form's modal dialog centered on the screen
pub fn render_form_dialog(frame: &mut Frame, dialog: &Dialog) {
    let color = match dialog {
        Dialog::ValidationError(_) => Color::Red,
        Dialog::Success(_) => Color::Green,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: dialog.title(),
            title_color: color,
            border_color: color,
            message: dialog.message(),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
