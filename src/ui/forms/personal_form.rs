//! Personal data form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FormButton, BUTTONS_ROW, FIELD_COUNT};
use crate::ui::components::{render_button, BUTTON_HEIGHT, BUTTON_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen rectangles of the form, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub fields: [Rect; FIELD_COUNT],
    pub buttons: [Rect; 2],
    pub help: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Name
                Constraint::Length(3),             // Email
                Constraint::Length(3),             // Age
                Constraint::Length(3),             // Phone
                Constraint::Min(4),                // Address
                Constraint::Length(3),             // Gender
                Constraint::Length(3),             // Education
                Constraint::Length(BUTTON_HEIGHT), // Save / Clear
                Constraint::Length(1),             // Help text
            ])
            .margin(1)
            .split(area);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(1),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(chunks[FIELD_COUNT]);

        Self {
            fields: std::array::from_fn(|i| chunks[i]),
            buttons: [button_chunks[0], button_chunks[2]],
            help: chunks[FIELD_COUNT + 1],
        }
    }

    /// Index of the field under a screen position
    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.fields.iter().position(|r| r.contains(pos))
    }

    /// Button under a screen position
    pub fn button_at(&self, column: u16, row: u16) -> Option<FormButton> {
        let pos = Position::new(column, row);
        self.buttons
            .iter()
            .position(|r| r.contains(pos))
            .map(|i| FormButton::ALL[i])
    }
}

/// Draw the personal data form
pub fn draw_personal_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let layout = FormLayout::new(area);

    let block = Block::default()
        .title(" Personal Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, field) in form.fields().into_iter().enumerate() {
        draw_field(
            frame,
            layout.fields[idx],
            field,
            form.active_field_index == idx,
        );
    }

    let on_buttons = form.active_field_index == BUTTONS_ROW;
    for (rect, button) in layout.buttons.into_iter().zip(FormButton::ALL) {
        render_button(
            frame,
            rect,
            button.label(),
            on_buttons && form.selected_button == button,
        );
    }

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let mut help_spans = vec![key("Tab"), Span::raw(": next field  ")];
    if form.is_active_field_choice() {
        help_spans.extend([key("←/→"), Span::raw(": choose  ")]);
    } else if on_buttons {
        help_spans.extend([
            key("←/→"),
            Span::raw(": select  "),
            key("Enter"),
            Span::raw(": press  "),
            key("q"),
            Span::raw(": quit  "),
        ]);
    }
    help_spans.extend([
        key(crate::platform::SAVE_SHORTCUT),
        Span::raw(": save  "),
        key(crate::platform::CLEAR_SHORTCUT),
        Span::raw(": clear"),
    ]);

    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout.help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_personal_form(frame, area, app);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_fields_do_not_overlap() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 40));
        for pair in layout.fields.windows(2) {
            assert!(pair[0].bottom() <= pair[1].top());
        }
        assert!(layout.fields[FIELD_COUNT - 1].bottom() <= layout.buttons[0].top());
    }

    #[test]
    fn test_address_gets_extra_height() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 40));
        assert!(layout.fields[4].height > layout.fields[0].height);
    }

    #[test]
    fn test_field_at_maps_rows_to_fields() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 40));
        let email = layout.fields[1];
        assert_eq!(layout.field_at(email.x + 2, email.y + 1), Some(1));
        assert_eq!(layout.field_at(0, 0), None);
    }

    #[test]
    fn test_button_at_maps_buttons() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 40));
        let clear = layout.buttons[1];
        assert_eq!(layout.button_at(clear.x + 1, clear.y + 1), Some(FormButton::Clear));
        let save = layout.buttons[0];
        assert_eq!(layout.button_at(save.x, save.y), Some(FormButton::Save));
    }

    #[test]
    fn test_render_shows_labels_and_buttons() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app, 80, 40);
        for label in ["Name", "Email", "Age", "Phone Number", "Address", "Gender", "Education"] {
            assert!(screen.contains(label), "missing label {label}");
        }
        assert!(screen.contains("Save"));
        assert!(screen.contains("Clear"));
        assert!(screen.contains("+62 ___ ____ ____"));
    }

    #[test]
    fn test_render_shows_typed_values() {
        let mut app = App::new(&FormConfig::default());
        app.state.form.name.set_text("Budi");
        app.state.form.gender.set_text("Male");
        let screen = render(&app, 80, 40);
        assert!(screen.contains("Budi"));
        assert!(screen.contains("Male"));
    }
}
