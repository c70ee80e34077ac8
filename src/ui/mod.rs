//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

pub use forms::FormLayout;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_personal_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal last so it sits on top
    if let Some(dialog) = &app.state.dialog {
        components::render_form_dialog(frame, dialog);
    }
}

/// Form rectangles for a terminal of the given size
pub fn form_layout(terminal_area: Rect) -> FormLayout {
    let (main_area, _) = layout::create_layout(terminal_area);
    FormLayout::new(main_area)
}
