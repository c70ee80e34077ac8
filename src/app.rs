//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{AppState, Form, FormButton};
use crate::validation::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App with an empty form
    pub fn new(config: &FormConfig) -> Self {
        Self {
            state: AppState::new(config.phone_input_mask()),
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Validate the form. Rejection shows the first failed rule and keeps
    /// every value; acceptance acknowledges and clears the form.
    pub fn submit(&mut self) {
        let submission = self.state.form.submission();
        match validate(&submission) {
            Ok(()) => {
                tracing::info!("form submission accepted");
                self.state.form.clear();
                self.state.show_success();
            }
            Err(err) => {
                tracing::debug!(rule = err.rule(), "form submission rejected");
                self.state.show_error(err.to_string());
            }
        }
    }

    /// Reset every field to its empty/default state
    pub fn clear(&mut self) {
        tracing::debug!("form cleared");
        self.state.form.clear();
        self.state.status_message = Some("Form cleared".to_string());
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::Save => self.submit(),
            FormButton::Clear => self.clear(),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit, even over a dialog
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return Ok(());
        }

        // Dialog is modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('k') if key.modifiers.contains(crate::platform::ACTION_MODIFIER) => {
                self.clear();
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ if self.state.form.is_buttons_row_active() => self.handle_buttons_key(key),
            _ if self.state.form.is_active_field_choice() => self.handle_choice_key(key),
            _ => self.handle_text_key(key),
        }
        Ok(())
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let button = form.selected_button;
                self.press_button(button);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.request_quit(),
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Enter => form.next_field(),
            KeyCode::Left | KeyCode::Up => {
                if let Some(field) = form.get_active_field_mut() {
                    field.prev_option();
                }
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                if let Some(field) = form.get_active_field_mut() {
                    field.next_option();
                }
            }
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let multiline = form.is_active_field_multiline();
        match key.code {
            // Enter in the address field adds a newline
            KeyCode::Enter if multiline => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char('\n');
                }
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        if self.state.has_dialog() {
            self.state.dismiss_dialog();
            return Ok(());
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let layout = crate::ui::form_layout(Rect::new(0, 0, width, height));

        if let Some(index) = layout.field_at(mouse.column, mouse.row) {
            self.state.form.set_active_field(index);
        } else if let Some(button) = layout.button_at(mouse.column, mouse.row) {
            self.state.status_message = None;
            self.state.form.set_active_field(crate::state::BUTTONS_ROW);
            self.state.form.selected_button = button;
            self.press_button(button);
        }
        Ok(())
    }
}
