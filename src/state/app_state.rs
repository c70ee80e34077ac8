//! Application state definitions

use super::forms::PersonalForm;

/// Acknowledgment shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Modal dialog shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// A rule failed; the message is the rule's text
    ValidationError(String),
    /// The submission was accepted
    Success(String),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "Validation Error",
            Self::Success(_) => "Success",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError(msg) | Self::Success(msg) => msg,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: PersonalForm,
    /// Open modal dialog, if any
    pub dialog: Option<Dialog>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(phone_mask: bool) -> Self {
        Self {
            form: PersonalForm::new(phone_mask),
            ..Default::default()
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.dialog = Some(Dialog::ValidationError(message.into()));
    }

    pub fn show_success(&mut self) {
        self.dialog = Some(Dialog::Success(SUCCESS_MESSAGE.to_string()));
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_dialog() {
        let state = AppState::default();
        assert!(!state.has_dialog());
        assert!(state.status_message.is_none());
        assert!(state.form.is_blank());
    }

    #[test]
    fn test_show_error_replaces_previous_dialog() {
        let mut state = AppState::default();
        state.show_success();
        state.show_error("Invalid email format.");
        assert_eq!(
            state.dialog,
            Some(Dialog::ValidationError("Invalid email format.".to_string()))
        );
    }

    #[test]
    fn test_dismiss_dialog() {
        let mut state = AppState::default();
        state.show_error("Age must be numeric.");
        state.dismiss_dialog();
        assert!(!state.has_dialog());
    }

    #[test]
    fn test_dialog_titles_and_messages() {
        let error = Dialog::ValidationError("All fields are required.".to_string());
        assert_eq!(error.title(), "Validation Error");
        assert_eq!(error.message(), "All fields are required.");

        let success = Dialog::Success(SUCCESS_MESSAGE.to_string());
        assert_eq!(success.title(), "Success");
        assert_eq!(success.message(), "Form submitted successfully!");
    }

    #[test]
    fn test_new_without_mask_uses_text_phone() {
        let state = AppState::new(false);
        assert!(!matches!(
            state.form.phone.value,
            crate::state::FieldValue::Masked(_)
        ));
    }
}
