//! Personal data form state

use super::field::{FormField, EDUCATION_OPTIONS, GENDER_OPTIONS};
use crate::validation::FormSubmission;

/// Number of input fields on the form
pub const FIELD_COUNT: usize = 7;
/// Focus index of the buttons row
pub const BUTTONS_ROW: usize = FIELD_COUNT;

/// Buttons on the buttons row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Save,
    Clear,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Save, FormButton::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Clear => "Clear",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Save => Self::Clear,
            Self::Clear => Self::Save,
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The personal data form
#[derive(Debug, Clone)]
pub struct PersonalForm {
    pub name: FormField,
    pub email: FormField,
    pub age: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub gender: FormField,
    pub education: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl PersonalForm {
    /// Create an empty form. `phone_mask` selects the `+62` input mask for
    /// the phone field instead of free text.
    pub fn new(phone_mask: bool) -> Self {
        let phone = if phone_mask {
            FormField::phone("phone", "Phone Number")
        } else {
            FormField::text("phone", "Phone Number", false)
        };
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            age: FormField::text("age", "Age", false),
            phone,
            address: FormField::text("address", "Address", true),
            gender: FormField::choice("gender", "Gender", GENDER_OPTIONS),
            education: FormField::choice("education", "Education", EDUCATION_OPTIONS),
            active_field_index: 0,
            selected_button: FormButton::Save,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    pub fn is_active_field_choice(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_choice())
    }

    pub fn fields(&self) -> [&FormField; FIELD_COUNT] {
        [
            &self.name,
            &self.email,
            &self.age,
            &self.phone,
            &self.address,
            &self.gender,
            &self.education,
        ]
    }

    fn fields_mut(&mut self) -> [&mut FormField; FIELD_COUNT] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.age,
            &mut self.phone,
            &mut self.address,
            &mut self.gender,
            &mut self.education,
        ]
    }

    /// Collect the current values, trimmed, for validation
    pub fn submission(&self) -> FormSubmission {
        FormSubmission {
            name: self.name.submitted_text(),
            email: self.email.submitted_text(),
            age: self.age.submitted_text(),
            phone: self.phone.submitted_text(),
            address: self.address.submitted_text(),
            gender: self.gender.submitted_text(),
            education: self.education.submitted_text(),
        }
        .trimmed()
    }

    /// Reset every field and return focus to the first one
    pub fn clear(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::Save;
    }

    /// True when every field is at its empty/default state
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

impl Default for PersonalForm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Form for PersonalForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // seven fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields_mut().into_iter().nth(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().get(index).copied()
    }
}
