//! Form domain layer
//!
//! Field values and the personal data form that the UI edits.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormButton, PersonalForm, BUTTONS_ROW, FIELD_COUNT};
