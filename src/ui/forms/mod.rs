//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `personal_form`: The personal data form and its layout

mod field_renderer;
mod personal_form;

pub use personal_form::{draw_personal_form, FormLayout};
