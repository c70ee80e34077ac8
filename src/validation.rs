//! Submission validation
//!
//! Rules run in a fixed order and the first one that fails is reported.
//! Nothing here knows about the terminal.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Lowest accepted age
pub const MIN_AGE: u32 = 17;
/// Highest accepted age
pub const MAX_AGE: u32 = 100;

// Anchored at the start only; trailing text after a valid prefix is accepted.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid email pattern"));

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+62 [0-9]{3} [0-9]{4} [0-9]{4}$").expect("valid phone pattern")
});

/// A rule violation. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Age must be numeric.")]
    AgeNotNumeric,
    #[error("Age must be between 17 and 100.")]
    AgeOutOfRange,
    #[error("Phone number must follow +62 XXX XXXX XXXX format.")]
    InvalidPhone,
}

impl ValidationError {
    /// Short rule name for logs
    pub fn rule(&self) -> &'static str {
        match self {
            Self::MissingFields => "completeness",
            Self::InvalidEmail => "email",
            Self::AgeNotNumeric => "age_numeric",
            Self::AgeOutOfRange => "age_range",
            Self::InvalidPhone => "phone",
        }
    }
}

/// The seven values collected by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub age: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub education: String,
}

impl FormSubmission {
    /// Copy with every value whitespace-trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.age.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            gender: self.gender.trim().to_string(),
            education: self.education.trim().to_string(),
        }
    }

    fn values(&self) -> [&str; 7] {
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

    /// True when every value is non-empty after trimming
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(|v| !v.trim().is_empty())
    }
}

/// Run every rule in order and stop at the first failure.
pub fn validate(submission: &FormSubmission) -> Result<(), ValidationError> {
    if !submission.is_complete() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    parse_age(&submission.age)?;
    if !is_valid_phone(&submission.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Minimal `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Parse an age made only of ASCII digits and check it is in range.
///
/// A digit string too long for `u32` is reported as out of range.
pub fn parse_age(age: &str) -> Result<u32, ValidationError> {
    if age.is_empty() || !age.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::AgeNotNumeric);
    }
    match age.parse::<u32>() {
        Ok(n) if (MIN_AGE..=MAX_AGE).contains(&n) => Ok(n),
        _ => Err(ValidationError::AgeOutOfRange),
    }
}

/// Full match against `+62 XXX XXXX XXXX`
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
