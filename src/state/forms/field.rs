//! Form field value objects

/// Gender options; the first entry is the blank default
pub const GENDER_OPTIONS: &[&str] = &["", "Male", "Female"];

/// Education options; the first entry is the blank default
pub const EDUCATION_OPTIONS: &[&str] = &[
    "",
    "Elementary School",
    "Junior High School",
    "Senior High School",
    "Diploma",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctoral Degree",
];

/// Phone input mask: `+62 XXX XXXX XXXX`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMask {
    digits: String,
}

impl PhoneMask {
    pub const PREFIX: &'static str = "+62";
    /// Digit group sizes after the prefix
    pub const GROUPS: [usize; 3] = [3, 4, 4];
    pub const PLACEHOLDER: char = '_';

    pub fn max_digits() -> usize {
        Self::GROUPS.iter().sum()
    }

    /// Accepts ASCII digits until the mask is full
    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.digits.len() < Self::max_digits() {
            self.digits.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[cfg(test)]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Prefix plus the typed digits; just the prefix when nothing was typed
    pub fn text(&self) -> String {
        self.render(None)
    }

    /// The whole template with placeholders for missing digits
    pub fn display(&self) -> String {
        self.render(Some(Self::PLACEHOLDER))
    }

    fn render(&self, placeholder: Option<char>) -> String {
        let mut out = String::from(Self::PREFIX);
        let mut digits = self.digits.chars();
        for size in Self::GROUPS {
            let group: String = match placeholder {
                Some(p) => (0..size).map(|_| digits.next().unwrap_or(p)).collect(),
                None => digits.by_ref().take(size).collect(),
            };
            if group.is_empty() {
                break;
            }
            out.push(' ');
            out.push_str(&group);
        }
        out
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [&'static str],
        selected: usize,
    },
    Masked(PhoneMask),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    #[allow(dead_code)]
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new selection field, starting on the first option
    pub fn choice(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
            is_multiline: false,
        }
    }

    /// Create a new phone field with the `+62` input mask
    pub fn phone(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Masked(PhoneMask::default()),
            is_multiline: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Masked(mask) => mask.push(c),
            FieldValue::Choice { .. } => {
                // Selection fields only cycle
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Masked(mask) => mask.pop(),
            FieldValue::Choice { .. } => {}
        }
    }

    /// Select the next option (wraps)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = (*selected + 1) % options.len();
        }
    }

    /// Select the previous option (wraps)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = if *selected == 0 {
                options.len() - 1
            } else {
                *selected - 1
            };
        }
    }

    /// Set the text value. Masked fields keep only the digits after the prefix.
    #[cfg(test)]
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value.to_string(),
            FieldValue::Masked(mask) => {
                mask.clear();
                let rest = value.strip_prefix(PhoneMask::PREFIX).unwrap_or(value);
                rest.chars().for_each(|c| mask.push(c));
            }
            FieldValue::Choice { options, selected } => {
                if let Some(idx) = options.iter().position(|o| *o == value) {
                    *selected = idx;
                }
            }
        }
    }

    /// Reset to empty; selection fields go back to the blank first option
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = 0,
            FieldValue::Masked(mask) => mask.clear(),
        }
    }

    /// True at the cleared state; a mask counts as empty with no digits typed
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Masked(mask) => mask.digits().is_empty(),
            _ => self.submitted_text().is_empty(),
        }
    }

    /// The value handed to validation (untrimmed)
    pub fn submitted_text(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => {
                options.get(*selected).copied().unwrap_or_default().to_string()
            }
            FieldValue::Masked(mask) => mask.text(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => {
                let current = options.get(*selected).copied().unwrap_or_default();
                format!("◀ {current} ▶")
            }
            FieldValue::Masked(mask) => mask.display(),
        }
    }
}
