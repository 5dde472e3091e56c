//! Contact-form field rules.
//!
//! Values are trimmed before checking and lengths are counted in characters.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(pattern) => Some(pattern),
    Err(e) => {
        log::error!("email pattern failed to compile; every address will be rejected: {e}");
        None
    }
});

/// Contact-form inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id and `name` attribute of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Inline error text shown under a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError(pub &'static str);

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Check one field's value against its rule.
///
/// # Errors
///
/// Returns the inline message for the first rule the value breaks.
pub fn validate(field: Field, raw: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(raw),
        Field::Email => validate_email(raw),
        Field::Message => validate_message(raw),
    }
}

/// # Errors
///
/// Empty or shorter than two characters.
pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError("Name is required"));
    }
    if value.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError("Name must be at least 2 characters"));
    }
    Ok(())
}

/// # Errors
///
/// Empty or not shaped like `local@domain.tld`.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError("Email is required"));
    }
    if !is_email(value) {
        return Err(FieldError("Please enter a valid email address"));
    }
    Ok(())
}

/// # Errors
///
/// Empty or shorter than ten characters.
pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError("Message is required"));
    }
    if value.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError("Message must be at least 10 characters"));
    }
    Ok(())
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
