//! Field Validation Rules
//!
//! Pure checks on a field's value, declared type and required flag.
//! Rules run in a fixed order and the first failure wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::FormMessages;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s+\-()]{8,}$").expect("phone pattern compiles")
});

/// Declared type of a field, as far as validation cares
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    /// Anything else (select, textarea, number, checkbox, ...)
    Other,
}

impl FieldKind {
    /// Map an input's `type` attribute
    pub fn from_type_attr(type_attr: &str) -> Self {
        match type_attr.to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("required field is empty")]
    Required,
    #[error("malformed email address")]
    InvalidEmail,
    #[error("malformed phone number")]
    InvalidPhone,
}

impl FieldError {
    /// Text shown next to the field
    pub fn message<'a>(&self, messages: &'a FormMessages) -> &'a str {
        match self {
            FieldError::Required => &messages.required,
            FieldError::InvalidEmail => &messages.invalid_email,
            FieldError::InvalidPhone => &messages.invalid_phone,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Validate one field. Surrounding whitespace is ignored by every rule.
pub fn validate(value: &str, kind: FieldKind, required: bool) -> Result<(), FieldError> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}
