//! Per-field validation for the login form.
//!
//! Mirrors what the form layer shows inline: one message per offending
//! field, emitted in field order. An empty result means the form may be
//! submitted. Debounce timing stays in the form layer; this is pure.

use serde::Serialize;

use crate::config::SecurityConfig;
use crate::validators::{validate_email, validate_username};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field:   &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a login form. The identifier is treated as an email when it
/// contains `@`, as a username otherwise.
pub fn validate_login_form(
    identifier: &str,
    password: &str,
    config: &SecurityConfig,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let identifier = identifier.trim();
    if identifier.is_empty() {
        errors.push(FieldError::new(
            "identifier",
            "Enter a username or email address",
        ));
    } else if identifier.contains('@') {
        if !validate_email(identifier) {
            errors.push(FieldError::new("identifier", "Enter a valid email address"));
        }
    } else if !validate_username(identifier) {
        errors.push(FieldError::new("identifier", "Username format is not valid"));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "Enter a password"));
    } else if password.chars().count() < config.min_password_length {
        errors.push(FieldError::new(
            "password",
            format!(
                "Password must be at least {} characters",
                config.min_password_length
            ),
        ));
    }

    errors
}

// ── Tests ─────────────────────────────────────────────────────
