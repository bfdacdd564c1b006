// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synchronous field checks shared by login and registration forms.
//!
//! All checks are pure: re-running them on unchanged input yields the same result. Forms chain
//! them in a fixed order (presence, format, cross-field, length) and stop at the first failure.
mod error;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use error::ValidationError;

/// Minimum number of characters of a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks if a string looks like an email address.
///
/// 1. It contains exactly one "@" with at least one character on each side
/// 2. The part after the "@" contains a dot which is neither its first nor its last character
/// 3. It contains no whitespace
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
        // Unwrap as we checked the regular expression for correctness
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    });

    EMAIL_REGEX.is_match(value)
}

/// Fails with the given message if the value is empty or only whitespace.
pub fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(message))
    } else {
        Ok(())
    }
}

/// Fails with the given message if the value is not a well-formed email address.
///
/// Surrounding whitespace is ignored.
pub fn require_email(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(message))
    }
}

/// Fails if the confirmation differs from the original value.
pub fn require_match(value: &str, confirmation: &str) -> Result<(), ValidationError> {
    if value == confirmation {
        Ok(())
    } else {
        Err(ValidationError::Mismatch)
    }
}

/// Fails if the value has fewer than `min` characters.
pub fn require_min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(ValidationError::TooShort { min })
    }
}

/// Validity of a single form field, as displayed next to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }
}

impl From<Result<(), ValidationError>> for FieldValidation {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self {
                valid: false,
                message: Some(err.to_string()),
            },
        }
    }
}
