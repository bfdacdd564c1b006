// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::validation::MIN_PASSWORD_LENGTH;

/// Strength indicator of a password, shown while the user types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Number of satisfied criteria, between 0 and 4.
    pub score: u8,
}

impl PasswordStrength {
    pub const MAX_SCORE: u8 = 4;

    pub fn label(&self) -> &'static str {
        match self.score {
            0 | 1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }
}

impl Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score a password by the criteria it satisfies: minimum length, mixed case, a digit and a
/// symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);

    let criteria = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_lower && has_upper,
        password.chars().any(|c| c.is_ascii_digit()),
        password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    ];

    PasswordStrength {
        score: criteria.iter().filter(|met| **met).count() as u8,
    }
}
