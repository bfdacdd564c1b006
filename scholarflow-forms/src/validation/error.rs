// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Local validation failures.
///
/// The `Display` output of every variant is the exact message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0}")]
    Required(&'static str),

    /// A field does not hold a well-formed email address.
    #[error("{0}")]
    InvalidEmail(&'static str),

    /// Confirmation field differs from the field it confirms.
    #[error("Doesn't match")]
    Mismatch,

    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,

    /// Email address could not be mapped to any role.
    #[error("Please enter a valid email address")]
    UnclassifiableEmail,
}
