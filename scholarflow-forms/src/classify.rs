// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo sign-in routing: maps a submitted email address to the role the user signs in as.
//!
//! This stands in for a real authentication service and must not be treated as a security
//! boundary.
use scholarflow_auth::Role;

use crate::validation::ValidationError;

/// Demo accounts which resolve to a fixed role.
const DEMO_ACCOUNTS: [(&str, Role); 4] = [
    ("admin@example.com", Role::Admin),
    ("lead@example.com", Role::TeamLead),
    ("pro@example.com", Role::ProResearcher),
    ("researcher@example.com", Role::Researcher),
];

/// Resolve the role of a signing-in user from their email address.
///
/// The address is trimmed and lower-cased, then checked in this order:
///
/// 1. Exact match against the demo accounts
/// 2. Starts with "admin" → admin
/// 3. Starts with "lead" or "team" → team lead
/// 4. Starts with "pro" → pro researcher
/// 5. Contains "@" → researcher
///
/// Everything else is rejected. The order matters: "admin@foo.org" is an admin even though it
/// also contains an "@".
pub fn classify_email(email: &str) -> Result<Role, ValidationError> {
    let email = email.trim().to_lowercase();

    if let Some((_, role)) = DEMO_ACCOUNTS
        .iter()
        .find(|(address, _)| *address == email)
    {
        return Ok(*role);
    }

    if email.starts_with("admin") {
        Ok(Role::Admin)
    } else if email.starts_with("lead") || email.starts_with("team") {
        Ok(Role::TeamLead)
    } else if email.starts_with("pro") {
        Ok(Role::ProResearcher)
    } else if email.contains('@') {
        Ok(Role::Researcher)
    } else {
        Err(ValidationError::UnclassifiableEmail)
    }
}
