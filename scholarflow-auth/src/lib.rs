// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roles, derived capabilities and a controllable role context for ScholarFlow.
//!
//! A [`Role`] maps to a fixed [`Capabilities`] set through [`derive_capabilities`]. Pages read the
//! current role through a [`RoleContext`], which is either backed by a [`RoleProvider`] or falls
//! back to the researcher defaults when no provider is present.
mod provider;
mod role;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;
mod user;

pub use provider::{RoleContext, RoleProvider, RoleSource, effective_role};
pub use role::{Capabilities, Role, UnknownRole, derive_capabilities};
pub use user::User;
