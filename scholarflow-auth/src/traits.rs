// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interfaces to collaborators living outside of this crate.
use crate::Role;

/// Receives every role change made through a role provider.
///
/// This is the seam where an external owner (session store, auth state, etc.) persists or
/// propagates the change. The provider itself keeps no state beyond its own lifetime.
pub trait RoleObserver {
    fn on_role_change(&self, role: Role);
}

impl<F> RoleObserver for F
where
    F: Fn(Role),
{
    fn on_role_change(&self, role: Role) {
        self(role)
    }
}
