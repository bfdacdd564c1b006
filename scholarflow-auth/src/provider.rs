// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::Cell;
use std::fmt::Debug;

use tracing::{debug, trace};

use crate::traits::RoleObserver;
use crate::{Capabilities, Role, derive_capabilities};

/// Who owns the effective role of a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSource {
    /// The provider's own tracked role is the effective one.
    Owned,

    /// A parent dictates the effective role, the tracked role is kept in sync with it.
    Delegated(Role),
}

/// State holder for the current role of a render tree.
///
/// The provider runs in "uncontrolled" mode unless a parent passes a controlled role, in which
/// case the parent always wins. Role changes made through [`RoleProvider::set_role`] are reported
/// to an optional [`RoleObserver`].
///
/// Providers are meant to be shared by reference between the consumers of a single-threaded
/// render tree, all mutation goes through `&self`.
pub struct RoleProvider {
    tracked: Cell<Role>,
    source: Cell<RoleSource>,
    observer: Option<Box<dyn RoleObserver>>,
}

impl RoleProvider {
    /// Create a provider in uncontrolled mode, starting at `initial_role`.
    pub fn new(initial_role: Role) -> Self {
        Self {
            tracked: Cell::new(initial_role),
            source: Cell::new(RoleSource::Owned),
            observer: None,
        }
    }

    /// Hand ownership of the effective role to a parent.
    pub fn controlled(self, role: Role) -> Self {
        self.set_controlled(Some(role));
        self
    }

    /// Report every role change made through `set_role` to the given observer.
    pub fn on_role_change(mut self, observer: impl RoleObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The effective role.
    pub fn role(&self) -> Role {
        match self.source.get() {
            RoleSource::Owned => self.tracked.get(),
            RoleSource::Delegated(role) => role,
        }
    }

    /// Capabilities of the effective role, derived on every call.
    pub fn capabilities(&self) -> Capabilities {
        derive_capabilities(self.role())
    }

    pub fn source(&self) -> RoleSource {
        self.source.get()
    }

    /// The role tracked by the provider itself, independent of any controlled value.
    pub fn tracked_role(&self) -> Role {
        self.tracked.get()
    }

    /// Update the tracked role and notify the observer.
    ///
    /// The tracked role is updated even while a parent controls the provider; the effective role
    /// then only changes once the parent passes the new value down.
    pub fn set_role(&self, role: Role) {
        debug!(
            role = role.as_str(),
            source = ?self.source.get(),
            "set role"
        );
        self.tracked.set(role);

        if let Some(observer) = &self.observer {
            observer.on_role_change(role);
        }
    }

    /// Apply a change of the parent's controlled role.
    ///
    /// `Some` overwrites the tracked role with the parent's value, `None` returns ownership to the
    /// provider which continues from the last tracked value. The observer is not notified as the
    /// change originates from the parent.
    pub fn set_controlled(&self, role: Option<Role>) {
        match role {
            Some(role) => {
                trace!(role = role.as_str(), "sync controlled role");
                self.tracked.set(role);
                self.source.set(RoleSource::Delegated(role));
            }
            None => self.source.set(RoleSource::Owned),
        }
    }

    /// Consumer view on this provider.
    pub fn context(&self) -> RoleContext<'_> {
        RoleContext::Provided(self)
    }
}

impl Default for RoleProvider {
    fn default() -> Self {
        Self::new(Role::default())
    }
}

impl Debug for RoleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleProvider")
            .field("tracked", &self.tracked.get())
            .field("source", &self.source.get())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Role lookup as seen by a consumer.
///
/// Without a provider the context falls back to the researcher defaults and ignores role changes.
/// This fallback is a regular state, not an error.
#[derive(Clone, Copy, Debug, Default)]
pub enum RoleContext<'a> {
    Provided(&'a RoleProvider),
    #[default]
    Fallback,
}

impl<'a> RoleContext<'a> {
    pub fn role(&self) -> Role {
        match self {
            RoleContext::Provided(provider) => provider.role(),
            RoleContext::Fallback => Role::Researcher,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        derive_capabilities(self.role())
    }

    pub fn set_role(&self, role: Role) {
        match self {
            RoleContext::Provided(provider) => provider.set_role(role),
            RoleContext::Fallback => {
                trace!(role = role.as_str(), "no role provider, ignore role change")
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RoleContext::Fallback)
    }
}

impl<'a> From<Option<&'a RoleProvider>> for RoleContext<'a> {
    fn from(provider: Option<&'a RoleProvider>) -> Self {
        match provider {
            Some(provider) => RoleContext::Provided(provider),
            None => RoleContext::Fallback,
        }
    }
}

impl<'a> From<&'a RoleProvider> for RoleContext<'a> {
    fn from(provider: &'a RoleProvider) -> Self {
        RoleContext::Provided(provider)
    }
}

/// Role displayed by a consumer: an explicit override wins over the context's role.
pub fn effective_role(override_role: Option<Role>, context: &RoleContext<'_>) -> Role {
    override_role.unwrap_or_else(|| context.role())
}
