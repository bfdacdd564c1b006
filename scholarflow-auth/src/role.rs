// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four roles which can be assigned to a user.
///
/// The declaration order carries no meaning: roles are not ranked against each other and every
/// capability is defined by an explicit predicate over the role, see [`derive_capabilities`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// Regular account with access to personal papers and collections.
    #[default]
    Researcher,

    /// Paid account with access to pro features (analytics, unlimited collections, etc.).
    ProResearcher,

    /// Pro account which additionally manages a team of researchers.
    TeamLead,

    /// Operator account with access to the admin area.
    Admin,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 4] = [
        Role::Researcher,
        Role::ProResearcher,
        Role::TeamLead,
        Role::Admin,
    ];

    /// Machine-readable identifier of this role, as used in serialized user records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Researcher => "researcher",
            Role::ProResearcher => "pro_researcher",
            Role::TeamLead => "team_lead",
            Role::Admin => "admin",
        }
    }

    /// Fixed human-readable label of this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Researcher => "Researcher",
            Role::ProResearcher => "Pro Researcher",
            Role::TeamLead => "Team Lead",
            Role::Admin => "Administrator",
        }
    }

    /// Capabilities granted to this role.
    pub fn capabilities(&self) -> Capabilities {
        derive_capabilities(*self)
    }

    /// Route a user with this role lands on after signing in.
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Role::Researcher => "/dashboard",
            Role::ProResearcher => "/dashboard/pro",
            Role::TeamLead => "/dashboard/team",
            Role::Admin => "/dashboard/admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown role \"{0}\"")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "researcher" => Ok(Role::Researcher),
            "pro_researcher" => Ok(Role::ProResearcher),
            "team_lead" => Ok(Role::TeamLead),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Boolean permissions and display label derived from a [`Role`].
///
/// Only the implications stated on each flag hold, there is no further subset chain between them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Capabilities {
    /// Role is `admin`.
    pub is_admin: bool,

    /// Role is `team_lead`.
    pub is_team_lead: bool,

    /// Role is `pro_researcher`, `team_lead` or `admin`.
    pub is_pro: bool,

    /// Role is `team_lead` or `admin`.
    pub can_manage_team: bool,

    /// Role is `admin`.
    pub can_access_admin: bool,

    /// Human-readable label of the role.
    pub display_name: &'static str,
}

/// Derive the capability set of a role.
///
/// This is a pure function over the closed role enumeration.
pub fn derive_capabilities(role: Role) -> Capabilities {
    Capabilities {
        is_admin: matches!(role, Role::Admin),
        is_team_lead: matches!(role, Role::TeamLead),
        is_pro: matches!(role, Role::ProResearcher | Role::TeamLead | Role::Admin),
        can_manage_team: matches!(role, Role::TeamLead | Role::Admin),
        can_access_admin: matches!(role, Role::Admin),
        display_name: role.display_name(),
    }
}
