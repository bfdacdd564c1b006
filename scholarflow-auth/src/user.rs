// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Capabilities, Role, derive_capabilities};

/// User record handed to pages and components by the surrounding application.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    pub name: String,
    pub email: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            image: None,
            role,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        derive_capabilities(self.role)
    }

    /// Up to two upper-case initials taken from the first words of the name, used when no image
    /// is available.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
