// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Mention,
    Comment,
    Share,
    Citation,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Tabs of the notification center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Kind(kind) => notification.kind == *kind,
        }
    }

    /// Notifications passing this filter, in input order.
    pub fn apply<'a>(&self, notifications: &'a [Notification]) -> Vec<&'a Notification> {
        notifications
            .iter()
            .filter(|notification| self.matches(notification))
            .collect()
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications
        .iter()
        .filter(|notification| !notification.read)
        .count()
}

pub fn mark_all_read(notifications: &mut [Notification]) {
    for notification in notifications.iter_mut() {
        notification.read = true;
    }
}

/// Mark a single notification as read. Returns `false` if no notification has the given id.
pub fn mark_read(notifications: &mut [Notification], id: u32) -> bool {
    match notifications
        .iter_mut()
        .find(|notification| notification.id == id)
    {
        Some(notification) => {
            notification.read = true;
            true
        }
        None => {
            trace!(id, "notification not found");
            false
        }
    }
}
