// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local search, grouping and filtering over the data sets shown on ScholarFlow pages.
//!
//! All helpers work on borrowed slices and never reorder or mutate their input unless stated.
pub mod activity;
pub mod faq;
pub mod notifications;

pub use activity::{ActivityEntry, ActivityGroup, ActivityKind, group_by_date};
pub use faq::{FaqEntry, search};
pub use notifications::{
    Notification, NotificationFilter, NotificationKind, mark_all_read, mark_read, unread_count,
};
