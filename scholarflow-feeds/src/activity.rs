// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PaperAdded,
    PaperAnnotated,
    CollectionCreated,
    CollectionShared,
    MemberJoined,
    Comment,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Activity entries of one calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityGroup<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub entries: Vec<&'a ActivityEntry>,
}

/// Group entries by their calendar day (UTC).
///
/// Groups are ordered newest day first and entries newest first inside each group. The day of
/// `today` is labelled "Today", the day before "Yesterday", every other day with its full date.
pub fn group_by_date(entries: &[ActivityEntry], today: NaiveDate) -> Vec<ActivityGroup<'_>> {
    let mut sorted: Vec<&ActivityEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut groups: Vec<ActivityGroup<'_>> = Vec::new();
    for entry in sorted {
        let date = entry.timestamp.date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.entries.push(entry),
            _ => groups.push(ActivityGroup {
                date,
                label: day_label(date, today),
                entries: vec![entry],
            }),
        }
    }

    groups
}

fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}
