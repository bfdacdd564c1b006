// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Search entries by a free-text query, optionally restricted to one category.
///
/// Matching is a case-insensitive substring test against question and answer. A blank query
/// matches every entry. Results keep the order of the input.
pub fn search<'a>(
    entries: &'a [FaqEntry],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a FaqEntry> {
    let query = query.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| category.is_none_or(|category| entry.category == category))
        .filter(|entry| {
            query.is_empty()
                || entry.question.to_lowercase().contains(&query)
                || entry.answer.to_lowercase().contains(&query)
        })
        .collect()
}
