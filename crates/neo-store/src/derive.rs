// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-demand aggregates over store collections.
//!
//! Nothing here is cached or written back; a group's stored `counts` stay
//! whatever they were set to.

use std::collections::BTreeMap;

use neo_core::GroupId;
use neo_core::model::{ChatMessage, StatusCounts, Task};

pub fn status_counts<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        counts.record(task.status);
    }
    counts
}

pub fn status_counts_for_group(tasks: &[Task], group_id: &GroupId) -> StatusCounts {
    status_counts(tasks.iter().filter(|t| &t.group_id == group_id))
}

/// Occurrences of each `(tag key, value)` pair. Empty values are skipped.
pub fn tag_counts<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        for (key, value) in &task.tags {
            if value.trim().is_empty() {
                continue;
            }
            *counts.entry((key.clone(), value.clone())).or_insert(0) += 1;
        }
    }
    counts
}

/// Total reaction count per emoji across `messages`.
pub fn reaction_totals<'a>(messages: impl IntoIterator<Item = &'a ChatMessage>) -> BTreeMap<String, u32> {
    let mut totals = BTreeMap::new();
    for message in messages {
        for reaction in &message.reactions {
            *totals.entry(reaction.emoji.clone()).or_insert(0) += reaction.count;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use neo_core::model::task::TAG_LOCATION;
    use neo_core::model::{GroupSnapshot, NewTask, Reaction, TaskStatus};

    use super::*;

    fn task(id: &str, group: &str, status: TaskStatus, location: &str) -> Task {
        let mut new = NewTask::new(id, id, group, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .with_tag(TAG_LOCATION, location);
        new.status = status;
        new.into_task(GroupSnapshot::default())
    }

    #[test]
    fn counts_by_status_and_group() {
        let tasks = vec![
            task("t1", "g1", TaskStatus::Open, "Lobby"),
            task("t2", "g1", TaskStatus::Done, "Lobby"),
            task("t3", "g2", TaskStatus::InProgress, "Roof"),
        ];
        let all = status_counts(&tasks);
        assert_eq!(all.total(), 3);
        let g1 = status_counts_for_group(&tasks, &"g1".into());
        assert_eq!(g1.total(), 2);
        assert_eq!(g1.green, 1);
    }

    #[test]
    fn tags_counted_per_pair() {
        let tasks = vec![
            task("t1", "g1", TaskStatus::Open, "Lobby"),
            task("t2", "g1", TaskStatus::Open, "Lobby"),
            task("t3", "g1", TaskStatus::Open, " "),
        ];
        let counts = tag_counts(&tasks);
        assert_eq!(counts.get(&(TAG_LOCATION.to_string(), "Lobby".to_string())), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn reactions_summed_per_emoji() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut a = ChatMessage::new("m1", "c1", "u2", "Sara", "a", ts);
        a.reactions.push(Reaction {
            emoji: "👍".into(),
            count: 2,
            reacted_by_me: false,
        });
        let mut b = ChatMessage::new("m2", "c1", "u3", "Omar", "b", ts);
        b.toggle_reaction("👍");
        b.toggle_reaction("🔥");
        let totals = reaction_totals([&a, &b]);
        assert_eq!(totals.get("👍"), Some(&3));
        assert_eq!(totals.get("🔥"), Some(&1));
    }
}
