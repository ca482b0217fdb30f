// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reactive tasks (work orders) and planned maintenance tasks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::group::GroupSnapshot;
use crate::types::{AreaId, AssetId, CommentId, GroupId, PlannedTaskId, TaskId, Timestamp, UserId};

/// Well-known tag keys. The map accepts any key.
pub const TAG_LOCATION: &str = "location";
pub const TAG_EQUIPMENT: &str = "equipment";
pub const TAG_CATEGORY: &str = "category";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Open,
    InProgress,
    Done,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// How often a planned task repeats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Recurrence {
    /// Runs once.
    Never,
    Daily,
    #[default]
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Recurrence {
    /// Human label used in notification text.
    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Never => "Once",
            Recurrence::Daily => "Daily",
            Recurrence::Weekly => "Weekly",
            Recurrence::Biweekly => "Bi-weekly",
            Recurrence::Monthly => "Monthly",
            Recurrence::Quarterly => "Quarterly",
            Recurrence::Yearly => "Yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub user_name: String,
    pub text: String,
    pub created_at: Timestamp,
}

/// Link from a task to an asset, with the asset name copied for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLink {
    pub id: AssetId,
    pub name: String,
}

/// A reactive task. `group` holds the group name and color as they were
/// when the task was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub group_id: GroupId,
    pub group: GroupSnapshot,
    pub area_id: Option<AreaId>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub due_date: Option<Timestamp>,
    /// Assignee ids. Entries may refer to deleted users.
    pub assignees: Vec<UserId>,
    pub comments: Vec<Comment>,
    pub tags: BTreeMap<String, String>,
    pub asset: Option<AssetLink>,
    pub description: Option<String>,
}

impl Task {
    pub fn is_assigned_to(&self, user_id: &UserId) -> bool {
        self.assignees.contains(user_id)
    }
}

/// Input to `add_task`: a task without its group snapshot, which the
/// store fills in from the live group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub id: TaskId,
    pub title: String,
    pub group_id: GroupId,
    pub area_id: Option<AreaId>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub due_date: Option<Timestamp>,
    pub assignees: Vec<UserId>,
    pub comments: Vec<Comment>,
    pub tags: BTreeMap<String, String>,
    pub asset: Option<AssetLink>,
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        group_id: impl Into<GroupId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            group_id: group_id.into(),
            area_id: None,
            status: TaskStatus::Open,
            priority: Priority::Medium,
            created_at,
            due_date: None,
            assignees: Vec::new(),
            comments: Vec::new(),
            tags: BTreeMap::new(),
            asset: None,
            description: None,
        }
    }

    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Attach the group snapshot and produce the stored task.
    pub fn into_task(self, group: GroupSnapshot) -> Task {
        Task {
            id: self.id,
            title: self.title,
            group_id: self.group_id,
            group,
            area_id: self.area_id,
            status: self.status,
            priority: self.priority,
            created_at: self.created_at,
            due_date: self.due_date,
            assignees: self.assignees,
            comments: self.comments,
            tags: self.tags,
            asset: self.asset,
            description: self.description,
        }
    }
}

/// Partial update for a [`Task`]. The group snapshot is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub area_id: Option<Option<AreaId>>,
    pub due_date: Option<Option<Timestamp>>,
    pub assignees: Option<Vec<UserId>>,
    pub tags: Option<BTreeMap<String, String>>,
    pub asset: Option<Option<AssetLink>>,
    pub description: Option<Option<String>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(area_id) = self.area_id {
            task.area_id = area_id;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(assignees) = self.assignees {
            task.assignees = assignees;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(asset) = self.asset {
            task.asset = asset;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
    }
}

/// A scheduled, usually recurring, maintenance task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub id: PlannedTaskId,
    pub title: String,
    pub group_id: GroupId,
    pub group: GroupSnapshot,
    pub scheduled_at: Timestamp,
    pub recurrence: Recurrence,
    pub enabled: bool,
    pub priority: Option<Priority>,
    pub area_id: Option<AreaId>,
    pub asset: Option<AssetLink>,
    pub assignee_ids: Option<Vec<UserId>>,
    pub description: Option<String>,
}

/// Input to `add_planned_task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlannedTask {
    pub id: PlannedTaskId,
    pub title: String,
    pub group_id: GroupId,
    pub scheduled_at: Timestamp,
    pub recurrence: Recurrence,
    pub enabled: bool,
    pub priority: Option<Priority>,
    pub area_id: Option<AreaId>,
    pub asset: Option<AssetLink>,
    pub assignee_ids: Option<Vec<UserId>>,
    pub description: Option<String>,
}

impl NewPlannedTask {
    pub fn new(
        id: impl Into<PlannedTaskId>,
        title: impl Into<String>,
        group_id: impl Into<GroupId>,
        scheduled_at: Timestamp,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            group_id: group_id.into(),
            scheduled_at,
            recurrence,
            enabled: true,
            priority: None,
            area_id: None,
            asset: None,
            assignee_ids: None,
            description: None,
        }
    }

    pub fn into_planned(self, group: GroupSnapshot) -> PlannedTask {
        PlannedTask {
            id: self.id,
            title: self.title,
            group_id: self.group_id,
            group,
            scheduled_at: self.scheduled_at,
            recurrence: self.recurrence,
            enabled: self.enabled,
            priority: self.priority,
            area_id: self.area_id,
            asset: self.asset,
            assignee_ids: self.assignee_ids,
            description: self.description,
        }
    }
}

/// Partial update for a [`PlannedTask`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedTaskPatch {
    pub title: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub recurrence: Option<Recurrence>,
    pub enabled: Option<bool>,
    pub priority: Option<Option<Priority>>,
    pub area_id: Option<Option<AreaId>>,
    pub asset: Option<Option<AssetLink>>,
    pub assignee_ids: Option<Option<Vec<UserId>>>,
    pub description: Option<Option<String>>,
}

impl PlannedTaskPatch {
    pub fn apply_to(self, task: &mut PlannedTask) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(scheduled_at) = self.scheduled_at {
            task.scheduled_at = scheduled_at;
        }
        if let Some(recurrence) = self.recurrence {
            task.recurrence = recurrence;
        }
        if let Some(enabled) = self.enabled {
            task.enabled = enabled;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(area_id) = self.area_id {
            task.area_id = area_id;
        }
        if let Some(asset) = self.asset {
            task.asset = asset;
        }
        if let Some(assignee_ids) = self.assignee_ids {
            task.assignee_ids = assignee_ids;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn into_task_carries_snapshot() {
        let task = NewTask::new("t1", "Replace seal", "g1", ts())
            .with_tag(TAG_LOCATION, "Pool plant room")
            .into_task(GroupSnapshot {
                name: "Pool".into(),
                color: "#0ea5e9".into(),
            });
        assert_eq!(task.group.name, "Pool");
        assert_eq!(task.tags.get(TAG_LOCATION).map(String::as_str), Some("Pool plant room"));
    }

    #[test]
    fn recurrence_labels_and_wire_names() {
        assert_eq!(Recurrence::Biweekly.label(), "Bi-weekly");
        assert_eq!(Recurrence::Never.label(), "Once");
        assert_eq!(Recurrence::Quarterly.to_string(), "quarterly");
    }

    #[test]
    fn priority_orders_low_to_high() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
