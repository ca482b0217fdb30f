// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Work groups and areas.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::task::TaskStatus;
use crate::types::{AreaId, GroupId, UserId};

/// Alpha suffix appended to a group color for translucent backgrounds.
pub const TINT_ALPHA: &str = "20";

/// Red/yellow/green tallies shown on group and area cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Open or urgent.
    pub red: u32,
    /// In progress.
    pub yellow: u32,
    /// Done.
    pub green: u32,
}

impl StatusCounts {
    pub fn total(&self) -> u32 {
        self.red + self.yellow + self.green
    }

    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Open => self.red += 1,
            TaskStatus::InProgress => self.yellow += 1,
            TaskStatus::Done => self.green += 1,
        }
    }
}

/// A work group. Its `counts` are informational and are not kept in sync
/// with the task collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Hex color such as `#ef4444`.
    pub color: String,
    pub counts: StatusCounts,
    pub notifications_on: bool,
    pub requires_approval: Option<bool>,
    pub daily_summary: Option<bool>,
    pub member_ids: BTreeSet<UserId>,
    pub archived: bool,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            color: color.into(),
            counts: StatusCounts::default(),
            notifications_on: true,
            requires_approval: None,
            daily_summary: None,
            member_ids: BTreeSet::new(),
            archived: false,
        }
    }

    /// Copy of the display fields, frozen at the time of the call.
    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }

    /// Translucent variant of the group color (`#rrggbb` + alpha).
    pub fn tint(&self) -> String {
        format!("{}{TINT_ALPHA}", self.color)
    }
}

/// Group name and color copied onto another entity at creation.
///
/// This is a value, not a reference: renaming or recoloring the group
/// later leaves existing snapshots as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub name: String,
    pub color: String,
}

impl GroupSnapshot {
    /// Snapshot used when the group could not be resolved at creation.
    pub fn is_missing(&self) -> bool {
        self.name.is_empty() && self.color.is_empty()
    }
}

/// Partial update for a [`Group`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub counts: Option<StatusCounts>,
    pub notifications_on: Option<bool>,
    pub requires_approval: Option<Option<bool>>,
    pub daily_summary: Option<Option<bool>>,
    pub member_ids: Option<BTreeSet<UserId>>,
    pub archived: Option<bool>,
}

impl GroupPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(self, group: &mut Group) {
        if let Some(name) = self.name {
            group.name = name;
        }
        if let Some(description) = self.description {
            group.description = description;
        }
        if let Some(icon) = self.icon {
            group.icon = icon;
        }
        if let Some(color) = self.color {
            group.color = color;
        }
        if let Some(counts) = self.counts {
            group.counts = counts;
        }
        if let Some(on) = self.notifications_on {
            group.notifications_on = on;
        }
        if let Some(requires_approval) = self.requires_approval {
            group.requires_approval = requires_approval;
        }
        if let Some(daily_summary) = self.daily_summary {
            group.daily_summary = daily_summary;
        }
        if let Some(member_ids) = self.member_ids {
            group.member_ids = member_ids;
        }
        if let Some(archived) = self.archived {
            group.archived = archived;
        }
    }
}

/// A physical area (building wing, floor, plant room).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub description: String,
    pub counts: StatusCounts,
}

impl Area {
    pub fn new(id: impl Into<AreaId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            counts: StatusCounts::default(),
        }
    }
}

/// Partial update for an [`Area`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub counts: Option<StatusCounts>,
}

impl AreaPatch {
    pub fn apply_to(self, area: &mut Area) {
        if let Some(name) = self.name {
            area.name = name;
        }
        if let Some(description) = self.description {
            area.description = description;
        }
        if let Some(counts) = self.counts {
            area.counts = counts;
        }
    }
}
