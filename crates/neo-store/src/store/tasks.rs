// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reactive tasks and planned (scheduled) tasks.

use neo_core::model::{
    Comment, GroupSnapshot, NewPlannedTask, NewTask, PlannedTask, PlannedTaskPatch, Task,
    TaskPatch,
};
use neo_core::{CommentId, GroupId, PlannedTaskId, TaskId, UserId};
use tracing::{debug, warn};

use super::{Store, remove_where};

impl Store {
    /// Snapshot of the live group, or an empty one if the id dangles.
    fn group_snapshot(&self, group_id: &GroupId, entity: &str) -> GroupSnapshot {
        match self.group(group_id) {
            Some(group) => group.snapshot(),
            None => {
                warn!(group = %group_id, entity, "group not found, storing empty group snapshot");
                GroupSnapshot::default()
            }
        }
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Add a task, copying the group's current name and color onto it.
    pub fn add_task(&mut self, new: NewTask) -> TaskId {
        let snapshot = self.group_snapshot(&new.group_id, "task");
        let task = new.into_task(snapshot);
        let id = task.id.clone();
        debug!(task = %id, group = %task.group_id, "task added");
        self.tasks.push(task);
        id
    }

    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                patch.apply_to(task);
                true
            }
            None => {
                debug!(task = %id, "update_task: unknown id");
                false
            }
        }
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let removed = remove_where(&mut self.tasks, |t| &t.id == id);
        if !removed {
            debug!(task = %id, "delete_task: unknown id");
        }
        removed
    }

    /// Append a comment by `author`. The author's display name is copied
    /// from the directory, falling back to the raw id.
    pub fn add_task_comment(
        &mut self,
        task_id: &TaskId,
        author: &UserId,
        text: impl Into<String>,
    ) -> Option<CommentId> {
        let user_name = self
            .user(author)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| author.to_string());
        let created_at = self.now();

        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == task_id) else {
            debug!(task = %task_id, "add_task_comment: unknown id");
            return None;
        };
        let id = CommentId::generate("cm");
        task.comments.push(Comment {
            id: id.clone(),
            user_id: author.clone(),
            user_name,
            text: text.into(),
            created_at,
        });
        Some(id)
    }

    pub fn planned_task(&self, id: &PlannedTaskId) -> Option<&PlannedTask> {
        self.planned_tasks.iter().find(|t| &t.id == id)
    }

    /// Add a planned task with the same group snapshot rule as [`Store::add_task`].
    pub fn add_planned_task(&mut self, new: NewPlannedTask) -> PlannedTaskId {
        let snapshot = self.group_snapshot(&new.group_id, "planned_task");
        let planned = new.into_planned(snapshot);
        let id = planned.id.clone();
        debug!(planned = %id, recurrence = planned.recurrence.label(), "planned task added");
        self.planned_tasks.push(planned);
        id
    }

    pub fn update_planned_task(&mut self, id: &PlannedTaskId, patch: PlannedTaskPatch) -> bool {
        match self.planned_tasks.iter_mut().find(|t| &t.id == id) {
            Some(planned) => {
                patch.apply_to(planned);
                true
            }
            None => {
                debug!(planned = %id, "update_planned_task: unknown id");
                false
            }
        }
    }

    pub fn delete_planned_task(&mut self, id: &PlannedTaskId) -> bool {
        let removed = remove_where(&mut self.planned_tasks, |t| &t.id == id);
        if !removed {
            debug!(planned = %id, "delete_planned_task: unknown id");
        }
        removed
    }

    pub fn set_planned_enabled(&mut self, id: &PlannedTaskId, enabled: bool) -> bool {
        self.update_planned_task(
            id,
            PlannedTaskPatch {
                enabled: Some(enabled),
                ..PlannedTaskPatch::default()
            },
        )
    }
}
