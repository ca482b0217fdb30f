// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Users, groups and areas.

use neo_core::model::{Area, AreaPatch, Group, GroupPatch, User, UserPatch};
use neo_core::{AreaId, GroupId, UserId};
use tracing::debug;

use super::{Store, remove_where};

impl Store {
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn add_user(&mut self, user: User) {
        debug!(user = %user.id, "user added");
        self.users.push(user);
    }

    pub fn update_user(&mut self, id: &UserId, patch: UserPatch) -> bool {
        match self.users.iter_mut().find(|u| &u.id == id) {
            Some(user) => {
                patch.apply_to(user);
                true
            }
            None => {
                debug!(user = %id, "update_user: unknown id");
                false
            }
        }
    }

    /// Remove a user. Assignee lists, planned tasks and DM channels that
    /// refer to the user are left as they are.
    pub fn delete_user(&mut self, id: &UserId) -> bool {
        let removed = remove_where(&mut self.users, |u| &u.id == id);
        if !removed {
            debug!(user = %id, "delete_user: unknown id");
        }
        removed
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }

    pub fn add_group(&mut self, group: Group) {
        debug!(group = %group.id, name = %group.name, "group added");
        self.groups.push(group);
    }

    /// Patch a group. Snapshots already copied onto tasks, planned tasks
    /// and system messages keep the old name and color.
    pub fn update_group(&mut self, id: &GroupId, patch: GroupPatch) -> bool {
        match self.groups.iter_mut().find(|g| &g.id == id) {
            Some(group) => {
                patch.apply_to(group);
                true
            }
            None => {
                debug!(group = %id, "update_group: unknown id");
                false
            }
        }
    }

    pub fn delete_group(&mut self, id: &GroupId) -> bool {
        let removed = remove_where(&mut self.groups, |g| &g.id == id);
        if !removed {
            debug!(group = %id, "delete_group: unknown id");
        }
        removed
    }

    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn add_area(&mut self, area: Area) {
        self.areas.push(area);
    }

    pub fn update_area(&mut self, id: &AreaId, patch: AreaPatch) -> bool {
        match self.areas.iter_mut().find(|a| &a.id == id) {
            Some(area) => {
                patch.apply_to(area);
                true
            }
            None => {
                debug!(area = %id, "update_area: unknown id");
                false
            }
        }
    }

    pub fn delete_area(&mut self, id: &AreaId) -> bool {
        let removed = remove_where(&mut self.areas, |a| &a.id == id);
        if !removed {
            debug!(area = %id, "delete_area: unknown id");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_noops() {
        let mut store = Store::new("u1");
        store.add_group(Group::new("g1", "Electrical", "#f59e0b"));
        let before = store.snapshot();

        assert!(!store.update_user(&"nobody".into(), UserPatch::default()));
        assert!(!store.delete_user(&"nobody".into()));
        assert!(!store.update_group(&"g9".into(), GroupPatch::rename("X")));
        assert!(!store.delete_group(&"g9".into()));
        assert!(!store.delete_area(&"a9".into()));

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn update_group_patches_live_record() {
        let mut store = Store::new("u1");
        store.add_group(Group::new("g1", "Electrical", "#f59e0b"));
        assert!(store.update_group(&"g1".into(), GroupPatch::rename("Electric")));
        assert_eq!(store.group(&"g1".into()).map(|g| g.name.as_str()), Some("Electric"));
    }

    #[test]
    fn areas_keep_insertion_order() {
        let mut store = Store::new("u1");
        store.add_area(Area::new("a2", "Roof"));
        store.add_area(Area::new("a1", "Basement"));
        store.update_area(
            &"a1".into(),
            AreaPatch {
                description: Some("Plant room".into()),
                ..AreaPatch::default()
            },
        );
        let names: Vec<&str> = store.areas().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Roof", "Basement"]);
        assert_eq!(store.area(&"a1".into()).unwrap().description, "Plant room");
    }
}
