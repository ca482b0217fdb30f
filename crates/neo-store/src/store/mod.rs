// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The workspace store: every entity collection and the only write surface.
//!
//! All operations are total. An update or delete naming an unknown id does
//! nothing and returns `false`; lookups return `Option`. Mutations are split
//! across submodules by collection, each adding an `impl Store` block.

mod assets;
mod chat;
mod directory;
mod feed;
mod tasks;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use neo_core::model::{
    AppNotification, Area, Asset, ChatChannel, ChatMessage, Group, PlannedTask, SystemMessage,
    Task, User,
};
use neo_core::{ChannelId, Clock, GroupId, SystemClock, Timestamp, UserId};

use crate::snapshot::StoreSnapshot;

/// In-memory owner of every collection.
///
/// Each collection keeps insertion order, except system messages and app
/// notifications, which are kept newest first.
pub struct Store {
    pub(crate) users: Vec<User>,
    pub(crate) groups: Vec<Group>,
    pub(crate) areas: Vec<Area>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) planned_tasks: Vec<PlannedTask>,
    pub(crate) assets: Vec<Asset>,
    pub(crate) channels: Vec<ChatChannel>,
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) system_messages: Vec<SystemMessage>,
    pub(crate) notifications: Vec<AppNotification>,
    current_user: UserId,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Empty store for the signed-in `current_user`, on wall-clock time.
    pub fn new(current_user: impl Into<UserId>) -> Self {
        Self {
            users: Vec::new(),
            groups: Vec::new(),
            areas: Vec::new(),
            tasks: Vec::new(),
            planned_tasks: Vec::new(),
            assets: Vec::new(),
            channels: Vec::new(),
            messages: Vec::new(),
            system_messages: Vec::new(),
            notifications: Vec::new(),
            current_user: current_user.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Rebuild a store from a previously taken snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot, current_user: impl Into<UserId>) -> Self {
        Self {
            users: snapshot.users,
            groups: snapshot.groups,
            areas: snapshot.areas,
            tasks: snapshot.tasks,
            planned_tasks: snapshot.planned_tasks,
            assets: snapshot.assets,
            channels: snapshot.channels,
            messages: snapshot.messages,
            system_messages: snapshot.system_messages,
            notifications: snapshot.notifications,
            ..Self::new(current_user)
        }
    }

    /// Replace the time source used for generated timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn current_user(&self) -> &UserId {
        &self.current_user
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Cloned, serializable copy of every collection.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.users.clone(),
            groups: self.groups.clone(),
            areas: self.areas.clone(),
            tasks: self.tasks.clone(),
            planned_tasks: self.planned_tasks.clone(),
            assets: self.assets.clone(),
            channels: self.channels.clone(),
            messages: self.messages.clone(),
            system_messages: self.system_messages.clone(),
            notifications: self.notifications.clone(),
        }
    }

    // --- Collections -------------------------------------------------------

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn planned_tasks(&self) -> &[PlannedTask] {
        &self.planned_tasks
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn channels(&self) -> &[ChatChannel] {
        &self.channels
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// System messages, newest first.
    pub fn system_messages(&self) -> &[SystemMessage] {
        &self.system_messages
    }

    /// App notifications, newest first.
    pub fn notifications(&self) -> &[AppNotification] {
        &self.notifications
    }

    // --- Derived reads -----------------------------------------------------

    /// Members of a group who have accepted their invitation.
    pub fn active_members(&self, group_id: &GroupId) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.in_group(group_id) && u.is_active())
            .collect()
    }

    /// Unread messages across every channel not in `muted`.
    pub fn total_unread(&self, muted: &BTreeSet<ChannelId>) -> u32 {
        self.channels
            .iter()
            .filter(|c| !muted.contains(&c.id))
            .map(|c| c.unread)
            .sum()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("current_user", &self.current_user)
            .field("users", &self.users.len())
            .field("groups", &self.groups.len())
            .field("tasks", &self.tasks.len())
            .field("channels", &self.channels.len())
            .field("messages", &self.messages.len())
            .field("system_messages", &self.system_messages.len())
            .finish_non_exhaustive()
    }
}

/// Remove the first element matching `pred`. Returns whether one was found.
pub(crate) fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(pred) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use neo_core::model::UserPatch;

    use super::*;

    #[test]
    fn active_members_skip_pending_invites() {
        let mut store = Store::new("u1");
        let mut sara = User::new("u2", "Sara Ahmed", "sara@neo.test");
        sara.group_ids.insert("g1".into());
        let mut omar = User::new("u3", "Omar Ali", "omar@neo.test");
        omar.group_ids.insert("g1".into());
        omar.accepted = false;
        store.add_user(sara);
        store.add_user(omar);

        let members: Vec<&str> = store
            .active_members(&"g1".into())
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(members, vec!["u2"]);
    }

    #[test]
    fn total_unread_skips_muted() {
        let mut store = Store::new("u1");
        let mut c1 = ChatChannel::group("c1", "Electrical");
        c1.unread = 3;
        let mut c2 = ChatChannel::group("c2", "Plumbing");
        c2.unread = 4;
        store.add_chat_channel(c1);
        store.add_chat_channel(c2);

        assert_eq!(store.total_unread(&BTreeSet::new()), 7);
        let muted = BTreeSet::from([ChannelId::from("c2")]);
        assert_eq!(store.total_unread(&muted), 3);
    }

    #[test]
    fn store_rebuilds_from_snapshot() {
        let mut store = Store::new("u1");
        store.add_user(User::new("u2", "Sara", "sara@neo.test"));
        let mut rebuilt = Store::from_snapshot(store.snapshot(), "u1");
        assert_eq!(rebuilt.users().len(), 1);
        assert!(rebuilt.update_user(&"u2".into(), UserPatch::default()));
    }
}
