// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System messages and the notification bell.

use neo_core::model::{NewNotification, NewSystemMessage};
use neo_core::{MessageId, NotificationId};
use tracing::{debug, info};

use super::Store;

impl Store {
    /// Record a system event. The store assigns the id and timestamp and
    /// puts the message at the front of the feed.
    pub fn add_system_message(&mut self, new: NewSystemMessage) -> MessageId {
        let id = MessageId::generate("sys");
        let message = new.into_message(id.clone(), self.now());
        info!(id = %id, hint = %message.channel_hint, kind = ?message.kind, "system message added");
        self.system_messages.insert(0, message);
        id
    }

    /// Add an unread notification at the front of the bell list.
    pub fn add_notification(&mut self, new: NewNotification) -> NotificationId {
        let id = NotificationId::generate("notif");
        let notification = new.into_notification(id.clone(), self.now());
        debug!(id = %id, title = %notification.title, "notification added");
        self.notifications.insert(0, notification);
        id
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
