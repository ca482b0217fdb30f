// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-app notifications shown in the bell menu.

use serde::{Deserialize, Serialize};

use crate::model::group::GroupSnapshot;
use crate::types::{NotificationId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub group: GroupSnapshot,
    pub group_icon: String,
    pub timestamp: Timestamp,
    pub read: bool,
}

/// Input to `add_notification`; the store assigns id, timestamp and `read = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    pub group: GroupSnapshot,
    pub group_icon: String,
}

impl NewNotification {
    pub fn into_notification(self, id: NotificationId, timestamp: Timestamp) -> AppNotification {
        AppNotification {
            id,
            title: self.title,
            body: self.body,
            group: self.group,
            group_icon: self.group_icon,
            timestamp,
            read: false,
        }
    }
}
