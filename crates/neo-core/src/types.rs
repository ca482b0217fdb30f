// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifiers and shared scalar types.
//!
//! Every entity is keyed by an opaque string id. Each collection gets its
//! own newtype so a `TaskId` can never be passed where a `GroupId` is
//! expected, while the wire form stays a plain JSON string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point in time used for every entity timestamp.
pub type Timestamp = DateTime<Utc>;

/// Reserved author id for messages injected by the notification feed.
pub const SYSTEM_USER_ID: &str = "system";

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh process-unique id such as `m_3f2a...`.
            pub fn generate(prefix: &str) -> Self {
                Self(format!("{prefix}_{}", uuid::Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifies a team member.
    UserId
);
entity_id!(
    /// Identifies a work group (Electrical, Fire Safety, ...).
    GroupId
);
entity_id!(
    /// Identifies a physical area or room.
    AreaId
);
entity_id!(
    /// Identifies a reactive task (work order).
    TaskId
);
entity_id!(
    /// Identifies a scheduled maintenance task.
    PlannedTaskId
);
entity_id!(
    /// Identifies an asset record.
    AssetId
);
entity_id!(
    /// Identifies a chat channel.
    ChannelId
);
entity_id!(
    /// Identifies a chat or system message.
    MessageId
);
entity_id!(
    /// Identifies an in-app notification.
    NotificationId
);
entity_id!(
    /// Identifies a task comment.
    CommentId
);

impl UserId {
    /// The sentinel author of injected system messages.
    pub fn system() -> Self {
        Self(SYSTEM_USER_ID.to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == SYSTEM_USER_ID
    }
}
