// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat channels, chat messages, and system-generated messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::group::GroupSnapshot;
use crate::types::{ChannelId, MessageId, TaskId, Timestamp, UserId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChannelKind {
    #[default]
    Group,
    Dm,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelKind,
    pub icon: Option<String>,
    /// Counterpart of a direct-message channel.
    pub dm_user_id: Option<UserId>,
    pub unread: u32,
    /// Preview of the most recent message, kept in step by `add_chat_message`.
    pub last_message: Option<String>,
    pub last_time: Option<Timestamp>,
}

impl ChatChannel {
    pub fn group(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ChannelKind::Group,
            icon: None,
            dm_user_id: None,
            unread: 0,
            last_message: None,
            last_time: None,
        }
    }

    pub fn dm(id: impl Into<ChannelId>, name: impl Into<String>, user_id: impl Into<UserId>) -> Self {
        Self {
            kind: ChannelKind::Dm,
            dm_user_id: Some(user_id.into()),
            ..Self::group(id, name)
        }
    }

    pub fn custom(id: impl Into<ChannelId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind: ChannelKind::Custom,
            icon: Some(icon.into()),
            ..Self::group(id, name)
        }
    }

    pub fn is_dm(&self) -> bool {
        self.kind == ChannelKind::Dm
    }
}

/// Partial update for a [`ChatChannel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelPatch {
    pub name: Option<String>,
    pub icon: Option<Option<String>>,
    pub unread: Option<u32>,
}

impl ChannelPatch {
    pub fn apply_to(self, channel: &mut ChatChannel) {
        if let Some(name) = self.name {
            channel.name = name;
        }
        if let Some(icon) = self.icon {
            channel.icon = icon;
        }
        if let Some(unread) = self.unread {
            channel.unread = unread;
        }
    }
}

/// One emoji tally on a message. `count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
    pub reacted_by_me: bool,
}

/// Frozen copy of the message being replied to.
///
/// Later edits or deletion of the original do not change the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySnapshot {
    pub message_id: MessageId,
    pub user_name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub user_id: UserId,
    pub user_name: String,
    pub text: String,
    pub timestamp: Timestamp,
    pub channel: ChannelId,
    pub pinned: bool,
    pub edited: bool,
    pub deleted: bool,
    pub reply_to: Option<ReplySnapshot>,
    pub reactions: Vec<Reaction>,
}

impl ChatMessage {
    pub fn new(
        id: impl Into<MessageId>,
        channel: impl Into<ChannelId>,
        user_id: impl Into<UserId>,
        user_name: impl Into<String>,
        text: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            text: text.into(),
            timestamp,
            channel: channel.into(),
            pinned: false,
            edited: false,
            deleted: false,
            reply_to: None,
            reactions: Vec::new(),
        }
    }

    pub fn replying_to(mut self, quote: ReplySnapshot) -> Self {
        self.reply_to = Some(quote);
        self
    }

    pub fn is_system(&self) -> bool {
        self.user_id.is_system()
    }

    /// Frozen quote of this message for use in a reply.
    pub fn quote(&self) -> ReplySnapshot {
        ReplySnapshot {
            message_id: self.id.clone(),
            user_name: self.user_name.clone(),
            text: self.text.clone(),
        }
    }

    /// Toggle the current user's reaction with `emoji`.
    ///
    /// If the user already reacted, the tally drops by one and the entry
    /// disappears at zero. Otherwise the tally grows by one, creating the
    /// entry at the end of the list if needed. At most one entry per emoji.
    pub fn toggle_reaction(&mut self, emoji: &str) {
        match self.reactions.iter().position(|r| r.emoji == emoji) {
            Some(idx) if self.reactions[idx].reacted_by_me => {
                let reaction = &mut self.reactions[idx];
                reaction.count = reaction.count.saturating_sub(1);
                reaction.reacted_by_me = false;
                if reaction.count == 0 {
                    self.reactions.remove(idx);
                }
            }
            Some(idx) => {
                let reaction = &mut self.reactions[idx];
                reaction.count += 1;
                reaction.reacted_by_me = true;
            }
            None => self.reactions.push(Reaction {
                emoji: emoji.to_string(),
                count: 1,
                reacted_by_me: true,
            }),
        }
    }
}

/// Partial update for a [`ChatMessage`], shallow-merged by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePatch {
    pub text: Option<String>,
    pub edited: Option<bool>,
    pub deleted: Option<bool>,
    pub pinned: Option<bool>,
}

impl MessagePatch {
    /// Replace the text and mark the message edited.
    pub fn edit(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            edited: Some(true),
            ..Self::default()
        }
    }

    /// Soft delete: keep the id, clear the text.
    pub fn delete() -> Self {
        Self {
            text: Some(String::new()),
            deleted: Some(true),
            ..Self::default()
        }
    }

    pub fn apply_to(self, message: &mut ChatMessage) {
        if let Some(text) = self.text {
            message.text = text;
        }
        if let Some(edited) = self.edited {
            message.edited = edited;
        }
        if let Some(deleted) = self.deleted {
            message.deleted = deleted;
        }
        if let Some(pinned) = self.pinned {
            message.pinned = pinned;
        }
    }
}

/// Category of a system-generated message. Unknown kinds are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SystemMessageKind {
    NewTask,
    Reminder,
    PlannedTask,
    Other(String),
}

impl From<String> for SystemMessageKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "new_task" => SystemMessageKind::NewTask,
            "reminder" => SystemMessageKind::Reminder,
            "planned_task" => SystemMessageKind::PlannedTask,
            _ => SystemMessageKind::Other(s),
        }
    }
}

impl From<SystemMessageKind> for String {
    fn from(kind: SystemMessageKind) -> Self {
        match kind {
            SystemMessageKind::NewTask => "new_task".to_string(),
            SystemMessageKind::Reminder => "reminder".to_string(),
            SystemMessageKind::PlannedTask => "planned_task".to_string(),
            SystemMessageKind::Other(s) => s,
        }
    }
}

/// A notification rendered into chat channels whose name overlaps
/// `channel_hint`. The hint is free text, not a channel id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub id: MessageId,
    pub text: String,
    pub timestamp: Timestamp,
    pub channel_hint: String,
    pub task_id: Option<TaskId>,
    pub kind: SystemMessageKind,
    pub group_icon: Option<String>,
    pub group: Option<GroupSnapshot>,
}

/// Input to `add_system_message`; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSystemMessage {
    pub text: String,
    pub channel_hint: String,
    pub task_id: Option<TaskId>,
    pub kind: SystemMessageKind,
    pub group_icon: Option<String>,
    pub group: Option<GroupSnapshot>,
}

impl NewSystemMessage {
    pub fn new(channel_hint: impl Into<String>, text: impl Into<String>, kind: SystemMessageKind) -> Self {
        Self {
            text: text.into(),
            channel_hint: channel_hint.into(),
            task_id: None,
            kind,
            group_icon: None,
            group: None,
        }
    }

    pub fn into_message(self, id: MessageId, timestamp: Timestamp) -> SystemMessage {
        SystemMessage {
            id,
            text: self.text,
            timestamp,
            channel_hint: self.channel_hint,
            task_id: self.task_id,
            kind: self.kind,
            group_icon: self.group_icon,
            group: self.group,
        }
    }
}
