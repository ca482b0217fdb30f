// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat channels and chat messages.

use neo_core::model::{ChannelPatch, ChatChannel, ChatMessage, MessagePatch, ReplySnapshot};
use neo_core::{ChannelId, MessageId, UserId};
use tracing::debug;

use super::{Store, remove_where};

impl Store {
    pub fn channel(&self, id: &ChannelId) -> Option<&ChatChannel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    /// Add a channel. Callers that open a DM should look for an existing
    /// one with [`Store::find_dm_channel`] first; the store does not dedupe.
    pub fn add_chat_channel(&mut self, channel: ChatChannel) {
        debug!(channel = %channel.id, kind = %channel.kind, "channel added");
        self.channels.push(channel);
    }

    /// The first DM channel whose counterpart is `user_id`.
    pub fn find_dm_channel(&self, user_id: &UserId) -> Option<&ChatChannel> {
        self.channels
            .iter()
            .find(|c| c.is_dm() && c.dm_user_id.as_ref() == Some(user_id))
    }

    pub fn update_chat_channel(&mut self, id: &ChannelId, patch: ChannelPatch) -> bool {
        match self.channels.iter_mut().find(|c| &c.id == id) {
            Some(channel) => {
                patch.apply_to(channel);
                true
            }
            None => {
                debug!(channel = %id, "update_chat_channel: unknown id");
                false
            }
        }
    }

    pub fn mark_channel_read(&mut self, id: &ChannelId) -> bool {
        self.update_chat_channel(
            id,
            ChannelPatch {
                unread: Some(0),
                ..ChannelPatch::default()
            },
        )
    }

    /// Remove a channel. Its messages stay in the message collection.
    pub fn delete_chat_channel(&mut self, id: &ChannelId) -> bool {
        let removed = remove_where(&mut self.channels, |c| &c.id == id);
        if !removed {
            debug!(channel = %id, "delete_chat_channel: unknown id");
        }
        removed
    }

    /// Append a message and refresh its channel's preview.
    ///
    /// Messages from anyone but the current user count as unread; the
    /// current user's own messages never do.
    pub fn add_chat_message(&mut self, message: ChatMessage) {
        let inbound = message.user_id != *self.current_user();
        if let Some(channel) = self.channels.iter_mut().find(|c| c.id == message.channel) {
            channel.last_message = Some(message.text.clone());
            channel.last_time = Some(message.timestamp);
            if inbound {
                channel.unread += 1;
            }
        } else {
            debug!(channel = %message.channel, "message added to unknown channel");
        }
        self.messages.push(message);
    }

    pub fn message(&self, id: &MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| &m.id == id)
    }

    fn message_mut(&mut self, id: &MessageId, op: &str) -> Option<&mut ChatMessage> {
        let found = self.messages.iter_mut().find(|m| &m.id == id);
        if found.is_none() {
            debug!(message = %id, op, "unknown message id");
        }
        found
    }

    /// Shallow-merge `patch` into a message.
    pub fn update_chat_message(&mut self, id: &MessageId, patch: MessagePatch) -> bool {
        self.message_mut(id, "update_chat_message")
            .map(|m| patch.apply_to(m))
            .is_some()
    }

    pub fn edit_message(&mut self, id: &MessageId, text: impl Into<String>) -> bool {
        self.update_chat_message(id, MessagePatch::edit(text))
    }

    /// Soft delete: the message keeps its place with empty text.
    ///
    /// Deleting a channel's newest message blanks the stored preview so the
    /// removed text does not linger in the channel list.
    pub fn delete_message(&mut self, id: &MessageId) -> bool {
        let Some(channel_id) = self.message(id).map(|m| m.channel.clone()) else {
            debug!(message = %id, "delete_message: unknown id");
            return false;
        };
        let newest = self
            .messages
            .iter()
            .rev()
            .find(|m| m.channel == channel_id)
            .is_some_and(|m| &m.id == id);
        self.update_chat_message(id, MessagePatch::delete());
        if newest && let Some(channel) = self.channels.iter_mut().find(|c| c.id == channel_id) {
            channel.last_message = Some(String::new());
        }
        true
    }

    pub fn toggle_reaction(&mut self, id: &MessageId, emoji: &str) -> bool {
        self.message_mut(id, "toggle_reaction")
            .map(|m| m.toggle_reaction(emoji))
            .is_some()
    }

    /// Flip the pinned flag.
    pub fn pin_message(&mut self, id: &MessageId) -> bool {
        self.message_mut(id, "pin_message")
            .map(|m| m.pinned = !m.pinned)
            .is_some()
    }

    /// Frozen quote of a message, for attaching to a reply.
    pub fn reply_snapshot(&self, id: &MessageId) -> Option<ReplySnapshot> {
        self.message(id).map(ChatMessage::quote)
    }

    /// Messages posted to a channel, in insertion order.
    pub fn channel_messages(&self, id: &ChannelId) -> Vec<&ChatMessage> {
        self.messages.iter().filter(|m| &m.channel == id).collect()
    }

    /// Pinned messages of a channel. System entries are never listed.
    pub fn pinned_messages(&self, id: &ChannelId) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| &m.channel == id && m.pinned && !m.is_system())
            .collect()
    }

    /// Text shown under a channel name: the newest message in the
    /// collection, else the preview stored on the channel.
    pub fn channel_preview(&self, id: &ChannelId) -> Option<String> {
        self.messages
            .iter()
            .rev()
            .find(|m| &m.channel == id)
            .map(|m| m.text.clone())
            .or_else(|| self.channel(id).and_then(|c| c.last_message.clone()))
    }
}
