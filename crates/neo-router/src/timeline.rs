// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merged channel timelines and the unread divider.

use neo_core::model::{ChatMessage, SystemMessage};
use neo_core::{ChannelId, UserId};

/// Render a system message as a chat entry in `channel`.
///
/// The entry keeps the system message's id, text and timestamp and is
/// authored by the reserved `system` user.
pub fn system_entry(message: &SystemMessage, channel: &ChannelId, system_user_name: &str) -> ChatMessage {
    ChatMessage::new(
        message.id.clone(),
        channel.clone(),
        UserId::system(),
        system_user_name,
        message.text.clone(),
        message.timestamp,
    )
}

/// Merge a channel's chat messages with the system messages routed to it.
///
/// Chat entries come first, then system entries, and the result is stably
/// sorted ascending by timestamp, so equal timestamps keep that order.
pub fn merged_timeline<'a, 'b>(
    channel: &ChannelId,
    chat: impl IntoIterator<Item = &'a ChatMessage>,
    system: impl IntoIterator<Item = &'b SystemMessage>,
    system_user_name: &str,
) -> Vec<ChatMessage> {
    let mut entries: Vec<ChatMessage> = chat.into_iter().cloned().collect();
    entries.extend(
        system
            .into_iter()
            .map(|m| system_entry(m, channel, system_user_name)),
    );
    entries.sort_by_key(|m| m.timestamp);
    entries
}

/// Index of the first unread entry in a timeline of `len` entries.
///
/// `None` when there is nothing unread or nothing to show. When `unread`
/// exceeds `len` the divider sits before the first entry.
pub fn divider_index(unread: u32, len: usize) -> Option<usize> {
    if unread == 0 || len == 0 {
        return None;
    }
    Some(len.saturating_sub(unread as usize))
}

/// Holds the divider position for one viewing session.
///
/// The first call to [`DividerLatch::resolve`] computes the index; later
/// calls return the same answer no matter how the timeline has grown. A new
/// session starts with a new latch.
#[derive(Debug, Clone, Default)]
pub struct DividerLatch {
    latched: Option<Option<usize>>,
}

impl DividerLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, unread: u32, len: usize) -> Option<usize> {
        *self
            .latched
            .get_or_insert_with(|| divider_index(unread, len))
    }

    pub fn is_latched(&self) -> bool {
        self.latched.is_some()
    }

    /// The latched index, if `resolve` has run and placed a divider.
    pub fn index(&self) -> Option<usize> {
        self.latched.flatten()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use neo_core::model::{NewSystemMessage, SystemMessageKind};
    use proptest::prelude::*;

    use super::*;

    fn at(minute: i64) -> neo_core::Timestamp {
        Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap() + Duration::minutes(minute)
    }

    fn chat(id: &str, minute: i64) -> ChatMessage {
        ChatMessage::new(id, "c1", "u2", "Sara", id, at(minute))
    }

    fn system(id: &str, minute: i64) -> SystemMessage {
        NewSystemMessage::new("Fire", "Inspection due", SystemMessageKind::Reminder)
            .into_message(id.into(), at(minute))
    }

    #[test]
    fn five_messages_two_unread() {
        assert_eq!(divider_index(2, 5), Some(3));
    }

    #[test]
    fn no_divider_without_unread_or_entries() {
        assert_eq!(divider_index(0, 5), None);
        assert_eq!(divider_index(3, 0), None);
    }

    #[test]
    fn unread_beyond_length_clamps_to_start() {
        assert_eq!(divider_index(9, 4), Some(0));
    }

    #[test]
    fn merged_timeline_sorts_by_timestamp() {
        let channel = ChannelId::from("c1");
        let chats = [chat("m1", 0), chat("m2", 10)];
        let sys = [system("s1", 5)];
        let merged = merged_timeline(&channel, &chats, &sys, "🤖 NEO System");
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "s1", "m2"]);
        assert!(merged[1].is_system());
        assert_eq!(merged[1].user_name, "🤖 NEO System");
        assert_eq!(merged[1].channel, channel);
    }

    #[test]
    fn equal_timestamps_keep_chat_first() {
        let channel = ChannelId::from("c1");
        let merged = merged_timeline(&channel, &[chat("m1", 3)], &[system("s1", 3)], "sys");
        assert_eq!(merged[0].id.as_str(), "m1");
    }

    #[test]
    fn latch_ignores_later_growth() {
        let mut latch = DividerLatch::new();
        assert!(!latch.is_latched());
        assert_eq!(latch.resolve(2, 5), Some(3));
        assert_eq!(latch.resolve(4, 9), Some(3));
        assert_eq!(latch.index(), Some(3));

        let mut fresh = DividerLatch::new();
        assert_eq!(fresh.resolve(4, 9), Some(5));
    }

    #[test]
    fn latch_remembers_absent_divider() {
        let mut latch = DividerLatch::new();
        assert_eq!(latch.resolve(0, 5), None);
        assert!(latch.is_latched());
        assert_eq!(latch.resolve(3, 5), None);
    }

    proptest! {
        #[test]
        fn divider_law(unread in 0u32..200, len in 0usize..200) {
            let expected = if unread == 0 || len == 0 {
                None
            } else {
                Some(len.saturating_sub(unread as usize))
            };
            prop_assert_eq!(divider_index(unread, len), expected);
            if let Some(idx) = divider_index(unread, len) {
                prop_assert!(idx < len);
                prop_assert_eq!(len - idx, (unread as usize).min(len));
            }
        }
    }
}
