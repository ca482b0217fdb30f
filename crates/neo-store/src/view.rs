// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A channel as one viewing session sees it.

use neo_core::model::{ChatChannel, ChatMessage};
use neo_core::{ChannelId, Timestamp};
use neo_router::{
    ChannelMatcher, DayBucket, DayCalendar, DividerLatch, bucket_by_day, merged_timeline,
};
use tracing::debug;

use crate::store::Store;

fn build_timeline(store: &Store, channel: &ChatChannel, matcher: &ChannelMatcher) -> Vec<ChatMessage> {
    let system = matcher.system_messages_for(channel, store.channels(), store.system_messages());
    merged_timeline(
        &channel.id,
        store.channel_messages(&channel.id),
        system,
        matcher.system_user_name(),
    )
}

/// Merged timeline of one channel plus the unread divider latched when
/// the session opened.
#[derive(Debug, Clone)]
pub struct ChannelView {
    channel_id: ChannelId,
    name: String,
    entries: Vec<ChatMessage>,
    latch: DividerLatch,
    matcher: ChannelMatcher,
    calendar: DayCalendar,
    now: Timestamp,
}

impl ChannelView {
    /// Start a session. Returns `None` when the channel does not exist.
    pub fn open(
        store: &Store,
        channel_id: &ChannelId,
        matcher: &ChannelMatcher,
        now: Timestamp,
    ) -> Option<Self> {
        let channel = store.channel(channel_id)?;
        let entries = build_timeline(store, channel, matcher);
        let mut latch = DividerLatch::new();
        let divider = latch.resolve(channel.unread, entries.len());
        debug!(channel = %channel_id, entries = entries.len(), ?divider, "channel view opened");

        Some(Self {
            channel_id: channel_id.clone(),
            name: channel.name.clone(),
            entries,
            latch,
            matcher: matcher.clone(),
            calendar: DayCalendar::default(),
            now,
        })
    }

    /// Use `calendar` for day labels instead of the UTC default.
    pub fn with_calendar(mut self, calendar: DayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Rebuild the timeline from the store. The divider does not move.
    pub fn refresh(&mut self, store: &Store) {
        match store.channel(&self.channel_id) {
            Some(channel) => {
                self.name = channel.name.clone();
                self.entries = build_timeline(store, channel, &self.matcher);
            }
            None => {
                debug!(channel = %self.channel_id, "channel gone, clearing view");
                self.entries.clear();
            }
        }
    }

    /// Move the reference time used for day labels.
    pub fn set_now(&mut self, now: Timestamp) {
        self.now = now;
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    /// Index of the first entry below the "new messages" divider.
    pub fn divider(&self) -> Option<usize> {
        self.latch.index()
    }

    pub fn date_buckets(&self) -> Vec<DayBucket<'_>> {
        bucket_by_day(&self.entries, self.now, &self.calendar)
    }

    /// Separator text for a bucket label, rendered with this view's calendar.
    pub fn render_label(&self, bucket: &DayBucket<'_>) -> String {
        self.calendar.render(bucket.label)
    }

    pub fn pinned(&self) -> Vec<&ChatMessage> {
        self.entries
            .iter()
            .filter(|m| m.pinned && !m.is_system())
            .collect()
    }
}
