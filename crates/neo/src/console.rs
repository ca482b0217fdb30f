// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations over one loaded workspace.

use std::sync::Arc;
use std::time::Duration;

use neo_config::NeoConfig;
use neo_core::model::ChatMessage;
use neo_core::{ChannelId, Clock, GroupId, MessageId, NeoError, SystemClock};
use neo_prefs::Preferences;
use neo_router::{ChannelMatcher, DayCalendar};
use neo_store::derive::status_counts;
use neo_store::{ChannelView, StoreHandle, TypingSimulator, demo_store};
use tracing::{debug, info};

use crate::render;

/// Everything a command needs: the store, routing, calendar and
/// per-device preferences.
pub struct Console {
    pub config: NeoConfig,
    pub store: StoreHandle,
    pub matcher: ChannelMatcher,
    pub calendar: DayCalendar,
    pub prefs: Preferences,
}

impl Console {
    /// Load the demo workspace on wall-clock time.
    pub fn open(config: NeoConfig) -> Result<Self, NeoError> {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    pub fn open_with_clock(config: NeoConfig, clock: Arc<dyn Clock>) -> Result<Self, NeoError> {
        let prefs = Preferences::load(&config.preferences.path)?;
        let store = demo_store(config.console.current_user_id.as_str(), clock);
        info!(
            user = %config.console.current_user_id,
            muted = prefs.muted().len(),
            "workspace loaded"
        );
        Ok(Self {
            matcher: ChannelMatcher::new(&config.routing),
            calendar: DayCalendar::from_config(&config.chat),
            store: StoreHandle::new(store),
            prefs,
            config,
        })
    }

    fn require_channel(&self, id: &ChannelId) -> Result<(), NeoError> {
        if self.store.read(|s| s.channel(id).is_some()) {
            return Ok(());
        }
        let known: Vec<String> = self
            .store
            .read(|s| s.channels().iter().map(|c| c.id.to_string()).collect());
        Err(NeoError::Internal(format!(
            "unknown channel '{id}' (known: {})",
            known.join(", ")
        )))
    }

    pub fn channels(&self) -> Vec<String> {
        let mut lines = render::header("Channels");
        self.store.read(|s| {
            let now = s.now();
            for channel in s.channels() {
                let preview = s.channel_preview(&channel.id);
                lines.push(render::channel_row(
                    channel,
                    preview.as_deref(),
                    self.prefs.is_muted(&channel.id),
                    &self.calendar,
                    now,
                ));
            }
        });
        lines
    }

    pub fn channel(&self, id: &ChannelId) -> Result<Vec<String>, NeoError> {
        self.require_channel(id)?;
        let view = self.store.read(|s| {
            ChannelView::open(s, id, &self.matcher, s.now())
                .map(|view| view.with_calendar(self.calendar.clone()))
        });
        view.map(|v| render::channel_view(&v))
            .ok_or_else(|| NeoError::Internal(format!("channel '{id}' disappeared")))
    }

    pub fn tasks(&self, group: Option<&GroupId>) -> Vec<String> {
        let mut lines = render::header("Tasks");
        self.store.read(|s| {
            let tasks: Vec<_> = s
                .tasks()
                .iter()
                .filter(|t| group.is_none_or(|g| &t.group_id == g))
                .collect();
            for task in &tasks {
                lines.push(render::task_row(task));
            }
            lines.push(String::new());
            lines.push(render::status_summary(&status_counts(tasks.iter().copied())));
        });
        lines
    }

    /// Unread chat messages outside muted channels, plus unread
    /// notifications.
    pub fn unread(&self) -> (u32, usize) {
        self.store.read(|s| {
            (
                s.total_unread(self.prefs.muted()),
                s.unread_notification_count(),
            )
        })
    }

    /// Flip the mute state of a channel. Returns the new state.
    pub fn toggle_mute(&mut self, id: &ChannelId) -> Result<bool, NeoError> {
        self.require_channel(id)?;
        self.prefs.toggle_mute(id)
    }

    /// Post `text` as the current user and wait for the typing indicator
    /// it triggers. Returns the indicator's first name, if one showed.
    pub async fn send(&self, id: &ChannelId, text: &str) -> Result<Option<String>, NeoError> {
        self.require_channel(id)?;
        self.store.write(|s| {
            let author = s.current_user().clone();
            let user_name = s
                .user(&author)
                .map(|u| u.first_name().to_string())
                .unwrap_or_else(|| author.to_string());
            let now = s.now();
            s.add_chat_message(ChatMessage::new(
                MessageId::generate("m"),
                id.clone(),
                author,
                user_name,
                text,
                now,
            ));
        });

        let typing = TypingSimulator::new(self.store.clone(), &self.config.chat);
        let Some(task) = typing.after_send(id) else {
            debug!(channel = %id, "no typing indicator for this channel");
            return Ok(None);
        };
        tokio::time::sleep(Duration::from_millis(self.config.chat.typing_delay_ms + 1)).await;
        let shown = typing.current().map(|t| t.first_name);
        task.abort();
        Ok(shown)
    }
}
