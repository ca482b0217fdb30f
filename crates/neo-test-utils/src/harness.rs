// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end store scenarios.
//!
//! `TestHarness` assembles a store on a [`FixedClock`], the configuration,
//! a channel matcher and a preferences file in a temp directory. It offers
//! `send`/`receive` to drive chat the way the console does.

use std::path::PathBuf;
use std::sync::Arc;

use neo_config::NeoConfig;
use neo_core::model::{ChatChannel, ChatMessage, User};
use neo_core::{ChannelId, Clock, MessageId, NeoError, Timestamp, UserId};
use neo_prefs::Preferences;
use neo_router::{ChannelMatcher, DayCalendar};
use neo_store::{ChannelView, Store, StoreHandle, TypingSimulator, demo_store};

use crate::clock::FixedClock;
use crate::fixtures;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: NeoConfig,
    now: Timestamp,
    demo: bool,
    users: Vec<User>,
    channels: Vec<ChatChannel>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: NeoConfig::default(),
            now: fixtures::base_time(),
            demo: false,
            users: Vec::new(),
            channels: Vec::new(),
        }
    }

    /// Use `config` instead of the defaults.
    pub fn with_config(mut self, config: NeoConfig) -> Self {
        self.config = config;
        self
    }

    /// Start the clock at `now`.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    /// Preload the demo dataset.
    pub fn with_demo_data(mut self) -> Self {
        self.demo = true;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_channel(mut self, channel: ChatChannel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Build the harness. Fails only if the temp directory cannot be made.
    pub fn build(self) -> Result<TestHarness, NeoError> {
        let temp_dir = tempfile::TempDir::new().map_err(|e| NeoError::Preferences {
            message: "failed to create temp dir".into(),
            source: Some(Box::new(e)),
        })?;
        let prefs_path = temp_dir.path().join("preferences.json");

        let clock = Arc::new(FixedClock::new(self.now));
        let current_user = self.config.console.current_user_id.as_str();
        let mut store = if self.demo {
            demo_store(current_user, clock.clone())
        } else {
            Store::new(current_user).with_clock(clock.clone())
        };
        for user in self.users {
            store.add_user(user);
        }
        for channel in self.channels {
            store.add_chat_channel(channel);
        }

        let mut config = self.config;
        config.preferences.path = prefs_path.to_string_lossy().into_owned();
        let matcher = ChannelMatcher::new(&config.routing);
        let calendar = DayCalendar::from_config(&config.chat);

        Ok(TestHarness {
            store: StoreHandle::new(store),
            clock,
            matcher,
            calendar,
            config,
            prefs_path,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete test environment around one shared store.
pub struct TestHarness {
    /// Shared store, as the console holds it.
    pub store: StoreHandle,
    /// Clock behind the store; move it to change "now".
    pub clock: Arc<FixedClock>,
    pub matcher: ChannelMatcher,
    pub calendar: DayCalendar,
    /// Effective config, with `preferences.path` inside the temp dir.
    pub config: NeoConfig,
    prefs_path: PathBuf,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn current_user(&self) -> UserId {
        self.store.read(|s| s.current_user().clone())
    }

    /// Post `text` as the current user, stamped with the clock.
    pub fn send(&self, channel: &str, text: &str) -> MessageId {
        let author = self.current_user();
        self.post(channel, author.as_str(), text)
    }

    /// Post `text` as someone else, stamped with the clock.
    pub fn receive(&self, channel: &str, author: &str, text: &str) -> MessageId {
        self.post(channel, author, text)
    }

    fn post(&self, channel: &str, author: &str, text: &str) -> MessageId {
        let id = MessageId::generate("m");
        let user_name = self
            .store
            .read(|s| s.user(&author.into()).map(|u| u.first_name().to_string()))
            .unwrap_or_else(|| author.to_string());
        let message = ChatMessage::new(id.clone(), channel, author, user_name, text, self.now());
        self.store.write(|s| s.add_chat_message(message));
        id
    }

    /// Open a view session on `channel` at the clock's current time.
    pub fn open(&self, channel: &str) -> Option<ChannelView> {
        let now = self.now();
        self.store.read(|s| {
            ChannelView::open(s, &ChannelId::from(channel), &self.matcher, now)
                .map(|view| view.with_calendar(self.calendar.clone()))
        })
    }

    pub fn typing(&self) -> TypingSimulator {
        TypingSimulator::new(self.store.clone(), &self.config.chat)
    }

    /// Load the preferences file in the temp dir.
    pub fn preferences(&self) -> Result<Preferences, NeoError> {
        Preferences::load(&self.prefs_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_empty_store_for_configured_user() {
        let harness = TestHarness::builder().build().unwrap();
        assert_eq!(harness.current_user().as_str(), "u1");
        harness.store.read(|s| assert!(s.channels().is_empty()));
    }

    #[test]
    fn send_never_counts_as_unread_but_receive_does() {
        let harness = TestHarness::builder()
            .with_user(fixtures::user("u2", "Sara Ahmed"))
            .with_channel(fixtures::channel("c1", "Electrical"))
            .build()
            .unwrap();
        harness.send("c1", "on it");
        harness.receive("c1", "u2", "thanks");

        harness.store.read(|s| {
            let channel = s.channel(&"c1".into()).unwrap();
            assert_eq!(channel.unread, 1);
            assert_eq!(channel.last_message.as_deref(), Some("thanks"));
            assert_eq!(s.messages()[1].user_name, "Sara");
        });
    }

    #[test]
    fn preferences_live_in_temp_dir() {
        let harness = TestHarness::builder().build().unwrap();
        let mut prefs = harness.preferences().unwrap();
        prefs.toggle_mute(&"c1".into()).unwrap();
        assert!(harness.preferences().unwrap().is_muted(&"c1".into()));
        assert_eq!(std::path::Path::new(&harness.config.preferences.path), prefs.path());
    }

    #[test]
    fn demo_data_is_stamped_by_clock() {
        let harness = TestHarness::builder().with_demo_data().build().unwrap();
        let view = harness.open("ch1").unwrap();
        assert!(!view.entries().is_empty());
        let buckets = view.date_buckets();
        assert_eq!(view.render_label(&buckets[0]), "Today");
    }

    #[tokio::test(start_paused = true)]
    async fn typing_uses_harness_config() {
        let harness = TestHarness::builder()
            .with_user(fixtures::user("u1", "Me"))
            .with_user(fixtures::user("u2", "Sara Ahmed"))
            .with_channel(fixtures::channel("c1", "Electrical"))
            .build()
            .unwrap();
        let typing = harness.typing();
        let task = typing.after_send(&"c1".into()).unwrap();
        task.await.unwrap();
        assert!(typing.current().is_none());
    }
}
