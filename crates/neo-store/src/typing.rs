// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated "someone is typing" indicator shown after the user sends.
//!
//! After a send, one of the first few other members is picked at random.
//! Their indicator appears after `typing_delay_ms` and clears after
//! `typing_duration_ms`. Direct-message channels never show it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use neo_config::model::ChatConfig;
use neo_core::{ChannelId, UserId};
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::handle::StoreHandle;
use crate::store::Store;

/// Who is shown as typing, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingIndicator {
    pub channel: ChannelId,
    pub user_id: UserId,
    pub first_name: String,
}

#[derive(Debug, Clone)]
pub struct TypingSimulator {
    store: StoreHandle,
    delay: Duration,
    duration: Duration,
    candidates: usize,
    current: Arc<Mutex<Option<TypingIndicator>>>,
}

impl TypingSimulator {
    pub fn new(store: StoreHandle, config: &ChatConfig) -> Self {
        Self {
            store,
            delay: Duration::from_millis(config.typing_delay_ms),
            duration: Duration::from_millis(config.typing_duration_ms),
            candidates: config.typing_candidates,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// The indicator currently visible, if any.
    pub fn current(&self) -> Option<TypingIndicator> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pick who will appear to type in `channel_id`.
    fn pick(&self, store: &Store, channel_id: &ChannelId) -> Option<TypingIndicator> {
        let channel = store.channel(channel_id)?;
        if channel.is_dm() {
            return None;
        }
        let pool: Vec<_> = store
            .users()
            .iter()
            .filter(|u| &u.id != store.current_user() && u.is_active())
            .take(self.candidates)
            .collect();
        if pool.is_empty() {
            return None;
        }
        let user = pool[rand::thread_rng().gen_range(0..pool.len())];
        Some(TypingIndicator {
            channel: channel_id.clone(),
            user_id: user.id.clone(),
            first_name: user.first_name().to_string(),
        })
    }

    /// Schedule an indicator after the current user sent to `channel_id`.
    ///
    /// Returns `None` when nobody would type. The channel is checked again
    /// when the delay elapses; if it was deleted meanwhile nothing shows.
    /// Must be called from inside a tokio runtime.
    pub fn after_send(&self, channel_id: &ChannelId) -> Option<JoinHandle<()>> {
        let indicator = self.store.read(|s| self.pick(s, channel_id))?;
        let store = self.store.clone();
        let current = Arc::clone(&self.current);
        let (delay, duration) = (self.delay, self.duration);

        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if store.read(|s| s.channel(&indicator.channel).is_none()) {
                debug!(channel = %indicator.channel, "channel gone before typing indicator fired");
                return;
            }
            debug!(channel = %indicator.channel, user = %indicator.user_id, "typing indicator shown");
            *current.lock().unwrap_or_else(PoisonError::into_inner) = Some(indicator.clone());

            tokio::time::sleep(duration).await;
            let mut slot = current.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.as_ref() == Some(&indicator) {
                *slot = None;
            }
        }))
    }
}
