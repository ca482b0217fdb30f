// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short constructors for test data.

use chrono::{Duration, TimeZone, Utc};
use neo_core::Timestamp;
use neo_core::model::{ChatChannel, ChatMessage, Group, User};

/// Reference instant for fixtures: Thursday 2026-06-11 09:00 UTC.
pub fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 6, 11, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `minutes` after [`base_time`]. Negative values go back in time.
pub fn at(minutes: i64) -> Timestamp {
    base_time() + Duration::minutes(minutes)
}

/// An accepted user with an email derived from the id.
pub fn user(id: &str, name: &str) -> User {
    User::new(id, name, format!("{id}@neo.test"))
}

/// A user whose invitation is still pending.
pub fn invitee(id: &str, name: &str) -> User {
    let mut user = user(id, name);
    user.accepted = false;
    user
}

pub fn group(id: &str, name: &str, color: &str) -> Group {
    Group::new(id, name, color)
}

pub fn channel(id: &str, name: &str) -> ChatChannel {
    ChatChannel::group(id, name)
}

pub fn message(id: &str, channel: &str, author: &str, text: &str, ts: Timestamp) -> ChatMessage {
    ChatMessage::new(id, channel, author, author, text, ts)
}
