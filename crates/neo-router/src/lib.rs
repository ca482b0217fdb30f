// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification routing for the NEO console.
//!
//! This crate provides:
//! - [`ChannelMatcher`]: fuzzy assignment of system messages to chat channels
//! - [`merged_timeline`] and [`DividerLatch`]: a channel's combined timeline
//!   and the stable "new messages" divider within it
//! - [`DayCalendar`] and [`bucket_by_day`]: date separators and list timestamps
//!
//! Everything here is pure; the store calls into it and never the reverse.

pub mod dates;
pub mod matcher;
pub mod timeline;

pub use dates::{DayBucket, DayCalendar, DayLabel, bucket_by_day};
pub use matcher::{ChannelMatcher, hint_matches};
pub use timeline::{DividerLatch, divider_index, merged_timeline, system_entry};
