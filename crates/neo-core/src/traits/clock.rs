// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time source used for generated timestamps and relative date labels.

use chrono::Utc;

use crate::types::Timestamp;

/// Source of the current time.
///
/// The store stamps system messages and notifications with it, and the
/// router uses it to decide what "Today" and "Yesterday" mean.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
