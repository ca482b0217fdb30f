// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams between the store and its environment.

pub mod clock;

pub use clock::{Clock, SystemClock};
