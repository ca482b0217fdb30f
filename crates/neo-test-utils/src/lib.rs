// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for NEO integration tests.
//!
//! # Components
//!
//! - [`FixedClock`] - settable clock for deterministic timestamps
//! - [`fixtures`] - terse constructors for users, groups, channels, messages
//! - [`TestHarness`] - a store, config, matcher and temp preferences file

pub mod clock;
pub mod fixtures;
pub mod harness;

pub use clock::FixedClock;
pub use harness::TestHarness;
