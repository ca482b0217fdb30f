// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde cannot express: known log levels, non-empty
//! identities, sane typing timings, parseable date formats.

use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::diagnostic::ConfigError;
use crate::model::NeoConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Largest real-world UTC offset, in minutes (UTC+14:00).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Whether `pattern` can format a calendar date.
///
/// Parsing alone is not enough: time-only fields such as `%H` parse fine
/// but fail when applied to a date.
pub fn date_format_renders(pattern: &str) -> bool {
    if pattern.trim().is_empty()
        || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2026, 1, 5) else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(pattern)).is_ok()
}

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &NeoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !LOG_LEVELS.contains(&config.console.log_level.as_str()) {
        fail(format!(
            "console.log_level `{}` is not one of {}",
            config.console.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    if config.console.current_user_id.trim().is_empty() {
        fail("console.current_user_id must not be empty".to_string());
    }

    if config.routing.system_user_name.trim().is_empty() {
        fail("routing.system_user_name must not be empty".to_string());
    }

    if config.chat.typing_duration_ms == 0 {
        fail("chat.typing_duration_ms must be greater than 0".to_string());
    }

    if config.chat.typing_candidates == 0 {
        fail("chat.typing_candidates must be at least 1".to_string());
    }

    if !date_format_renders(&config.chat.date_format) {
        fail(format!(
            "chat.date_format `{}` is not a valid strftime pattern",
            config.chat.date_format
        ));
    }

    if config.chat.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
        fail(format!(
            "chat.utc_offset_minutes must be within +/-{MAX_UTC_OFFSET_MINUTES}, got {}",
            config.chat.utc_offset_minutes
        ));
    }

    if config.preferences.path.trim().is_empty() {
        fail("preferences.path must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
