// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the NEO console.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level NEO configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NeoConfig {
    /// Console identity and the signed-in user.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// System message routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Chat display and typing indicator settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Local preference file settings.
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Console identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Display name of the console.
    #[serde(default = "default_console_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Id of the signed-in user. Messages authored by this user never
    /// bump a channel's unread counter.
    #[serde(default = "default_current_user_id")]
    pub current_user_id: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: default_console_name(),
            log_level: default_log_level(),
            current_user_id: default_current_user_id(),
        }
    }
}

fn default_console_name() -> String {
    "neo".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_current_user_id() -> String {
    "u1".to_string()
}

/// What to do when a system message matches more than one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchPolicy {
    /// Render the message once in every matching channel.
    #[default]
    Broadcast,
    /// Render the message only in the single best-matching channel.
    Primary,
}

/// System message routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Policy for hints that match several channels.
    #[serde(default)]
    pub multi_match: MultiMatchPolicy,

    /// Author name shown on injected system messages.
    #[serde(default = "default_system_user_name")]
    pub system_user_name: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            multi_match: MultiMatchPolicy::default(),
            system_user_name: default_system_user_name(),
        }
    }
}

fn default_system_user_name() -> String {
    "🤖 NEO System".to_string()
}

/// Chat display configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Delay before the simulated typing indicator appears.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// How long the typing indicator stays visible.
    #[serde(default = "default_typing_duration_ms")]
    pub typing_duration_ms: u64,

    /// Number of channel members eligible to "type" after a send.
    #[serde(default = "default_typing_candidates")]
    pub typing_candidates: usize,

    /// chrono format string for absolute date separators.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Offset from UTC, in minutes, used to decide calendar days.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            typing_duration_ms: default_typing_duration_ms(),
            typing_candidates: default_typing_candidates(),
            date_format: default_date_format(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    600
}

fn default_typing_duration_ms() -> u64 {
    2800
}

fn default_typing_candidates() -> usize {
    3
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

/// Local preference storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesConfig {
    /// Path to the JSON preference file.
    #[serde(default = "default_preferences_path")]
    pub path: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

fn default_preferences_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("neo").join("preferences.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("neo-preferences.json"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_behavior() {
        let config = NeoConfig::default();
        assert_eq!(config.chat.typing_delay_ms, 600);
        assert_eq!(config.chat.typing_duration_ms, 2800);
        assert_eq!(config.chat.typing_candidates, 3);
        assert_eq!(config.routing.multi_match, MultiMatchPolicy::Broadcast);
        assert_eq!(config.console.current_user_id, "u1");
    }

    #[test]
    fn multi_match_policy_parses_snake_case() {
        let config: NeoConfig = toml::from_str("[routing]\nmulti_match = \"primary\"\n").unwrap();
        assert_eq!(config.routing.multi_match, MultiMatchPolicy::Primary);
    }
}
