// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./neo.toml` > `~/.config/neo/neo.toml` > `/etc/neo/neo.toml`
//! with environment variable overrides via `NEO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NeoConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/neo/neo.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "neo.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/neo/neo.toml` (system-wide)
/// 3. `~/.config/neo/neo.toml` (user XDG config)
/// 4. `./neo.toml` (local directory)
/// 5. `NEO_*` environment variables
pub fn load_config() -> Result<NeoConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<NeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Path of the per-user config file, if a config directory exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("neo/neo.toml"))
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(NeoConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `NEO_CHAT_TYPING_DELAY_MS` must map to `chat.typing_delay_ms`,
/// not `chat.typing.delay.ms`.
fn env_provider() -> Env {
    Env::prefixed("NEO_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("console_", "console.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("chat_", "chat.", 1)
            .replacen("preferences_", "preferences.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_maps_to_nested_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NEO_CHAT_TYPING_DELAY_MS", "250");
            jail.set_env("NEO_CONSOLE_CURRENT_USER_ID", "u7");
            let config: NeoConfig = Figment::new()
                .merge(Serialized::defaults(NeoConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.chat.typing_delay_ms, 250);
            assert_eq!(config.console.current_user_id, "u7");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_PATH, "[console]\nname = \"site-a\"\n")?;
            let config = load_config_from_path(Path::new(LOCAL_CONFIG_PATH))?;
            assert_eq!(config.console.name, "site-a");
            Ok(())
        });
    }
}
