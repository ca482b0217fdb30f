// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-device preferences stored next to, but outside of, the workspace store.
//!
//! The file is a JSON object. The channel mute set lives under
//! [`MUTED_KEY`] as an array of channel ids; other keys are kept as found
//! so the file can be shared with other tools.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use neo_core::{ChannelId, NeoError};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Key of the muted-channel array in the preferences file.
pub const MUTED_KEY: &str = "neo_muted";

fn prefs_error(message: impl Into<String>, source: io::Error) -> NeoError {
    NeoError::Preferences {
        message: message.into(),
        source: Some(Box::new(source)),
    }
}

/// Loaded preferences bound to the file they came from.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: Map<String, Value>,
    muted: BTreeSet<ChannelId>,
}

impl Preferences {
    /// Read preferences from `path`.
    ///
    /// A missing file yields empty preferences. A file that is not a JSON
    /// object, or whose mute entry is not an array of strings, is treated
    /// the same way and logged; only I/O failures are errors.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NeoError> {
        let path = path.into();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, starting empty");
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(prefs_error(
                    format!("failed to read {}", path.display()),
                    e,
                ));
            }
        };

        let values = match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            _ => {
                warn!(path = %path.display(), "preferences file is not a JSON object, ignoring it");
                return Ok(Self::empty(path));
            }
        };
        let muted = parse_muted(values.get(MUTED_KEY)).unwrap_or_else(|| {
            warn!(path = %path.display(), key = MUTED_KEY, "malformed mute list, ignoring it");
            BTreeSet::new()
        });

        Ok(Self {
            path,
            values,
            muted,
        })
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            values: Map::new(),
            muted: BTreeSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn muted(&self) -> &BTreeSet<ChannelId> {
        &self.muted
    }

    pub fn is_muted(&self, channel: &ChannelId) -> bool {
        self.muted.contains(channel)
    }

    /// Flip the mute state of `channel` and write the file.
    ///
    /// Returns whether the channel is muted afterwards. If the write
    /// fails the in-memory state is rolled back.
    pub fn toggle_mute(&mut self, channel: &ChannelId) -> Result<bool, NeoError> {
        let now_muted = if self.muted.remove(channel) {
            false
        } else {
            self.muted.insert(channel.clone());
            true
        };
        if let Err(e) = self.save() {
            if now_muted {
                self.muted.remove(channel);
            } else {
                self.muted.insert(channel.clone());
            }
            return Err(e);
        }
        debug!(channel = %channel, muted = now_muted, "mute toggled");
        Ok(now_muted)
    }

    /// Write the file atomically, creating its directory if needed.
    pub fn save(&self) -> Result<(), NeoError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .map_err(|e| prefs_error(format!("failed to create {}", dir.display()), e))?;

        let mut values = self.values.clone();
        values.insert(
            MUTED_KEY.to_string(),
            Value::Array(
                self.muted
                    .iter()
                    .map(|id| Value::String(id.to_string()))
                    .collect(),
            ),
        );
        let json = serde_json::to_string_pretty(&Value::Object(values))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| prefs_error("failed to create temporary preferences file", e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| prefs_error("failed to write preferences", e))?;
        tmp.persist(&self.path)
            .map_err(|e| prefs_error(format!("failed to replace {}", self.path.display()), e.error))?;
        Ok(())
    }
}

fn parse_muted(value: Option<&Value>) -> Option<BTreeSet<ChannelId>> {
    let Some(value) = value else {
        return Some(BTreeSet::new());
    };
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(ChannelId::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_list_must_be_strings() {
        assert!(parse_muted(Some(&serde_json::json!(["ch1", 2]))).is_none());
        assert!(parse_muted(Some(&serde_json::json!("ch1"))).is_none());
        let ok = parse_muted(Some(&serde_json::json!(["ch2", "ch1"]))).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(parse_muted(None).unwrap().is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("nope.json")).unwrap();
        assert!(prefs.muted().is_empty());
    }
}
