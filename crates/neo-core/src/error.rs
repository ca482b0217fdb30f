// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the NEO workspace.
//!
//! Store mutations are total and never return these. They cover the
//! fallible edges around the store: configuration, local preference
//! files, and serialization of snapshots.

use thiserror::Error;

/// The primary error type used across the NEO crates.
#[derive(Debug, Error)]
pub enum NeoError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Local preference file errors (unreadable file, bad permissions).
    #[error("preferences error: {message}")]
    Preferences {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON (de)serialization failure for snapshots or preference values.
    #[error("serialization error: {source}")]
    Serialization {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for NeoError {
    fn from(e: serde_json::Error) -> Self {
        NeoError::Serialization {
            source: Box::new(e),
        }
    }
}
