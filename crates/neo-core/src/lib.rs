// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the NEO facilities console.
//!
//! This crate provides the entity model shared by every other crate in the
//! workspace: typed identifiers, the user/group/task/asset/chat records,
//! their patch types, the [`Clock`] seam, and the [`NeoError`] type.

pub mod error;
pub mod model;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NeoError;
pub use traits::{Clock, SystemClock};
pub use types::{
    AreaId, AssetId, ChannelId, CommentId, GroupId, MessageId, NotificationId, PlannedTaskId,
    SYSTEM_USER_ID, TaskId, Timestamp, UserId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neo_error_has_all_variants() {
        let _config = NeoError::Config("test".into());
        let _prefs = NeoError::Preferences {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _ser = NeoError::Serialization {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = NeoError::Internal("test".into());
    }

    #[test]
    fn serde_json_errors_convert() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let neo: NeoError = err.into();
        assert!(matches!(neo, NeoError::Serialization { .. }));
        assert!(neo.to_string().starts_with("serialization error"));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
