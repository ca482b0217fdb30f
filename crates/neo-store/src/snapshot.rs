// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serializable copy of every store collection.

use neo_core::NeoError;
use neo_core::model::{
    AppNotification, Area, Asset, ChatChannel, ChatMessage, Group, PlannedTask, SystemMessage,
    Task, User,
};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the store, detached from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
    pub areas: Vec<Area>,
    pub tasks: Vec<Task>,
    pub planned_tasks: Vec<PlannedTask>,
    pub assets: Vec<Asset>,
    pub channels: Vec<ChatChannel>,
    pub messages: Vec<ChatMessage>,
    pub system_messages: Vec<SystemMessage>,
    pub notifications: Vec<AppNotification>,
}

impl StoreSnapshot {
    pub fn to_json(&self) -> Result<String, NeoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, NeoError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use neo_core::model::{Group, User};

    use super::*;

    #[test]
    fn json_round_trip_preserves_collections() {
        let snapshot = StoreSnapshot {
            users: vec![User::new("u1", "Sara", "sara@neo.test")],
            groups: vec![Group::new("g1", "Electrical", "#f59e0b")],
            ..StoreSnapshot::default()
        };
        let json = snapshot.to_json().unwrap();
        assert_eq!(StoreSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot = StoreSnapshot::from_json("{\"users\": []}").unwrap();
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = StoreSnapshot::from_json("[").unwrap_err();
        assert!(matches!(err, NeoError::Serialization { .. }));
    }
}
