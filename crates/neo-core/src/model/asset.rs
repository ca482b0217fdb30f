// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asset register entries with their maintenance and document logs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{AssetId, TaskId, Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Criticality {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaintenanceKind {
    Repair,
    Inspection,
    /// Planned preventive maintenance.
    Pm,
    Replacement,
}

/// One entry of an asset's maintenance log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub date: Timestamp,
    pub kind: MaintenanceKind,
    pub description: String,
    pub cost: f64,
    pub technician: String,
    pub task_id: Option<TaskId>,
    pub downtime_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Manual,
    Warranty,
    Certificate,
    Invoice,
    Inspection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FileType {
    Pdf,
    Img,
    Doc,
}

/// Metadata for a document attached to an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDocument {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded_at: Timestamp,
    pub file_type: FileType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub criticality: Criticality,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub qr_code: String,
    pub notes: Option<String>,
    /// Append-only maintenance log, oldest first.
    pub maintenance_history: Vec<MaintenanceRecord>,
    /// Append-only document list, oldest first.
    pub documents: Vec<AssetDocument>,
}

impl Asset {
    pub fn new(id: impl Into<AssetId>, name: impl Into<String>, category: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            qr_code: format!("NEO-{id}"),
            id,
            name: name.into(),
            category: category.into(),
            location: String::new(),
            serial_number: None,
            status: AssetStatus::default(),
            criticality: Criticality::default(),
            model: None,
            manufacturer: None,
            notes: None,
            maintenance_history: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Sum of recorded maintenance costs.
    pub fn total_maintenance_cost(&self) -> f64 {
        self.maintenance_history.iter().map(|r| r.cost).sum()
    }

    pub fn last_maintenance(&self) -> Option<&MaintenanceRecord> {
        self.maintenance_history.iter().max_by_key(|r| r.date)
    }
}

/// Partial update for the descriptive fields of an [`Asset`].
///
/// The maintenance and document logs are not patchable; they only grow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub serial_number: Option<Option<String>>,
    pub status: Option<AssetStatus>,
    pub criticality: Option<Criticality>,
    pub model: Option<Option<String>>,
    pub manufacturer: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl AssetPatch {
    pub fn apply_to(self, asset: &mut Asset) {
        if let Some(name) = self.name {
            asset.name = name;
        }
        if let Some(category) = self.category {
            asset.category = category;
        }
        if let Some(location) = self.location {
            asset.location = location;
        }
        if let Some(serial_number) = self.serial_number {
            asset.serial_number = serial_number;
        }
        if let Some(status) = self.status {
            asset.status = status;
        }
        if let Some(criticality) = self.criticality {
            asset.criticality = criticality;
        }
        if let Some(model) = self.model {
            asset.model = model;
        }
        if let Some(manufacturer) = self.manufacturer {
            asset.manufacturer = manufacturer;
        }
        if let Some(notes) = self.notes {
            asset.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(day: u32, cost: f64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: format!("mr{day}"),
            date: chrono::Utc.with_ymd_and_hms(2026, 1, day, 8, 0, 0).unwrap(),
            kind: MaintenanceKind::Repair,
            description: "seal".into(),
            cost,
            technician: "Ahmed".into(),
            task_id: None,
            downtime_hours: None,
        }
    }

    #[test]
    fn maintenance_totals_and_latest() {
        let mut asset = Asset::new("a1", "Pool pump", "Pumps");
        asset.maintenance_history.push(record(10, 120.0));
        asset.maintenance_history.push(record(3, 80.5));
        assert_eq!(asset.total_maintenance_cost(), 200.5);
        assert_eq!(asset.last_maintenance().map(|r| r.id.as_str()), Some("mr10"));
    }

    #[test]
    fn new_asset_gets_qr_code() {
        let asset = Asset::new("a7", "Chiller 2", "HVAC");
        assert_eq!(asset.qr_code, "NEO-a7");
    }
}
