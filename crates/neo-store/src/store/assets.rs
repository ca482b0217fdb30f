// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asset register. Maintenance and document logs only ever grow.

use neo_core::AssetId;
use neo_core::model::{Asset, AssetDocument, AssetPatch, MaintenanceRecord};
use tracing::debug;

use super::{Store, remove_where};

impl Store {
    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.id == id)
    }

    pub fn add_asset(&mut self, asset: Asset) {
        debug!(asset = %asset.id, "asset added");
        self.assets.push(asset);
    }

    pub fn update_asset(&mut self, id: &AssetId, patch: AssetPatch) -> bool {
        match self.assets.iter_mut().find(|a| &a.id == id) {
            Some(asset) => {
                patch.apply_to(asset);
                true
            }
            None => {
                debug!(asset = %id, "update_asset: unknown id");
                false
            }
        }
    }

    pub fn delete_asset(&mut self, id: &AssetId) -> bool {
        let removed = remove_where(&mut self.assets, |a| &a.id == id);
        if !removed {
            debug!(asset = %id, "delete_asset: unknown id");
        }
        removed
    }

    pub fn record_maintenance(&mut self, id: &AssetId, record: MaintenanceRecord) -> bool {
        match self.assets.iter_mut().find(|a| &a.id == id) {
            Some(asset) => {
                asset.maintenance_history.push(record);
                true
            }
            None => {
                debug!(asset = %id, "record_maintenance: unknown id");
                false
            }
        }
    }

    pub fn attach_asset_document(&mut self, id: &AssetId, document: AssetDocument) -> bool {
        match self.assets.iter_mut().find(|a| &a.id == id) {
            Some(asset) => {
                asset.documents.push(document);
                true
            }
            None => {
                debug!(asset = %id, "attach_asset_document: unknown id");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use neo_core::model::{AssetStatus, DocumentKind, FileType, MaintenanceKind};

    use super::*;

    fn record(id: &str, cost: f64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: id.into(),
            date: Utc.with_ymd_and_hms(2026, 2, 14, 10, 0, 0).unwrap(),
            kind: MaintenanceKind::Inspection,
            description: "Quarterly inspection".into(),
            cost,
            technician: "Khalid".into(),
            task_id: None,
            downtime_hours: Some(1.5),
        }
    }

    #[test]
    fn logs_append_in_order() {
        let mut store = Store::new("u1");
        store.add_asset(Asset::new("a1", "Fire pump", "Fire Safety"));
        assert!(store.record_maintenance(&"a1".into(), record("mr1", 50.0)));
        assert!(store.record_maintenance(&"a1".into(), record("mr2", 75.0)));
        assert!(store.attach_asset_document(
            &"a1".into(),
            AssetDocument {
                id: "d1".into(),
                name: "Pump manual".into(),
                kind: DocumentKind::Manual,
                uploaded_at: Utc.with_ymd_and_hms(2026, 1, 3, 9, 0, 0).unwrap(),
                file_type: FileType::Pdf,
            },
        ));

        let asset = store.asset(&"a1".into()).unwrap();
        let ids: Vec<&str> = asset.maintenance_history.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["mr1", "mr2"]);
        assert_eq!(asset.total_maintenance_cost(), 125.0);
        assert_eq!(asset.documents.len(), 1);
    }

    #[test]
    fn patch_leaves_logs_alone() {
        let mut store = Store::new("u1");
        store.add_asset(Asset::new("a1", "Chiller", "HVAC"));
        store.record_maintenance(&"a1".into(), record("mr1", 10.0));
        store.update_asset(
            &"a1".into(),
            AssetPatch {
                status: Some(AssetStatus::Maintenance),
                ..AssetPatch::default()
            },
        );
        let asset = store.asset(&"a1".into()).unwrap();
        assert_eq!(asset.status, AssetStatus::Maintenance);
        assert_eq!(asset.maintenance_history.len(), 1);
    }

    #[test]
    fn unknown_asset_is_noop() {
        let mut store = Store::new("u1");
        assert!(!store.record_maintenance(&"a9".into(), record("mr1", 1.0)));
        assert!(!store.delete_asset(&"a9".into()));
    }
}
