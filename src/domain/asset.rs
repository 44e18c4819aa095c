use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::AssetId;

/// Lifecycle state of an asset.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Available,
    InUse,
    UnderMaintenance,
    Retired,
    #[serde(other)]
    Unknown,
}

/// Physical condition reported for an asset.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetCondition {
    New,
    Good,
    Fair,
    Poor,
    Damaged,
    #[serde(other)]
    Unknown,
}

/// Reference to a related record embedded in a list row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Related {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub asset_tag: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub category: Option<Related>,
    #[serde(default)]
    pub location: Option<Related>,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub purchase_cost: Option<f64>,
    /// Number of maintenance records filed for the asset.
    #[serde(default, alias = "maintanance_count")]
    pub maintenance_count: u64,
}

impl Resource for Asset {
    type Id = AssetId;

    const PATH: &'static str = "assets";
    const TITLE: &'static str = "Assets";
    const SINGULAR: &'static str = "Asset";

    fn id(&self) -> AssetId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_row() {
        let row = r#"{
            "id": 3,
            "name": "ThinkPad T14",
            "asset_tag": "AST-0003",
            "serial_number": null,
            "category": {"id": 1, "name": "Laptops"},
            "status": "in_use",
            "condition": "good",
            "purchase_date": "2024-03-18",
            "maintanance_count": 2
        }"#;

        let asset: Asset = serde_json::from_str(row).unwrap();

        assert_eq!(asset.id.get(), 3);
        assert_eq!(asset.status, AssetStatus::InUse);
        assert_eq!(asset.condition, AssetCondition::Good);
        assert_eq!(asset.category.unwrap().name, "Laptops");
        assert!(asset.location.is_none());
        assert_eq!(asset.maintenance_count, 2);
        assert_eq!(
            asset.purchase_date,
            NaiveDate::from_ymd_opt(2024, 3, 18)
        );
    }

    #[test]
    fn unknown_enumerations_fall_back() {
        let status: AssetStatus = serde_json::from_str(r#""lost""#).unwrap();
        let condition: AssetCondition = serde_json::from_str(r#""mint""#).unwrap();

        assert_eq!(status, AssetStatus::Unknown);
        assert_eq!(condition, AssetCondition::Unknown);
    }
}
