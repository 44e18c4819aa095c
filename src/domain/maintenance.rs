use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{AssetId, MaintenanceId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Preventive,
    Corrective,
    Inspection,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,
    pub asset_id: AssetId,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(
        rename = "type",
        alias = "maintenance_type",
        alias = "maintanance_type"
    )]
    pub kind: MaintenanceKind,
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for MaintenanceRecord {
    type Id = MaintenanceId;

    const PATH: &'static str = "maintenance";
    const TITLE: &'static str = "Maintenance";
    const SINGULAR: &'static str = "Maintenance record";

    fn id(&self) -> MaintenanceId {
        self.id
    }
}
