//! Flattening of inventory records into table rows.

use serde::Serialize;

use crate::domain::Resource;
use crate::domain::asset::{Asset, AssetCondition, AssetStatus};
use crate::domain::category::Category;
use crate::domain::location::Location;
use crate::domain::maintenance::{MaintenanceKind, MaintenanceRecord, MaintenanceStatus};

/// Display attributes of an enumerated value.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    /// Colour family understood by the stylesheet.
    pub tone: &'static str,
}

const fn badge(label: &'static str, tone: &'static str) -> Badge {
    Badge { label, tone }
}

impl AssetStatus {
    pub const fn badge(self) -> Badge {
        match self {
            AssetStatus::Available => badge("Available", "success"),
            AssetStatus::InUse => badge("In use", "primary"),
            AssetStatus::UnderMaintenance => badge("Under maintenance", "warning"),
            AssetStatus::Retired => badge("Retired", "secondary"),
            AssetStatus::Unknown => badge("Unknown", "light"),
        }
    }
}

impl AssetCondition {
    pub const fn badge(self) -> Badge {
        match self {
            AssetCondition::New => badge("New", "success"),
            AssetCondition::Good => badge("Good", "primary"),
            AssetCondition::Fair => badge("Fair", "info"),
            AssetCondition::Poor => badge("Poor", "warning"),
            AssetCondition::Damaged => badge("Damaged", "danger"),
            AssetCondition::Unknown => badge("Unknown", "light"),
        }
    }
}

impl MaintenanceStatus {
    pub const fn badge(self) -> Badge {
        match self {
            MaintenanceStatus::Scheduled => badge("Scheduled", "info"),
            MaintenanceStatus::InProgress => badge("In progress", "warning"),
            MaintenanceStatus::Completed => badge("Completed", "success"),
            MaintenanceStatus::Cancelled => badge("Cancelled", "secondary"),
            MaintenanceStatus::Unknown => badge("Unknown", "light"),
        }
    }
}

impl MaintenanceKind {
    pub const fn label(self) -> &'static str {
        match self {
            MaintenanceKind::Preventive => "Preventive",
            MaintenanceKind::Corrective => "Corrective",
            MaintenanceKind::Inspection => "Inspection",
            MaintenanceKind::Unknown => "Other",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Cell {
    pub text: String,
    pub badge: Option<Badge>,
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            badge: None,
        }
    }

    fn optional(value: Option<impl Into<String>>) -> Self {
        Self::text(value.map(Into::into).unwrap_or_else(|| "—".to_string()))
    }

    fn badge(badge: Badge) -> Self {
        Self {
            text: badge.label.to_string(),
            badge: Some(badge),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

/// A record that can be shown as a row of its list table.
pub trait Tabular: Resource {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;

    fn table_row(&self) -> TableRow {
        TableRow {
            id: self.id().to_string(),
            cells: self.cells(),
        }
    }
}

fn money(value: Option<f64>) -> Cell {
    Cell::optional(value.map(|amount| format!("{amount:.2}")))
}

impl Tabular for Asset {
    const COLUMNS: &'static [&'static str] = &[
        "Tag", "Name", "Category", "Location", "Status", "Condition", "Purchased", "Cost",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.asset_tag),
            Cell::text(&self.name),
            Cell::optional(self.category.as_ref().map(|c| c.name.as_str())),
            Cell::optional(self.location.as_ref().map(|l| l.name.as_str())),
            Cell::badge(self.status.badge()),
            Cell::badge(self.condition.badge()),
            Cell::optional(self.purchase_date.map(|d| d.format("%Y-%m-%d").to_string())),
            money(self.purchase_cost),
        ]
    }
}

impl Tabular for Category {
    const COLUMNS: &'static [&'static str] = &["Name", "Description", "Assets"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::optional(self.description.as_deref()),
            Cell::text(self.assets_count.to_string()),
        ]
    }
}

impl Tabular for Location {
    const COLUMNS: &'static [&'static str] = &["Name", "Address", "Description", "Assets"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::optional(self.address.as_deref()),
            Cell::optional(self.description.as_deref()),
            Cell::text(self.assets_count.to_string()),
        ]
    }
}

impl Tabular for MaintenanceRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Asset",
        "Type",
        "Status",
        "Scheduled",
        "Completed",
        "Cost",
    ];

    fn cells(&self) -> Vec<Cell> {
        let asset = self
            .asset_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.asset_id));
        vec![
            Cell::text(asset),
            Cell::text(self.kind.label()),
            Cell::badge(self.status.badge()),
            Cell::text(self.scheduled_date.format("%Y-%m-%d").to_string()),
            Cell::optional(self.completed_date.map(|d| d.format("%Y-%m-%d").to_string())),
            money(self.cost),
        ]
    }
}
