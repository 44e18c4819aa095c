use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::LocationId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of assets stored at the location.
    #[serde(default)]
    pub assets_count: u64,
}

impl Resource for Location {
    type Id = LocationId;

    const PATH: &'static str = "locations";
    const TITLE: &'static str = "Locations";
    const SINGULAR: &'static str = "Location";

    fn id(&self) -> LocationId {
        self.id
    }
}
