use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::CategoryId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of assets filed under the category.
    #[serde(default)]
    pub assets_count: u64,
}

impl Resource for Category {
    type Id = CategoryId;

    const PATH: &'static str = "categories";
    const TITLE: &'static str = "Categories";
    const SINGULAR: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }
}
