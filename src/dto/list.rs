//! DTOs shaped for the list templates.

use serde::Serialize;

use crate::domain::page::PaginationMeta;
use crate::dto::table::TableRow;
use crate::pagination::PaginationPlan;

/// Data required to render a list page or its partial.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    pub title: &'static str,
    /// Collection path, also the route prefix of the page.
    pub path: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
    pub pagination: PaginationPlan,
    pub meta: PaginationMeta,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Message drawn instead of the table when there are no rows.
    pub empty_message: Option<String>,
}
