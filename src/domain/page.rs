//! Paginated list payload returned by the inventory API.

use serde::{Deserialize, Serialize};

/// A single entry of the page link sequence.
///
/// The first and last links of a sequence are the previous/next controls; the
/// ones in between carry page numbers as their labels.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLink {
    /// Target of the link, absent for disabled edges.
    #[serde(default)]
    pub url: Option<String>,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

impl PageLink {
    pub fn new(url: Option<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            url,
            label: label.into(),
            active,
        }
    }
}

/// Counters describing the window of records contained in a page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    /// One-based position of the first record on the page, absent when empty.
    #[serde(default)]
    pub from: Option<u64>,
    /// One-based position of the last record on the page, absent when empty.
    #[serde(default)]
    pub to: Option<u64>,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
            from: None,
            to: None,
        }
    }
}

impl PaginationMeta {
    /// Checks the window invariants the API is expected to honour.
    pub fn is_consistent(&self) -> bool {
        if self.total > 0 && !(1 <= self.current_page && self.current_page <= self.last_page) {
            return false;
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to && to <= self.total,
            (None, None) => true,
            _ => false,
        }
    }
}

/// One page of records together with its metadata and link sequence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(flatten)]
    pub meta: PaginationMeta,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            links: Vec::new(),
            meta: PaginationMeta::default(),
        }
    }
}
