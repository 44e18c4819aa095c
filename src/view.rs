//! State of one list screen.
//!
//! A [`ListView`] owns the page on display, the search box and the transient
//! notifications raised by fetches and deletes. Results of remote calls are
//! applied through [`ListView::apply_fetch`] and [`ListView::apply_delete`];
//! nothing else mutates the displayed records.

use std::fmt::Display;

use serde::Serialize;

use crate::domain::Resource;
use crate::domain::page::{Page, PageLink, PaginationMeta};
use crate::pagination::{self, PaginationPlan};
use crate::search::{FetchRequest, SKELETON_ROWS, SearchController};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Error,
}

/// Transient message shown to the user once.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub level: AlertLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            message: message.into(),
        }
    }
}

/// What the table body shows.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, T> {
    /// A fetch is running; draw this many placeholder rows.
    Skeleton(usize),
    /// Nothing matched; `filter` is the search that produced the empty page.
    Empty { filter: Option<&'a str> },
    Rows(&'a [T]),
}

#[derive(Clone, Debug, Serialize)]
pub struct ListView<T> {
    records: Vec<T>,
    meta: PaginationMeta,
    links: Vec<PageLink>,
    search: SearchController,
    notifications: Vec<Notification>,
    scroll_offset: u32,
}

impl<T: Resource> ListView<T> {
    /// Mounts the view on a server-rendered page.
    pub fn new(page: Page<T>, initial_query: Option<&str>) -> Self {
        Self {
            records: page.data,
            meta: page.meta,
            links: page.links,
            search: SearchController::new(initial_query),
            notifications: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchController {
        &mut self.search
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    pub fn body(&self) -> TableBody<'_, T> {
        if self.search.is_searching() {
            TableBody::Skeleton(SKELETON_ROWS)
        } else if self.records.is_empty() {
            TableBody::Empty {
                filter: self.search.applied_filter(),
            }
        } else {
            TableBody::Rows(&self.records)
        }
    }

    pub fn pagination(&self) -> PaginationPlan {
        pagination::plan(&self.links, self.meta.current_page, self.meta.last_page)
    }

    /// Applies the outcome of a list fetch.
    ///
    /// A successful response replaces records, metadata and links; scroll
    /// offset and other view-local state stay as they are. A failure keeps the
    /// current page on screen.
    pub fn apply_fetch<E: Display>(&mut self, request: &FetchRequest, result: Result<Page<T>, E>) {
        match result {
            Ok(page) => {
                if !page.meta.is_consistent() {
                    log::warn!("List fetch {:?} returned inconsistent metadata", request.id);
                }
                self.records = page.data;
                self.meta = page.meta;
                self.links = page.links;
                self.search.on_fetch_complete(request, true);
            }
            Err(err) => {
                log::error!("Failed to fetch {}: {err}", T::PATH);
                self.notifications.push(Notification::error(format!(
                    "Failed to load {}.",
                    T::TITLE.to_lowercase()
                )));
                self.search.on_fetch_complete(request, false);
            }
        }
    }

    /// Applies the outcome of a delete call for `id`.
    pub fn apply_delete<E: Display>(&mut self, id: T::Id, result: Result<(), E>) {
        match result {
            Ok(()) => {
                let before = self.records.len();
                self.records.retain(|record| record.id() != id);
                let removed = (before - self.records.len()) as u64;

                self.meta.total = self.meta.total.saturating_sub(removed);
                if self.records.is_empty() {
                    self.meta.from = None;
                    self.meta.to = None;
                } else {
                    self.meta.to = self.meta.to.map(|to| to.saturating_sub(removed));
                }

                self.notifications
                    .push(Notification::success(format!("{} deleted.", T::SINGULAR)));
            }
            Err(err) => {
                log::error!("Failed to delete {} {id}: {err}", T::SINGULAR);
                self.notifications.push(Notification::error(format!(
                    "Failed to delete {}: {err}",
                    T::SINGULAR.to_lowercase()
                )));
            }
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hands the pending notifications over to the caller.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
