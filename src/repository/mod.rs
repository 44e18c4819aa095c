//! Access to the remote inventory API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Resource;
use crate::domain::page::Page;
use crate::repository::errors::RepositoryResult;
use crate::search::normalize_query;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::{ApiClient, ApiClientConfig, HttpEndpoint};

/// Query string accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text filter; blank input leaves the list unfiltered.
    pub fn search(mut self, search: impl AsRef<str>) -> Self {
        self.search = normalize_query(search.as_ref());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

/// List and delete operations of one collection of the inventory API.
#[async_trait]
pub trait ListEndpoint: Send + Sync {
    type Record: Resource;

    async fn fetch_page(&self, query: &ListQuery) -> RepositoryResult<Page<Self::Record>>;

    async fn delete_record(&self, id: <Self::Record as Resource>::Id) -> RepositoryResult<()>;
}

/// Shared handle to the endpoint serving records of type `T`.
pub type SharedEndpoint<T> = Arc<dyn ListEndpoint<Record = T>>;
