//! reqwest-backed implementation of [`ListEndpoint`].

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::domain::Resource;
use crate::domain::page::Page;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ListEndpoint, ListQuery};

/// Configuration for the inventory API client
#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    /// Base URL the collection paths are appended to, e.g. `http://host/api`
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}

/// HTTP client shared by all collection endpoints.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Builds an endpoint for the collection holding `T` records.
    pub fn endpoint<T: Resource>(self: &Arc<Self>) -> HttpEndpoint<T> {
        HttpEndpoint {
            api: Arc::clone(self),
            _record: PhantomData,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetches one page of the collection at `path`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> RepositoryResult<Page<T>> {
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json::<Page<T>>().await?)
    }

    /// Deletes the resource at `path`.
    pub async fn delete(&self, path: &str) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> RepositoryResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("Request failed with status {status}: {body}");
        Err(RepositoryError::from_status(status, body))
    }
}

/// Endpoint of the collection holding `T` records.
pub struct HttpEndpoint<T> {
    api: Arc<ApiClient>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Resource> ListEndpoint for HttpEndpoint<T> {
    type Record = T;

    async fn fetch_page(&self, query: &ListQuery) -> RepositoryResult<Page<T>> {
        let page = self.api.get_page::<T>(T::PATH, query).await?;
        if !page.meta.is_consistent() {
            log::warn!(
                "Inconsistent pagination metadata from {}: {:?}",
                T::PATH,
                page.meta
            );
        }
        Ok(page)
    }

    async fn delete_record(&self, id: T::Id) -> RepositoryResult<()> {
        self.api.delete(&format!("{}/{id}", T::PATH)).await
    }
}
