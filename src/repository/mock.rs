//! Mock endpoint implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::asset::Asset;
use crate::domain::page::Page;
use crate::domain::types::AssetId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListEndpoint, ListQuery};

mock! {
    pub AssetEndpoint {}

    #[async_trait]
    impl ListEndpoint for AssetEndpoint {
        type Record = Asset;

        async fn fetch_page(&self, query: &ListQuery) -> RepositoryResult<Page<Asset>>;
        async fn delete_record(&self, id: AssetId) -> RepositoryResult<()>;
    }
}
