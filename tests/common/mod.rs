#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use asset_inventory::domain::asset::{Asset, AssetCondition, AssetStatus, Related};
use asset_inventory::domain::page::{Page, PageLink, PaginationMeta};
use asset_inventory::domain::types::AssetId;
use asset_inventory::repository::errors::{RepositoryError, RepositoryResult};
use asset_inventory::repository::{ListEndpoint, ListQuery, SharedEndpoint};

pub const PER_PAGE: u32 = 15;

pub fn asset(id: i64, name: &str) -> Asset {
    Asset {
        id: AssetId::new(id).unwrap(),
        name: name.to_string(),
        asset_tag: format!("AST-{id:04}"),
        serial_number: None,
        category: Some(Related {
            id: 1,
            name: "Computers".to_string(),
        }),
        location: None,
        status: AssetStatus::Available,
        condition: AssetCondition::Good,
        purchase_date: None,
        purchase_cost: Some(1299.0),
        maintenance_count: 0,
    }
}

/// Assets named "Asset 1" to "Asset `count`".
pub fn numbered_assets(count: i64) -> Vec<Asset> {
    (1..=count).map(|id| asset(id, &format!("Asset {id}"))).collect()
}

/// Builds the page the API would return for `data` sliced at `page`.
pub fn paginate(data: &[Asset], page: u32, per_page: u32) -> Page<Asset> {
    let total = data.len() as u64;
    let last_page = (data.len() as u32).div_ceil(per_page).max(1);
    let current_page = page.clamp(1, last_page);
    let start = ((current_page - 1) * per_page) as usize;
    let slice: Vec<Asset> = data
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    let url = |page: u32| Some(format!("http://api.test/assets?page={page}"));
    let mut links = vec![PageLink::new(
        (current_page > 1).then(|| url(current_page - 1)).flatten(),
        "&laquo; Previous",
        false,
    )];
    links.extend(
        (1..=last_page).map(|page| PageLink::new(url(page), page.to_string(), page == current_page)),
    );
    links.push(PageLink::new(
        (current_page < last_page).then(|| url(current_page + 1)).flatten(),
        "Next &raquo;",
        false,
    ));

    let (from, to) = if slice.is_empty() {
        (None, None)
    } else {
        (Some(start as u64 + 1), Some((start + slice.len()) as u64))
    };

    Page {
        data: slice,
        links,
        meta: PaginationMeta {
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
        },
    }
}

/// In-memory asset collection standing in for the inventory API.
#[derive(Default)]
pub struct FakeAssets {
    records: Mutex<Vec<Asset>>,
    queries: Mutex<Vec<ListQuery>>,
    deletes: Mutex<Vec<AssetId>>,
    rejected: HashSet<i64>,
    latency: Duration,
    failing: bool,
}

impl FakeAssets {
    pub fn new(records: Vec<Asset>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// Every call takes `latency` of (tokio) time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fetches fail with a connection error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Deleting `id` is refused by the server.
    pub fn rejecting(mut self, id: i64) -> Self {
        self.rejected.insert(id);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<Option<String>> {
        self.queries().into_iter().map(|query| query.search).collect()
    }

    pub fn deletes(&self) -> Vec<AssetId> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListEndpoint for FakeAssets {
    type Record = Asset;

    async fn fetch_page(&self, query: &ListQuery) -> RepositoryResult<Page<Asset>> {
        self.queries.lock().unwrap().push(query.clone());
        tokio::time::sleep(self.latency).await;

        if self.failing {
            return Err(RepositoryError::ConnectionError("connection refused".to_string()));
        }

        let records = self.records.lock().unwrap();
        let matching: Vec<Asset> = match &query.search {
            Some(term) => {
                let term = term.to_lowercase();
                records
                    .iter()
                    .filter(|asset| asset.name.to_lowercase().contains(&term))
                    .cloned()
                    .collect()
            }
            None => records.clone(),
        };

        Ok(paginate(
            &matching,
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(PER_PAGE),
        ))
    }

    async fn delete_record(&self, id: AssetId) -> RepositoryResult<()> {
        self.deletes.lock().unwrap().push(id);
        tokio::time::sleep(self.latency).await;

        if self.rejected.contains(&id.get()) {
            return Err(RepositoryError::Rejected {
                status: 409,
                message: "asset is assigned".to_string(),
            });
        }

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|asset| asset.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub fn shared_endpoint(fake: &Arc<FakeAssets>) -> SharedEndpoint<Asset> {
    fake.clone()
}
