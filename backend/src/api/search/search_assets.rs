//! Search endpoint for result pages.

use common::{search_const::PAGE_SIZE, search_filter::SearchFilter, search_result::SearchResultPage};

use crate::api::search::search_params::{SEARCH_ENDPOINT, build_search_params};
use crate::catalog_utils::catalog_client::{CatalogClient, get_catalog_client};

pub async fn search_assets(filter: SearchFilter) -> anyhow::Result<SearchResultPage> {
    let client = get_catalog_client()?;
    search_assets_with(client, &filter).await
}

pub async fn search_assets_with(client: &CatalogClient, filter: &SearchFilter) -> anyhow::Result<SearchResultPage> {
    let params = build_search_params(filter, PAGE_SIZE);
    let page: SearchResultPage = client.get_json(SEARCH_ENDPOINT, &params).await?;
    tracing::info!(
        "SEARCH: {} of {} results from offset {}",
        page.items.len(),
        page.total_count,
        page.offset
    );
    Ok(page)
}
