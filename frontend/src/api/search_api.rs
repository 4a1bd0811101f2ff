//! Client API calls for search endpoints.

use common::{search_filter::SearchFilter, search_result::SearchResultPage};
use dioxus::prelude::*;




#[server]
pub async fn search_assets(filter: SearchFilter) -> Result<SearchResultPage, ServerFnError> {
    let x = backend::api::search::search_assets(filter).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}
