//! Client API calls for asset detail endpoints.

use common::asset_details::AssetDetails;
use dioxus::prelude::*;


#[server]
pub async fn get_asset_details(asset_iri: String) -> Result<AssetDetails, ServerFnError> {
    let x = backend::api::assets::get_asset_details(asset_iri).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}
