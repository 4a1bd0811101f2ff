//! Endpoint for retrieving one asset by IRI.

use common::asset_details::AssetDetails;

use crate::catalog_utils::catalog_client::{CatalogClient, get_catalog_client};

pub const ASSET_BY_IRI_ENDPOINT: &str = "/semantic-assets/by-iri";

pub async fn get_asset_details(asset_iri: String) -> anyhow::Result<AssetDetails> {
    let client = get_catalog_client()?;
    get_asset_details_with(client, &asset_iri).await
}

pub async fn get_asset_details_with(client: &CatalogClient, asset_iri: &str) -> anyhow::Result<AssetDetails> {
    if asset_iri.trim().is_empty() {
        anyhow::bail!("Missing asset IRI");
    }
    let params = [("iri", asset_iri.to_string())];
    let details: AssetDetails = client.get_json(ASSET_BY_IRI_ENDPOINT, &params).await?;
    Ok(details)
}
