pub mod asset_api;
pub mod search_api;
