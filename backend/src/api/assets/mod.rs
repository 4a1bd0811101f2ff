//! Asset detail endpoints.

mod get_asset_details;
pub use get_asset_details::{get_asset_details, get_asset_details_with};
