//! Search API handlers and module exports.

mod search_assets;
pub use search_assets::{search_assets, search_assets_with};

pub mod search_params;
