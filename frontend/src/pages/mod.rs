pub mod asset_details_page;
pub mod explore_page;
pub mod faq_page;
pub mod not_found_page;
pub mod project_page;
pub mod search_page;
