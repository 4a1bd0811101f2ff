//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_filter;
pub mod filter_codec;
pub mod vocabulary;
pub mod search_result;
pub mod asset_details;
pub mod pagination;
pub mod search_view;
pub mod search_controller;
