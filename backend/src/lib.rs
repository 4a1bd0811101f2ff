//! Server-side access to the semantic asset catalog API.

pub mod api;
pub mod catalog_utils;
pub mod config;
