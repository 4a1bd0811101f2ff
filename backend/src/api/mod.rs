//! Catalog operations exposed to the frontend server functions.

pub mod assets;
pub mod search;
