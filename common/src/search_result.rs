//! Search result models, in the JSON shape of the catalog API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    #[serde(rename = "data", default)]
    pub items: Vec<SearchResultEntry>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_count: u64,
}

impl SearchResultPage {
    pub fn empty() -> Self {
        Self { items: Vec::new(), offset: 0, total_count: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultEntry {
    pub asset_iri: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub title: String,
    pub description: String,
    pub themes: Vec<String>,
    pub rights_holder: Option<NodeSummary>,
    pub modified_on: Option<String>,
    pub version_info: Option<String>,
}

/// Reference to an external node (organization, person): an IRI that is
/// never dereferenced, and a label to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NodeSummary {
    pub iri: String,
    pub summary: String,
}
