//! Detail record of a single semantic asset.

use serde::{Deserialize, Serialize};

use crate::search_result::NodeSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetDetails {
    pub asset_iri: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub title: String,
    pub description: String,
    pub themes: Vec<String>,
    pub rights_holder: Option<NodeSummary>,
    pub modified_on: Option<String>,
    pub issued_on: Option<String>,
    pub version_info: Option<String>,
    pub keywords: Vec<String>,
    pub languages: Vec<String>,
    pub publishers: Vec<NodeSummary>,
    pub creators: Vec<NodeSummary>,
    pub contact_point: Option<NodeSummary>,
    pub accrual_periodicity: Option<String>,
    pub conforms_to: Vec<NodeSummary>,
    pub distributions: Vec<Distribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Distribution {
    pub download_url: String,
    pub access_url: Option<String>,
}
