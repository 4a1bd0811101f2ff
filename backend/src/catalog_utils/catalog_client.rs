use std::sync::OnceLock;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::config::{CatalogConfig, catalog_config};

/// HTTP client bound to one catalog API base URL.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build catalog HTTP client")?;
        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` with the given query pairs and decodes the JSON body.
    /// Repeated keys are sent as repeated parameters.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("CATALOG REQUEST: {} {:?}", url, params);
        let t0 = std::time::Instant::now();

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis();
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("CATALOG ERROR: {} {} ({}ms)", url, status, dt_ms);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::info!("CATALOG RESPONSE: {} len = {} ({}ms)", url, response_txt.len(), dt_ms);

        let response: T = serde_json::from_str(&response_txt)
            .with_context(|| format!("Invalid JSON from catalog at {}", url))?;
        Ok(response)
    }
}

/// Process-wide client built from [`catalog_config`].
pub fn get_catalog_client() -> anyhow::Result<&'static CatalogClient> {
    static CLIENT: OnceLock<CatalogClient> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = CatalogClient::new(catalog_config())?;
    Ok(CLIENT.get_or_init(|| client))
}
