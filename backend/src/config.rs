//! Catalog API settings, read once from the environment.

use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://schema.gov.it/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the catalog REST API, without trailing slash.
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Reads `SCHEMA_API_URL` and `SCHEMA_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_url = lookup("SCHEMA_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let request_timeout = match lookup("SCHEMA_API_TIMEOUT_SECS") {
            None => defaults.request_timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("Ignoring invalid SCHEMA_API_TIMEOUT_SECS={raw:?}, using {DEFAULT_TIMEOUT_SECS}s");
                    defaults.request_timeout
                }
            },
        };

        Self { api_url, request_timeout }
    }
}

pub fn catalog_config() -> &'static CatalogConfig {
    static CONFIG: OnceLock<CatalogConfig> = OnceLock::new();
    CONFIG.get_or_init(CatalogConfig::from_env)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(CatalogConfig::from_lookup(lookup(&[])), CatalogConfig::default());
    }

    #[test]
    fn url_is_trimmed_of_trailing_slash() {
        let config = CatalogConfig::from_lookup(lookup(&[("SCHEMA_API_URL", "http://localhost:8080/api/ ")]));
        assert_eq!(config.api_url, "http://localhost:8080/api");
    }

    #[test]
    fn invalid_timeout_keeps_the_default() {
        for raw in ["0", "soon", "-5"] {
            let config = CatalogConfig::from_lookup(lookup(&[("SCHEMA_API_TIMEOUT_SECS", raw)]));
            assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }
        let config = CatalogConfig::from_lookup(lookup(&[("SCHEMA_API_TIMEOUT_SECS", "5")]));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
