//! Query parameter builder for the catalog search endpoint.

use common::{search_filter::SearchFilter, vocabulary::theme_uri};

pub const SEARCH_ENDPOINT: &str = "/semantic-assets";

/// Catalog parameters for `filter`: `q`, repeated `type` and `theme`
/// (as authority URIs), `offset` and `limit`.
pub fn build_search_params(filter: &SearchFilter, limit: u64) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(pattern) = filter.pattern.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        params.push(("q", pattern.to_string()));
    }
    for asset_type in filter.types.iter() {
        params.push(("type", asset_type.clone()));
    }
    for theme in filter.themes.iter() {
        params.push(("theme", theme_uri(theme)));
    }
    params.push(("offset", filter.offset.to_string()));
    params.push(("limit", limit.to_string()));

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_filter_only_pages() {
        let params = build_search_params(&SearchFilter::default(), 10);
        assert_eq!(params, vec![("offset", "0".to_string()), ("limit", "10".to_string())]);
    }

    #[test]
    fn every_criterion_is_forwarded() {
        let filter = SearchFilter {
            themes: vec!["AGRI".to_string()],
            ..SearchFilter::from_types(["ONTOLOGY", "SCHEMA"]).with_pattern(Some(" persone ".into()))
        }
        .with_offset(30);

        let params = build_search_params(&filter, 10);

        assert_eq!(
            params,
            vec![
                ("q", "persone".to_string()),
                ("type", "ONTOLOGY".to_string()),
                ("type", "SCHEMA".to_string()),
                ("theme", "http://publications.europa.eu/resource/authority/data-theme/AGRI".to_string()),
                ("offset", "30".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
