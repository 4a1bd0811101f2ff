//! Mapping between [`SearchFilter`] and the search page query string.
//!
//! Multi-valued fields are written as repeated keys (`types=A&types=B`).
//! Parameters are emitted in a fixed order and defaults are left out, so
//! equal filters always produce the same string.

use crate::search_const::SEARCH_PATH;
use crate::search_filter::SearchFilter;

const TYPES: &str = "types";
const PATTERN: &str = "pattern";
const THEMES: &str = "themes";
const OFFSET: &str = "offset";

/// Parses a query string, with or without the leading `?`.
///
/// Unknown parameters are ignored. Missing or malformed values fall back to
/// the filter defaults; decoding never fails.
pub fn decode(query: &str) -> SearchFilter {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filter = SearchFilter::default();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(key) = decode_component(key) else { continue };
        let Some(value) = decode_component(value) else {
            tracing::debug!("skipping undecodable query value for {key}");
            continue;
        };
        match key.as_str() {
            TYPES if !value.is_empty() => {
                filter.types.insert(value);
            }
            THEMES if !value.is_empty() => filter.themes.push(value),
            PATTERN => filter.pattern = Some(value),
            OFFSET => filter.offset = value.parse().unwrap_or(0),
            _ => {}
        }
    }
    filter
}

/// Serializes a filter without the leading `?`. The default filter encodes
/// to an empty string.
pub fn encode(filter: &SearchFilter) -> String {
    let mut pairs = Vec::new();
    for code in filter.types.iter().filter(|c| !c.is_empty()) {
        pairs.push(pair(TYPES, code));
    }
    if let Some(pattern) = &filter.pattern {
        pairs.push(pair(PATTERN, pattern));
    }
    for code in filter.themes.iter().filter(|c| !c.is_empty()) {
        pairs.push(pair(THEMES, code));
    }
    if filter.offset != 0 {
        pairs.push(format!("{OFFSET}={}", filter.offset));
    }
    pairs.join("&")
}

/// Path and query of the search page showing `filter`.
pub fn search_url(filter: &SearchFilter) -> String {
    let query = encode(filter);
    if query.is_empty() {
        SEARCH_PATH.to_string()
    } else {
        format!("{SEARCH_PATH}?{query}")
    }
}

/// The query part of a path, or the whole input when it has no `?`.
pub fn query_of(url: &str) -> &str {
    match url.split_once('?') {
        Some((_, query)) => query.split('#').next().unwrap_or(""),
        None if url.starts_with('/') => "",
        None => url,
    }
}

fn pair(key: &str, value: &str) -> String {
    format!("{key}={}", urlencoding::encode(value))
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|v| v.into_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn sample() -> SearchFilter {
        SearchFilter {
            types: BTreeSet::from(["ONTOLOGY".to_string(), "CONTROLLED_VOCABULARY".to_string()]),
            pattern: Some("città & comuni=1+2".to_string()),
            themes: vec![
                "http://publications.europa.eu/resource/authority/data-theme/TRAN".to_string(),
                "AGRI".to_string(),
            ],
            offset: 20,
        }
    }

    #[test]
    fn round_trip_keeps_every_field() {
        let filters = [
            SearchFilter::default(),
            sample(),
            SearchFilter::from_pattern("abc"),
            SearchFilter { pattern: Some(String::new()), ..SearchFilter::default() },
            SearchFilter::from_themes(["SOCI", "AGRI", "ECON"]).with_offset(7),
        ];
        for filter in filters {
            assert_eq!(decode(&encode(&filter)), filter, "encoded as {:?}", encode(&filter));
        }
    }

    #[test]
    fn default_filter_encodes_to_nothing() {
        assert_eq!(encode(&SearchFilter::default()), "");
        assert_eq!(search_url(&SearchFilter::default()), "/search");
    }

    #[test]
    fn encoding_is_canonical() {
        let a = SearchFilter::from_types(["SCHEMA", "ONTOLOGY"]);
        let b = SearchFilter::from_types(["ONTOLOGY", "SCHEMA"]);
        assert_eq!(encode(&a), encode(&b));
        assert_eq!(encode(&a), "types=ONTOLOGY&types=SCHEMA");
    }

    #[test]
    fn theme_order_is_preserved() {
        let filter = SearchFilter::from_themes(["TRAN", "AGRI"]);
        assert_eq!(encode(&filter), "themes=TRAN&themes=AGRI");
        assert_eq!(decode("themes=TRAN&themes=AGRI").themes, vec!["TRAN", "AGRI"]);
    }

    #[test]
    fn missing_and_malformed_values_fall_back() {
        let filter = decode("?offset=-3&unknown=1&types=&themes");
        assert_eq!(filter, SearchFilter::default());

        assert_eq!(decode("offset=abc").offset, 0);
        assert_eq!(decode("offset=40").offset, 40);
        assert_eq!(decode("pattern=%FF%FE").pattern, None);
    }

    #[test]
    fn plus_and_escapes_decode_to_text() {
        let filter = decode("pattern=codici+ISTAT%20comuni");
        assert_eq!(filter.pattern.as_deref(), Some("codici ISTAT comuni"));
    }

    #[test]
    fn query_is_extracted_from_paths() {
        assert_eq!(query_of("/search?types=SCHEMA#top"), "types=SCHEMA");
        assert_eq!(query_of("/search"), "");
        assert_eq!(query_of("pattern=abc"), "pattern=abc");
    }
}
