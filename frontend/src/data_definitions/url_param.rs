//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common::{filter_codec, search_filter::SearchFilter};


/// Search filter carried in the query string of the search route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterParam(pub SearchFilter);

impl From<SearchFilter> for FilterParam {
    fn from(value: SearchFilter) -> Self {
        FilterParam(value)
    }
}

// The router percent-decodes the query once before handing it over, and
// writes our `Display` output back without escaping `%`. The codec output is
// therefore escaped one more level in `Display`.
impl From<&str> for FilterParam {
    fn from(query: &str) -> Self {
        FilterParam(filter_codec::decode(query))
    }
}

impl Display for FilterParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // codec output only holds unreserved characters, `=`, `&` and `%`
        write!(f, "{}", filter_codec::encode(&self.0).replace('%', "%25"))
    }
}


/// Asset IRI carried as a single path segment. IRIs contain `/` and `#`,
/// so the segment holds the URL-safe base64 of the IRI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetIriParam(pub String);

impl From<String> for AssetIriParam {
    fn from(value: String) -> Self {
        AssetIriParam(value)
    }
}

impl Display for AssetIriParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", URL_SAFE_NO_PAD.encode(self.0.as_bytes()))
    }
}

#[derive(Debug)]
pub enum AssetIriParseError {
    DecodeError(base64::DecodeError),
    Utf8Error(std::string::FromUtf8Error),
}

impl std::fmt::Display for AssetIriParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Utf8Error(err) => write!(f, "Asset IRI is not valid UTF-8: {}", err),
        }
    }
}

impl FromStr for AssetIriParam {
    type Err = AssetIriParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE_NO_PAD
            .decode(s.trim_end_matches('=').as_bytes())
            .map_err(AssetIriParseError::DecodeError)?;
        let iri = String::from_utf8(decoded).map_err(AssetIriParseError::Utf8Error)?;
        Ok(AssetIriParam(iri))
    }
}
