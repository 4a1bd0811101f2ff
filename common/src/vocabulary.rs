//! Display labels for controlled-vocabulary codes.
//!
//! Asset types are catalog-specific codes. Themes come from the EU
//! data-theme authority table and may be given either as the short code
//! (`AGRI`) or as the full authority URI.

use std::fmt::Display;

pub const DATA_THEME_BASE_URI: &str = "http://publications.europa.eu/resource/authority/data-theme/";

pub const AT_VOCABULARY: &str = "CONTROLLED_VOCABULARY";
pub const AT_ONTOLOGY: &str = "ONTOLOGY";
pub const AT_SCHEMA: &str = "SCHEMA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub code: &'static str,
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> VocabularyEntry {
    VocabularyEntry { code, label }
}

/// Asset types, in filter panel order.
pub static ASSET_TYPES: [VocabularyEntry; 3] = [
    entry(AT_VOCABULARY, "Vocabolario Controllato"),
    entry(AT_ONTOLOGY, "Ontologia"),
    entry(AT_SCHEMA, "Schema"),
];

/// EU data themes with their Italian labels, in filter panel order.
pub static DATA_THEMES: [VocabularyEntry; 14] = [
    entry("AGRI", "Agricoltura, pesca, silvicoltura e prodotti alimentari"),
    entry("ECON", "Economia e finanze"),
    entry("EDUC", "Istruzione, cultura e sport"),
    entry("ENER", "Energia"),
    entry("ENVI", "Ambiente"),
    entry("GOVE", "Governo e settore pubblico"),
    entry("HEAL", "Salute"),
    entry("INTR", "Tematiche internazionali"),
    entry("JUST", "Giustizia, sistema giuridico e sicurezza pubblica"),
    entry("REGI", "Regioni e città"),
    entry("SOCI", "Popolazione e società"),
    entry("TECH", "Scienza e tecnologia"),
    entry("TRAN", "Trasporti"),
    entry("OP_DATPRO", "Dati provvisori"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownCodeError {
    AssetType(String),
    Theme(String),
}

impl Display for UnknownCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetType(code) => write!(f, "Unknown asset type code: {}", code),
            Self::Theme(code) => write!(f, "Unknown theme code: {}", code),
        }
    }
}

impl std::error::Error for UnknownCodeError {}

pub fn label_for_type(code: &str) -> Result<&'static str, UnknownCodeError> {
    ASSET_TYPES
        .iter()
        .find(|e| e.code == code)
        .map(|e| e.label)
        .ok_or_else(|| UnknownCodeError::AssetType(code.to_string()))
}

pub fn label_for_theme(code: &str) -> Result<&'static str, UnknownCodeError> {
    let short = theme_short_code(code);
    DATA_THEMES
        .iter()
        .find(|e| e.code == short)
        .map(|e| e.label)
        .ok_or_else(|| UnknownCodeError::Theme(code.to_string()))
}

/// Label for a type code, or the code itself when it is not in the table.
pub fn type_label_or_code(code: &str) -> String {
    label_or_code(code, label_for_type(code))
}

/// Label for a theme code or URI, or the input itself when it is not in the table.
pub fn theme_label_or_code(code: &str) -> String {
    label_or_code(code, label_for_theme(code))
}

fn label_or_code(code: &str, resolved: Result<&'static str, UnknownCodeError>) -> String {
    match resolved {
        Ok(label) => label.to_string(),
        Err(e) => {
            tracing::warn!("{e}");
            code.to_string()
        }
    }
}

/// `AGRI` for both `AGRI` and `.../data-theme/AGRI`.
pub fn theme_short_code(code: &str) -> &str {
    code.strip_prefix(DATA_THEME_BASE_URI).unwrap_or(code)
}

/// Full authority URI of a short theme code.
pub fn theme_uri(short_code: &str) -> String {
    format!("{DATA_THEME_BASE_URI}{}", theme_short_code(short_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_labels() {
        assert_eq!(label_for_type(AT_VOCABULARY), Ok("Vocabolario Controllato"));
        assert_eq!(label_for_type(AT_ONTOLOGY), Ok("Ontologia"));
        assert_eq!(label_for_type(AT_SCHEMA), Ok("Schema"));
    }

    #[test]
    fn themes_resolve_from_code_or_uri() {
        assert_eq!(label_for_theme("EDUC"), Ok("Istruzione, cultura e sport"));
        assert_eq!(
            label_for_theme("http://publications.europa.eu/resource/authority/data-theme/EDUC"),
            Ok("Istruzione, cultura e sport")
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_the_code() {
        assert_eq!(
            label_for_theme("unknown-code"),
            Err(UnknownCodeError::Theme("unknown-code".to_string()))
        );
        assert_eq!(theme_label_or_code("unknown-code"), "unknown-code");
        assert_eq!(type_label_or_code("DATASET"), "DATASET");
    }

    #[test]
    fn theme_uri_is_idempotent() {
        let uri = theme_uri("AGRI");
        assert_eq!(uri, "http://publications.europa.eu/resource/authority/data-theme/AGRI");
        assert_eq!(theme_uri(&uri), uri);
    }

    #[test]
    fn every_theme_code_is_unique() {
        let mut codes: Vec<_> = DATA_THEMES.iter().map(|e| e.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), DATA_THEMES.len());
    }
}
