//! Shared search filter model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Criteria governing which assets a search returns.
///
/// A filter is a value: it is rebuilt from the URL on every navigation and
/// replaced wholesale when the user changes a criterion. The helpers below
/// return new filters instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilter {
    /// Asset-type codes. Empty means no type restriction.
    pub types: BTreeSet<String>,
    /// Free-text pattern.
    pub pattern: Option<String>,
    /// Theme codes, in display order.
    pub themes: Vec<String>,
    /// Zero-based offset of the first result.
    pub offset: u64,
}

impl SearchFilter {
    pub fn from_pattern(pattern: impl Into<String>) -> Self {
        Self::default().with_pattern(Some(pattern.into()))
    }

    pub fn from_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_themes<I, S>(themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            themes: themes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_offset(&self, offset: u64) -> Self {
        Self { offset, ..self.clone() }
    }

    /// Replaces the pattern. Blank input clears it and restarts from the first page.
    pub fn with_pattern(&self, pattern: Option<String>) -> Self {
        let pattern = pattern
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self { pattern, offset: 0, ..self.clone() }
    }

    /// Adds or removes a type code and restarts from the first page.
    pub fn toggled_type(&self, code: &str) -> Self {
        let mut types = self.types.clone();
        if !types.remove(code) {
            types.insert(code.to_string());
        }
        Self { types, offset: 0, ..self.clone() }
    }

    /// Adds or removes a theme code and restarts from the first page.
    /// A newly added theme goes to the end of the list.
    pub fn toggled_theme(&self, code: &str) -> Self {
        let mut themes = self.themes.clone();
        if let Some(position) = themes.iter().position(|t| t == code) {
            themes.remove(position);
        } else {
            themes.push(code.to_string());
        }
        Self { themes, offset: 0, ..self.clone() }
    }

    pub fn has_type(&self, code: &str) -> bool {
        self.types.contains(code)
    }

    pub fn has_theme(&self, code: &str) -> bool {
        self.themes.iter().any(|t| t == code)
    }

    /// True when no criterion narrows the search.
    pub fn is_unrestricted(&self) -> bool {
        self.types.is_empty() && self.pattern.is_none() && self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_pattern_is_cleared() {
        let filter = SearchFilter::from_pattern("   ");
        assert_eq!(filter.pattern, None);
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn criterion_change_resets_offset() {
        let filter = SearchFilter::from_pattern("abc").with_offset(30);

        assert_eq!(filter.toggled_type("ONTOLOGY").offset, 0);
        assert_eq!(filter.toggled_theme("AGRI").offset, 0);
        assert_eq!(filter.with_pattern(Some("xyz".into())).offset, 0);
        assert_eq!(filter.offset, 30);
    }

    #[test]
    fn toggling_twice_restores_the_filter() {
        let filter = SearchFilter::from_themes(["EDUC"]);
        let toggled = filter.toggled_theme("AGRI");
        assert_eq!(toggled.themes, vec!["EDUC".to_string(), "AGRI".to_string()]);
        assert_eq!(toggled.toggled_theme("AGRI"), filter);

        let toggled = filter.toggled_type("SCHEMA");
        assert!(toggled.has_type("SCHEMA"));
        assert!(!toggled.toggled_type("SCHEMA").has_type("SCHEMA"));
    }
}
