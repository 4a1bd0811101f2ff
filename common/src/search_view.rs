//! Props handed to the search page components, derived from the controller state.

use crate::pagination::PageInfo;
use crate::search_controller::SearchState;
use crate::search_filter::SearchFilter;
use crate::search_result::SearchResultEntry;
use crate::vocabulary::{self, VocabularyEntry};

pub const SEARCH_FAILED_ALERT: &str = "Si è verificato un errore durante la ricerca. Riprova più tardi.";

/// The filter panel shows the current filter and edits a copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub filter: SearchFilter,
    pub asset_types: Vec<VocabularyEntry>,
    pub themes: Vec<VocabularyEntry>,
}

impl FilterPanelProps {
    pub fn for_filter(filter: SearchFilter) -> Self {
        Self {
            filter,
            asset_types: vocabulary::ASSET_TYPES.to_vec(),
            themes: vocabulary::DATA_THEMES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: PageInfo,
    pub filter: SearchFilter,
}

/// A result entry with its vocabulary codes turned into labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub entry: SearchResultEntry,
    pub type_label: String,
    pub theme_labels: Vec<String>,
}

impl ResolvedEntry {
    pub fn resolve(entry: SearchResultEntry) -> Self {
        let type_label = vocabulary::type_label_or_code(&entry.asset_type);
        let theme_labels = entry.themes.iter().map(|t| vocabulary::theme_label_or_code(t)).collect();
        Self { entry, type_label, theme_labels }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultListProps {
    pub items: Vec<ResolvedEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Idle,
    Loading,
    Failed {
        alert: String,
    },
    Results {
        count_label: String,
        results: ResultListProps,
        pagination: PaginationProps,
    },
}

impl SearchView {
    pub fn from_state(state: &SearchState, filter: Option<&SearchFilter>) -> Self {
        match state {
            SearchState::Idle => Self::Idle,
            SearchState::Loading => Self::Loading,
            SearchState::Failed(_) => Self::Failed { alert: SEARCH_FAILED_ALERT.to_string() },
            SearchState::Success(page) => Self::Results {
                count_label: results_count_label(page.total_count),
                results: ResultListProps {
                    items: page.items.iter().cloned().map(ResolvedEntry::resolve).collect(),
                },
                pagination: PaginationProps {
                    page: PageInfo::new(page.offset, page.total_count),
                    filter: filter.cloned().unwrap_or_default(),
                },
            },
        }
    }

    pub fn alert(&self) -> Option<&str> {
        match self {
            Self::Failed { alert } => Some(alert.as_str()),
            _ => None,
        }
    }

    pub fn count_label(&self) -> Option<&str> {
        match self {
            Self::Results { count_label, .. } => Some(count_label.as_str()),
            _ => None,
        }
    }

    pub fn pagination(&self) -> Option<&PaginationProps> {
        match self {
            Self::Results { pagination, .. } => Some(pagination),
            _ => None,
        }
    }
}

pub fn results_count_label(total_count: u64) -> String {
    match total_count {
        1 => "1 risultato".to_string(),
        n => format!("{n} risultati"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::{NodeSummary, SearchResultPage};
    use crate::vocabulary::AT_VOCABULARY;

    fn vocab_item() -> SearchResultEntry {
        SearchResultEntry {
            asset_iri: "http://www.disney.com/characters".to_string(),
            asset_type: AT_VOCABULARY.to_string(),
            title: "Disney characters".to_string(),
            description: "Fully comprehensive list of Disney characters".to_string(),
            themes: vec!["http://publications.europa.eu/resource/authority/data-theme/EDUC".to_string()],
            rights_holder: Some(NodeSummary {
                iri: "http://publications.europa.eu/resource/authority/corporate-body/EUROSTAT".to_string(),
                summary: "Eurostat".to_string(),
            }),
            modified_on: Some("2020-04-01".to_string()),
            version_info: Some("1.0".to_string()),
        }
    }

    #[test]
    fn entries_carry_their_labels() {
        let resolved = ResolvedEntry::resolve(vocab_item());
        assert_eq!(resolved.type_label, "Vocabolario Controllato");
        assert_eq!(resolved.theme_labels, vec!["Istruzione, cultura e sport"]);
        assert_eq!(resolved.entry, vocab_item());
    }

    #[test]
    fn unknown_codes_are_shown_raw() {
        let entry = SearchResultEntry {
            asset_type: "DATASET".to_string(),
            themes: vec!["EDUC".to_string(), "XYZ".to_string()],
            ..vocab_item()
        };
        let resolved = ResolvedEntry::resolve(entry);
        assert_eq!(resolved.type_label, "DATASET");
        assert_eq!(resolved.theme_labels, vec!["Istruzione, cultura e sport", "XYZ"]);
    }

    #[test]
    fn count_label_is_singular_for_one() {
        assert_eq!(results_count_label(0), "0 risultati");
        assert_eq!(results_count_label(1), "1 risultato");
        assert_eq!(results_count_label(24), "24 risultati");
    }

    #[test]
    fn results_keep_backend_order() {
        let second = SearchResultEntry { title: "Another".to_string(), ..vocab_item() };
        let page = SearchResultPage { items: vec![vocab_item(), second], offset: 10, total_count: 12 };
        let filter = SearchFilter::from_pattern("x").with_offset(10);

        let view = SearchView::from_state(&SearchState::Success(page), Some(&filter));

        let SearchView::Results { results, pagination, .. } = view else { panic!("expected results") };
        assert_eq!(results.items[0].entry.title, "Disney characters");
        assert_eq!(results.items[1].entry.title, "Another");
        assert_eq!(pagination.page, PageInfo::new(10, 12));
        assert_eq!(pagination.filter, filter);
    }

    #[test]
    fn filter_panel_lists_every_vocabulary_entry() {
        let props = FilterPanelProps::for_filter(SearchFilter::default());
        assert_eq!(props.asset_types.len(), 3);
        assert_eq!(props.themes.len(), 14);
    }
}
