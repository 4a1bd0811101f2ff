//! Search page state machine.
//!
//! The URL is the single source of truth: user events never call the search
//! API directly, they navigate to the URL of the new filter, and the location
//! change is what issues the next request. Responses are applied in the order
//! requests were issued, whatever order they arrive in.

use std::fmt::Display;

use crate::filter_codec;
use crate::search_filter::SearchFilter;
use crate::search_result::SearchResultPage;
use crate::search_view::SearchView;

/// Access to the browser location, injected so the controller can be driven
/// without a router.
pub trait Navigation {
    /// Path and query of the current location.
    fn current_url(&self) -> String;
    fn navigate(&mut self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// A search the caller must run and report back through [`SearchController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub filter: SearchFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub message: String,
}

impl SearchFailure {
    pub fn new(message: impl Display) -> Self {
        Self { message: message.to_string() }
    }
}

impl Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Search request failed: {}", self.message)
    }
}

impl std::error::Error for SearchFailure {}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(SearchResultPage),
    Failed(SearchFailure),
}

/// What happened to a completed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

pub struct SearchController<N> {
    navigation: N,
    filter: Option<SearchFilter>,
    state: SearchState,
    latest: Option<RequestId>,
    next_id: u64,
}

impl<N: Navigation> SearchController<N> {
    pub fn new(navigation: N) -> Self {
        Self {
            navigation,
            filter: None,
            state: SearchState::Idle,
            latest: None,
            next_id: 0,
        }
    }

    /// Starts the search for the filter in the current URL.
    pub fn mount(&mut self) -> SearchRequest {
        let filter = self.location_filter();
        self.issue(filter)
    }

    /// Issues a request when the URL now names a different filter than the
    /// one already searched for.
    pub fn sync_with_location(&mut self) -> Option<SearchRequest> {
        let filter = self.location_filter();
        if self.latest.is_some() && self.filter.as_ref() == Some(&filter) {
            return None;
        }
        Some(self.issue(filter))
    }

    /// Searches the active filter again, typically after a failure.
    pub fn retry(&mut self) -> Option<SearchRequest> {
        let filter = self.filter.clone()?;
        Some(self.issue(filter))
    }

    fn issue(&mut self, filter: SearchFilter) -> SearchRequest {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.latest = Some(id);
        self.filter = Some(filter.clone());
        self.state = SearchState::Loading;
        tracing::debug!("issuing search request {:?} for {:?}", id, filter);
        SearchRequest { id, filter }
    }

    /// Records the outcome of request `id`, unless a newer request superseded it.
    pub fn complete(&mut self, id: RequestId, outcome: Result<SearchResultPage, SearchFailure>) -> Completion {
        if self.latest != Some(id) {
            tracing::debug!("dropping stale search response {:?}", id);
            return Completion::Stale;
        }
        self.state = match outcome {
            Ok(page) => SearchState::Success(page),
            Err(failure) => {
                tracing::warn!("{failure}");
                SearchState::Failed(failure)
            }
        };
        Completion::Applied
    }

    /// Navigates to the URL of `filter`. The search runs once the location changes.
    pub fn on_filter_update(&mut self, filter: SearchFilter) {
        let url = filter_codec::search_url(&filter);
        self.navigation.navigate(&url);
    }

    /// Like [`Self::on_filter_update`] with only the offset changed.
    pub fn on_page_select(&mut self, offset: u64) {
        let filter = self.filter.clone().unwrap_or_else(|| self.location_filter());
        self.on_filter_update(filter.with_offset(offset));
    }

    fn location_filter(&self) -> SearchFilter {
        let url = self.navigation.current_url();
        filter_codec::decode(filter_codec::query_of(&url))
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The filter of the latest issued request.
    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    pub fn view(&self) -> SearchView {
        SearchView::from_state(&self.state, self.filter.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::SearchResultEntry;
    use crate::search_view::results_count_label;
    use crate::vocabulary::AT_VOCABULARY;

    /// Location stub recording every navigation.
    #[derive(Default)]
    struct FakeNavigation {
        url: String,
        history: Vec<String>,
    }

    impl FakeNavigation {
        fn at(url: &str) -> Self {
            Self { url: url.to_string(), history: Vec::new() }
        }
    }

    impl Navigation for FakeNavigation {
        fn current_url(&self) -> String {
            self.url.clone()
        }

        fn navigate(&mut self, url: &str) {
            self.url = url.to_string();
            self.history.push(url.to_string());
        }
    }

    fn entry(iri: &str, title: &str) -> SearchResultEntry {
        SearchResultEntry {
            asset_iri: iri.to_string(),
            asset_type: AT_VOCABULARY.to_string(),
            title: title.to_string(),
            ..SearchResultEntry::default()
        }
    }

    fn page(items: Vec<SearchResultEntry>, offset: u64, total_count: u64) -> SearchResultPage {
        SearchResultPage { items, offset, total_count }
    }

    #[test]
    fn mount_searches_the_filter_in_the_url() {
        let filter = SearchFilter::from_types([AT_VOCABULARY]).with_pattern(Some("abc".into()));
        let url = filter_codec::search_url(&filter);
        let mut controller = SearchController::new(FakeNavigation::at(&url));
        assert_eq!(controller.state(), &SearchState::Idle);

        let request = controller.mount();

        assert_eq!(request.filter, filter);
        assert_eq!(controller.state(), &SearchState::Loading);
        assert_eq!(controller.view(), SearchView::Loading);
    }

    #[test]
    fn one_request_per_location_and_results_are_shown() {
        let filter = SearchFilter::from_types([AT_VOCABULARY]).with_pattern(Some("abc".into()));
        let mut controller = SearchController::new(FakeNavigation::at(&filter_codec::search_url(&filter)));

        let request = controller.sync_with_location().expect("first sync issues a request");
        assert_eq!(request.filter, filter);
        assert_eq!(controller.sync_with_location(), None);

        let items = vec![
            entry("http://www.disney.com/characters/", "Disney characters"),
            entry("http://www.atptour.com/court-types", "Tennis court types"),
        ];
        let outcome = controller.complete(request.id, Ok(page(items.clone(), 0, 2)));
        assert_eq!(outcome, Completion::Applied);

        let SearchView::Results { count_label, results, pagination } = controller.view() else {
            panic!("expected results, got {:?}", controller.view());
        };
        assert_eq!(count_label, "2 risultati");
        assert_eq!(count_label, results_count_label(2));
        let titles: Vec<_> = results.items.iter().map(|i| i.entry.title.as_str()).collect();
        assert_eq!(titles, vec!["Disney characters", "Tennis court types"]);
        assert_eq!(pagination.page.total_count, 2);
        assert_eq!(pagination.filter, filter);
    }

    #[test]
    fn late_response_of_an_older_request_is_dropped() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?pattern=a"));
        let a = controller.sync_with_location().unwrap();

        controller.navigation_mut().navigate("/search?pattern=b");
        let b = controller.sync_with_location().unwrap();

        let b_items = vec![entry("http://example.org/b", "B")];
        assert_eq!(controller.complete(b.id, Ok(page(b_items.clone(), 0, 1))), Completion::Applied);
        assert_eq!(
            controller.complete(a.id, Ok(page(vec![entry("http://example.org/a", "A")], 0, 1))),
            Completion::Stale
        );

        assert_eq!(controller.state(), &SearchState::Success(page(b_items, 0, 1)));
        assert_eq!(controller.filter(), Some(&SearchFilter::from_pattern("b")));
    }

    #[test]
    fn stale_failure_does_not_override_loading() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?pattern=a"));
        let a = controller.sync_with_location().unwrap();
        controller.navigation_mut().navigate("/search?pattern=b");
        let _b = controller.sync_with_location().unwrap();

        assert_eq!(controller.complete(a.id, Err(SearchFailure::new("timeout"))), Completion::Stale);
        assert_eq!(controller.state(), &SearchState::Loading);
    }

    #[test]
    fn failure_shows_an_alert_without_results_or_pagination() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?types=CONTROLLED_VOCABULARY"));
        let request = controller.mount();

        controller.complete(request.id, Err(SearchFailure::new("An error")));

        assert!(matches!(controller.state(), SearchState::Failed(_)));
        let view = controller.view();
        assert!(matches!(view, SearchView::Failed { .. }));
        assert!(view.alert().is_some());
        assert!(view.count_label().is_none());
        assert!(view.pagination().is_none());
    }

    #[test]
    fn retry_reissues_the_active_filter() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?pattern=abc"));
        assert_eq!(controller.retry(), None);

        let first = controller.mount();
        controller.complete(first.id, Err(SearchFailure::new("boom")));
        let second = controller.retry().unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.filter, first.filter);
        assert_eq!(controller.complete(first.id, Ok(SearchResultPage::empty())), Completion::Stale);
        assert_eq!(controller.complete(second.id, Ok(SearchResultPage::empty())), Completion::Applied);
    }

    #[test]
    fn filter_update_navigates_to_its_encoding() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?types=CONTROLLED_VOCABULARY&pattern=abc"));
        controller.mount();

        let updated = SearchFilter {
            themes: vec!["AGRI".to_string()],
            ..SearchFilter::from_types([AT_VOCABULARY]).with_pattern(Some("abc".into()))
        };
        controller.on_filter_update(updated.clone());

        assert_eq!(controller.navigation().history, vec![filter_codec::search_url(&updated)]);
        // The search itself waits for the location change.
        assert_eq!(controller.state(), &SearchState::Loading);
        assert_eq!(controller.sync_with_location().map(|r| r.filter), Some(updated));
    }

    #[test]
    fn page_select_keeps_the_other_criteria() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?types=SCHEMA&themes=AGRI"));
        controller.mount();

        controller.on_page_select(20);

        let expected = SearchFilter::from_types(["SCHEMA"]);
        let expected = SearchFilter { themes: vec!["AGRI".to_string()], offset: 20, ..expected };
        assert_eq!(controller.navigation().history, vec![filter_codec::search_url(&expected)]);
    }

    #[test]
    fn back_navigation_restores_a_previous_search() {
        let mut controller = SearchController::new(FakeNavigation::at("/search?pattern=a"));
        controller.sync_with_location().unwrap();
        controller.navigation_mut().navigate("/search?pattern=b");
        controller.sync_with_location().unwrap();
        controller.navigation_mut().navigate("/search?pattern=a");

        let request = controller.sync_with_location().unwrap();
        assert_eq!(request.filter, SearchFilter::from_pattern("a"));
    }
}
