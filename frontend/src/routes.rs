use common::search_filter::SearchFilter;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::{AssetIriParam, FilterParam};
use crate::pages::asset_details_page::AssetDetailsPage;
use crate::pages::explore_page::ExplorePage;
use crate::pages::faq_page::FaqPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::project_page::ProjectPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    ExplorePage {},


    #[route("/search?:..filter")]
    SearchPage { filter: FilterParam },


    #[route("/semantic-assets/details/:asset_iri")]
    AssetDetailsPage { asset_iri: AssetIriParam },


    #[route("/faq")]
    FaqPage {},

    #[route("/progetto")]
    ProjectPage {},


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn search_page_from_filter(filter: SearchFilter) -> Self {
        Self::SearchPage {
            filter: FilterParam::from(filter),
        }
    }

    pub fn asset_details(asset_iri: impl Into<String>) -> Self {
        Self::AssetDetailsPage {
            asset_iri: AssetIriParam(asset_iri.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::router_navigation::route_for_url;
    use common::filter_codec;

    fn parse(url: &str) -> Route {
        url.parse::<Route>().unwrap_or_else(|e| panic!("{url} does not parse: {e}"))
    }

    fn search_filter_of(route: &Route) -> SearchFilter {
        match route {
            Route::SearchPage { filter } => filter.0.clone(),
            other => panic!("expected the search page, got {other:?}"),
        }
    }

    #[test]
    fn search_route_keeps_reserved_characters_in_the_pattern() {
        for pattern in ["R&D", "C++", "100%", "a=b", "50%25 off", "città & comuni=1+2"] {
            let filter = SearchFilter::from_pattern(pattern);
            let route = Route::search_page_from_filter(filter.clone());
            let url = route.to_string();
            let parsed = parse(&url);
            assert_eq!(search_filter_of(&parsed), filter, "pattern {pattern:?} went through {url}");
            assert_eq!(parsed, route);
        }
    }

    #[test]
    fn search_route_keeps_every_filter_field() {
        let filter = SearchFilter::from_types(["ONTOLOGY", "SCHEMA"])
            .with_pattern(Some("persona fisica".to_string()))
            .toggled_theme("http://publications.europa.eu/resource/authority/data-theme/TRAN")
            .toggled_theme("AGRI")
            .with_offset(30);
        let route = Route::search_page_from_filter(filter.clone());
        assert_eq!(search_filter_of(&parse(&route.to_string())), filter);
    }

    #[test]
    fn default_filter_round_trips() {
        let route = Route::search_page_from_filter(SearchFilter::default());
        assert_eq!(search_filter_of(&parse(&route.to_string())), SearchFilter::default());
    }

    #[test]
    fn details_route_round_trips_an_iri_with_slashes_and_fragment() {
        let iri = "https://w3id.org/italia/onto/CPV/#Person?x=1";
        let route = Route::asset_details(iri);
        let url = route.to_string();
        assert!(!url.contains('#'), "{url}");
        match parse(&url) {
            Route::AssetDetailsPage { asset_iri } => assert_eq!(asset_iri.0, iri),
            other => panic!("expected the details page, got {other:?}"),
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        match parse("/qualcosa/di/strano") {
            Route::NotFoundPage { segments } => assert_eq!(segments, vec!["qualcosa", "di", "strano"]),
            other => panic!("expected the not found page, got {other:?}"),
        }
    }

    #[test]
    fn controller_urls_map_to_the_search_route() {
        let filter = SearchFilter::from_pattern("R&D").with_offset(10);
        let url = filter_codec::search_url(&filter);
        assert_eq!(route_for_url(&url), Some(Route::search_page_from_filter(filter)));
        assert_eq!(route_for_url("/search"), Some(Route::search_page_from_filter(SearchFilter::default())));
    }

    #[test]
    fn other_urls_go_through_the_router() {
        assert_eq!(route_for_url("/faq"), Some(Route::FaqPage {}));
        assert_eq!(route_for_url("/"), Some(Route::ExplorePage {}));
    }
}
