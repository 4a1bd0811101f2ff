//! Router-backed [`Navigation`] for the search controller.

use common::{filter_codec, search_const::SEARCH_PATH, search_controller::Navigation, search_filter::SearchFilter};
use dioxus::{logger::tracing, prelude::*, router::Navigator};

use crate::routes::Route;

#[derive(Clone, Copy)]
pub struct RouterNavigation {
    navigator: Navigator,
    /// Filter the router decoded from the current location.
    location_filter: ReadSignal<SearchFilter>,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator, location_filter: ReadSignal<SearchFilter>) -> Self {
        Self { navigator, location_filter }
    }
}

impl Navigation for RouterNavigation {
    fn current_url(&self) -> String {
        filter_codec::search_url(&self.location_filter.peek())
    }

    fn navigate(&mut self, url: &str) {
        let Some(route) = route_for_url(url) else { return };
        tracing::debug!("navigating to {}", route);
        self.navigator.push(route);
    }
}

/// Search URLs are decoded with the filter codec directly; anything else
/// goes through the router's parser.
pub fn route_for_url(url: &str) -> Option<Route> {
    let path = url.split('?').next().unwrap_or(url);
    if path == SEARCH_PATH {
        return Some(Route::search_page_from_filter(filter_codec::decode(filter_codec::query_of(url))));
    }
    match url.parse::<Route>() {
        Ok(route) => Some(route),
        Err(e) => {
            tracing::warn!("Cannot navigate to {url}: {e}");
            None
        }
    }
}
