//! Search page: filter panel, result list and pagination driven by the URL.

use dioxus::{core::Task, logger::tracing, prelude::*};

use common::{
    search_controller::{Completion, SearchController, SearchFailure, SearchRequest},
    search_filter::SearchFilter,
    search_view::{FilterPanelProps, SearchView},
};
use crate::{
    api::search_api::search_assets,
    components::{
        footer::{EndSection, EndSectionVariant},
        search_components::{
            filter_panel::FilterPanel, pagination_controls::PaginationControls, search_alert::SearchAlert,
            search_input_top_bar::SearchInputTopBar, search_result_list::SearchResultList,
        },
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{router_navigation::RouterNavigation, url_param::FilterParam},
};

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(filter: FilterParam) -> Element {
    let title = match filter.0.pattern.as_deref() {
        Some(pattern) if !pattern.trim().is_empty() => format!("schema - Cerca: {}", title_ellipsis(pattern.trim())),
        _ => "schema - Cerca".to_string(),
    };
    rsx! {
        Title { "{title}" }
        SearchPageRootComponent { filter: filter.0.clone() }
    }
}

/// Owns the search controller. The router decodes the URL into `filter`;
/// each change of it issues a request, and only the latest response is shown.
#[component]
fn SearchPageRootComponent(filter: ReadSignal<SearchFilter>) -> Element {
    let navigator = navigator();
    let mut controller = use_signal(move || SearchController::new(RouterNavigation::new(navigator, filter)));
    let mut in_flight = use_signal(|| None::<Task>);

    let run_request = use_callback(move |request: SearchRequest| {
        if let Some(previous) = in_flight.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            let SearchRequest { id, filter } = request;
            let outcome = search_assets(filter).await.map_err(SearchFailure::new);
            if controller.write().complete(id, outcome) == Completion::Stale {
                tracing::debug!("search response {:?} arrived after a newer request", id);
            }
        });
        in_flight.set(Some(task));
    });

    use_effect(move || {
        // re-run whenever the router hands us a new filter
        let _location = filter.read();
        if let Some(request) = controller.write().sync_with_location() {
            run_request.call(request);
        }
    });

    let on_filter_update = use_callback(move |new_filter: SearchFilter| {
        controller.write().on_filter_update(new_filter);
    });
    let on_page_select = use_callback(move |offset: u64| {
        controller.write().on_page_select(offset);
    });
    let on_retry = use_callback(move |_: ()| {
        let request = controller.write().retry();
        if let Some(request) = request {
            run_request.call(request);
        }
    });

    let view = use_memo(move || controller.read().view());
    let panel = use_memo(move || FilterPanelProps::for_filter(filter()));

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid #E6E9F2;
                    background-color: #F2F7FC;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    padding: 16px 32px;
                ",
                SearchInputTopBar { original_filter: filter, on_filter_update }
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                "#,
                FilterPanel { panel: panel(), on_filter_update }
                div {
                    id: "x-search-results-panel",
                    style: "
                        background-color: #F5F6F8;
                        flex-grow: 1;
                        min-width: 400px;
                        padding: 16px 32px;
                    ",
                    {match view() {
                        SearchView::Idle | SearchView::Loading => rsx! { LoadingIndicator {} },
                        SearchView::Failed { alert } => rsx! {
                            SearchAlert { message: alert, on_retry }
                        },
                        SearchView::Results { count_label, results, pagination } => {
                            let offset = pagination.page.offset;
                            rsx! {
                                h3 {
                                    style: "font-size: 20px; font-weight: 300; color: #5C6F82; margin: 8px 0;",
                                    "{count_label}"
                                }
                                SearchResultList { results, offset }
                                PaginationControls { pagination, on_page_select }
                            }
                        }
                    }}
                }
            }

            EndSection { variant: EndSectionVariant::Contribute }
        }
    }
}
