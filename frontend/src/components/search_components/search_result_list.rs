//! The list of result cards for the current page.

use common::search_view::ResultListProps;
use dioxus::prelude::*;

use crate::components::search_components::search_result_item_card::SearchResultItemCard;

#[component]
pub fn SearchResultList(results: ReadSignal<ResultListProps>, offset: u64) -> Element {
    let items = results.read().items.clone();
    if items.is_empty() {
        return rsx! {
            p {
                style: "font-size: 18px; color: #5C6F82; padding: 16px 0;",
                "Nessun risultato corrisponde ai criteri di ricerca."
            }
        };
    }
    rsx! {
        div {
            id: "x-search-result-list",
            style: "display: flex; flex-direction: column; width: 100%;",
            for (index, item) in items.iter().enumerate() {
                SearchResultItemCard {
                    key: "{item.entry.asset_iri}",
                    result: item.clone(),
                    position: offset.saturating_add(1).saturating_add(index as u64),
                }
            }
        }
    }
}
