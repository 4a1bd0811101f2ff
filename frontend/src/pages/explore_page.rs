use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::search_filter::SearchFilter;
use common::vocabulary::{ASSET_TYPES, DATA_THEMES, VocabularyEntry};
use crate::components::footer::{EndSection, EndSectionVariant};
use crate::routes::Route;


/// Explore page
#[component]
pub fn ExplorePage() -> Element {
    rsx! {
        Title { "schema - Esplora il catalogo" }
        div {
            id: "x-explore-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 32px;
                width: 100%;
                padding: 48px 32px 0 32px;
                box-sizing: border-box;
            ",

            MainTitle {}
            ExploreSearchInput {}
            AssetTypeShortcuts {}
            ThemeGrid {}
        }
        EndSection { variant: EndSectionVariant::Evolving }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 12px; max-width: 820px;",
            h1 {
                style: "color: #17324D; font-size: 40px; font-weight: 700; margin: 0;",
                "Esplora il catalogo della semantica dei dati"
            }
            p {
                style: "color: #17324D; font-size: 20px; line-height: 1.5; margin: 0;",
                "Vocabolari controllati, ontologie e schemi dati pubblicati dalle amministrazioni, per rendere i dati interoperabili."
            }
        }
    }
}

#[component]
fn ExploreSearchInput() -> Element {
    let nav = navigator();
    let mut search_q = use_signal(|| "".to_string());
    let submit = move || {
        let filter = SearchFilter::from_pattern(search_q.read().clone());
        nav.push(Route::search_page_from_filter(filter));
    };
    rsx! {
        div {
            role: "search",
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border: 1px solid #5C6F82;
                border-radius: 4px;
                padding: 10px 14px;
                height: 48px;
                max-width: 720px;
                box-sizing: border-box;
                color: #17324D;
            ",
            input {
                r#type: "text",
                placeholder: "Cerca vocabolari, ontologie e schemi",
                aria_label: "Testo da cercare",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #17324D;
                    font-size: 18px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        submit();
                    }
                },
            }
            button {
                style: "border: none; background: none; cursor: pointer;",
                title: "Cerca",
                onclick: move |_| submit(),
                Icon { icon: MdSearch, style: "width: 24px; height: 24px; color:#0066CC;" }
            }
        }
    }
}

#[component]
fn AssetTypeShortcuts() -> Element {
    rsx! {
        section {
            style: "display:flex; flex-direction: column; gap: 16px;",
            h2 { style: "color: #17324D; font-size: 24px; margin: 0;", "Cerca per tipo di risorsa" }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
                for entry in ASSET_TYPES.iter().copied() {
                    ExploreCard {
                        key: "{entry.code}",
                        entry,
                        to: Route::search_page_from_filter(SearchFilter::from_types([entry.code])),
                        accent: "#0066CC",
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeGrid() -> Element {
    rsx! {
        section {
            style: "display:flex; flex-direction: column; gap: 16px;",
            h2 { style: "color: #17324D; font-size: 24px; margin: 0;", "Cerca per tema" }
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 16px;
                ",
                for entry in DATA_THEMES.iter().copied() {
                    ExploreCard {
                        key: "{entry.code}",
                        entry,
                        to: Route::search_page_from_filter(SearchFilter::from_themes([entry.code])),
                        accent: "#17324D",
                    }
                }
            }
        }
    }
}

#[component]
fn ExploreCard(entry: VocabularyEntry, to: Route, accent: String) -> Element {
    rsx! {
        Link {
            to,
            class: "schema-hover-shadow-background",
            style: "
                display:flex;
                align-items: center;
                min-height: 72px;
                min-width: 220px;
                padding: 16px 20px;
                border-radius: 4px;
                border-left: 4px solid {accent};
                background: white;
                box-shadow: 0 2px 8px rgba(0,0,0,0.08);
                color: #17324D;
                font-size: 18px;
                font-weight: 600;
                text-decoration: none;
            ",
            "{entry.label}"
        }
    }
}
