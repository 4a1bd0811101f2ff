//! Filter panel with asset type and theme checkboxes.

use common::{search_filter::SearchFilter, search_view::FilterPanelProps as PanelProps, vocabulary::{VocabularyEntry, theme_short_code}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};


/// Stateless: every change is emitted as a new filter through `on_filter_update`.
#[component]
pub fn FilterPanel(panel: ReadSignal<PanelProps>, on_filter_update: Callback<SearchFilter>) -> Element {
    let filter = use_memo(move || panel.read().filter.clone());
    let has_restrictions = use_memo(move || !filter.read().types.is_empty() || !filter.read().themes.is_empty());
    let asset_types = panel.read().asset_types.clone();
    let themes = panel.read().themes.clone();

    rsx! {
        aside {
            id: "x-search-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                min-width: 260px;
                max-width: 320px;
                padding: 16px;
                background-color: white;
                border-right: 1px solid #E6E9F2;
            ",

            FilterGroup {
                title: "Tipo di risorsa",
                for entry in asset_types {
                    li {
                        key: "{entry.code}",
                        FilterCheckbox {
                            entry,
                            is_checked: filter.read().has_type(entry.code),
                            on_toggle: move |_| on_filter_update.call(filter.read().toggled_type(entry.code)),
                        }
                    }
                }
            }

            FilterGroup {
                title: "Temi",
                for entry in themes {
                    li {
                        key: "{entry.code}",
                        FilterCheckbox {
                            entry,
                            is_checked: find_theme(&filter.read(), entry.code).is_some(),
                            on_toggle: move |_| {
                                let filter = filter.read();
                                // the URL may carry the full authority URI; toggle whatever form is present
                                let existing = find_theme(&filter, entry.code).unwrap_or(entry.code.to_string());
                                on_filter_update.call(filter.toggled_theme(&existing));
                            },
                        }
                    }
                }
            }

            if has_restrictions() {
                button {
                    class: "schema-button-outline",
                    onclick: move |_| {
                        let cleared = SearchFilter::default().with_pattern(filter.read().pattern.clone());
                        on_filter_update.call(cleared);
                    },
                    "Rimuovi filtri"
                }
            }
        }
    }
}

fn find_theme(filter: &SearchFilter, short_code: &str) -> Option<String> {
    filter.themes.iter().find(|t| theme_short_code(t) == short_code).cloned()
}

#[component]
fn FilterGroup(title: String, children: Element) -> Element {
    rsx! {
        fieldset {
            style: "border: none; padding: 0; margin: 0;",
            legend {
                style: "font-size: 14px; font-weight: 700; text-transform: uppercase; color: #17324D; margin-bottom: 8px;",
                "{title}"
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                {children}
            }
        }
    }
}

#[component]
fn FilterCheckbox(entry: VocabularyEntry, is_checked: bool, on_toggle: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-filter-list-item",
            role: "checkbox",
            aria_checked: "{is_checked}",
            tabindex: "0",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_e| on_toggle.call(()),
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Enter || event.key() == Key::Character(" ".to_string()) {
                    on_toggle.call(());
                }
            },

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #0066CC; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #5C6F82; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    color: #17324D;
                ",
                "{entry.label}"
            }
        }
    }
}
