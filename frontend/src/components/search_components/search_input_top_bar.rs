use common::search_filter::SearchFilter;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::MdClear}};


/// Free-text search box. Edits a local copy of the pattern and emits the
/// whole filter on Enter or on the search button.
#[component]
pub fn SearchInputTopBar(original_filter: ReadSignal<SearchFilter>, on_filter_update: Callback<SearchFilter>) -> Element {
    let mut pattern = use_signal(|| original_filter.read().pattern.clone().unwrap_or_default());
    // when url changes (the read signal given to us), we need to update the signals, as they are not reset by navigation.
    use_effect(move || {
        let new_pattern = original_filter.read().pattern.clone().unwrap_or_default();
        pattern.set(new_pattern);
    });
    let pattern_has_changed = use_memo(move || {
        let current = original_filter.read().pattern.clone().unwrap_or_default();
        pattern.read().trim() != current.trim()
    });
    let search_button_color = use_memo(move || if pattern_has_changed() { "#0066CC" } else { "#5C6F82" });
    let trigger_search = move |_: ()| {
        let filter = original_filter.read().with_pattern(Some(pattern.read().clone()));
        on_filter_update.call(filter);
    };
    let mut clear_search = move |_: ()| {
        pattern.set(String::new());
        let filter = original_filter.read().with_pattern(None);
        on_filter_update.call(filter);
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            role: "search",
            style: "
                display:flex;
                align-items:center;
                gap: 12px;
                background-color: white;
                border-radius: 4px;
                padding: 10px 14px;
                height: 48px;
                color: #17324D;
                border: 1px solid #5C6F82;
                width: 100%;
                max-width: 720px;
                box-sizing: border-box;
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
                    font-weight: 400;
                ",
                value: "{pattern}",
                oninput: move |event: Event<FormData>| pattern.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
            if !pattern.read().is_empty() {
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    title: "Cancella testo",
                    onclick: move |_| clear_search(()),
                    Icon { icon: MdClear, style: "width: 20px; height: 20px; color: #5C6F82;" }
                }
            }
            button {
                style: "border: none; background: none; cursor: pointer;",
                title: "Cerca",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 24px; height: 24px; color:{search_button_color()};" }
            }
        }
    }
}
