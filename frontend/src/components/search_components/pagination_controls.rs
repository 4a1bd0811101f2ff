//! Previous/next and numbered page buttons under the result list.

use common::search_view::PaginationProps;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

/// Emits the offset of the selected page through `on_page_select`.
#[component]
pub fn PaginationControls(pagination: ReadSignal<PaginationProps>, on_page_select: Callback<u64>) -> Element {
    let page = use_memo(move || pagination.read().page);
    let previous_offset = use_memo(move || page.read().previous_offset());
    let next_offset = use_memo(move || page.read().next_offset());
    if page.read().is_single_page() {
        return rsx! {};
    }

    rsx! {
        nav {
            aria_label: "Paginazione dei risultati",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 16px 0;
            ",

            NavigationButton {
                icon: MdArrowBack,
                label: "Pagina precedente",
                disabled: previous_offset().is_none(),
                onclick: move |_| {
                    if let Some(offset) = previous_offset() {
                        on_page_select.call(offset);
                    }
                }
            }

            for link in page.read().page_links() {
                button {
                    key: "{link.number}",
                    aria_current: if link.is_current { "page" } else { "false" },
                    style: if link.is_current {
                        "min-width: 36px; height: 36px; border: none; border-bottom: 2px solid #0066CC; background: none; color: #17324D; font-size: 16px; font-weight: 700; cursor: default;"
                    } else {
                        "min-width: 36px; height: 36px; border: none; background: none; color: #0066CC; font-size: 16px; cursor: pointer;"
                    },
                    onclick: move |_| {
                        if !link.is_current {
                            on_page_select.call(link.offset);
                        }
                    },
                    "{link.number}"
                }
            }

            NavigationButton {
                icon: MdArrowForward,
                label: "Pagina successiva",
                disabled: next_offset().is_none(),
                onclick: move |_| {
                    if let Some(offset) = next_offset() {
                        on_page_select.call(offset);
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "#C5C7C9" } else { "#0066CC" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            aria_label: "{label}",
            style: "
                width: 36px;
                height: 36px;
                background: white;
                border: none;
                border-radius: 4px;
                padding: 4px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
