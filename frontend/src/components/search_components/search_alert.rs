//! Failure alert for the search results area.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_alert_icons::MdError};

/// Failure banner shown in place of the results.
#[component]
pub fn SearchAlert(message: String, on_retry: Callback<()>) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                border-left: 4px solid #D9364F;
                background-color: #FBE9EC;
                color: #17324D;
                padding: 16px 20px;
                margin: 16px 0;
            ",
            Icon { icon: MdError, style: "width: 24px; height: 24px; color: #D9364F; flex-shrink: 0;" }
            span { style: "flex: 1 1 auto; font-size: 16px;", "{message}" }
            button {
                class: "schema-button-outline",
                onclick: move |_| on_retry.call(()),
                "Riprova"
            }
        }
    }
}
