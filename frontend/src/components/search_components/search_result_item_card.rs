//! Search result item card component.

use common::search_view::ResolvedEntry;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::go_icons::GoDatabase};

use crate::{components::search_components::card_action_buttons::{AssetCardActionButtonCopyIri, AssetCardActionButtonDetails}, routes::Route};

#[component]
pub fn SearchResultItemCard(result: ReadSignal<ResolvedEntry>, position: u64) -> Element {
    let ResolvedEntry { entry, type_label, theme_labels } = result.read().clone();

    rsx! {
        article {
            class: "x-search-result-item",
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 8px;
                background: white;
                border: 1px solid #E6E9F2;
                border-radius: 4px;
                padding: 16px 20px;
                margin: 8px 0;
                width: 100%;
                box-sizing: border-box;
            ",
            // Row 1: POSITION - TYPE CHIP - SPACER - BUTTONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 16px; font-weight: 300; color: #5C6F82;",
                    "{position}."
                }
                TypeChip { type_label }

                // SPACER
                div { style: "flex: 1 1 auto;" }

                AssetCardActionButtonDetails { asset_iri: entry.asset_iri.clone() }
                AssetCardActionButtonCopyIri { asset_iri: entry.asset_iri.clone() }
            }
            // Row 2: TITLE
            Link {
                to: Route::asset_details(entry.asset_iri.clone()),
                style: "font-size: 22px; line-height: 30px; font-weight: 700; color: #0066CC; text-decoration: none;",
                "{entry.title}"
            }
            // Row 3: IRI
            a {
                href: "{entry.asset_iri}",
                target: "_blank",
                rel: "noopener noreferrer",
                style: "font-size: 14px; color: #5C6F82; word-break: break-all;",
                "{entry.asset_iri}"
            }
            // Row 4: DESCRIPTION
            if !entry.description.is_empty() {
                p {
                    style: "
                        font-size: 16px;
                        line-height: 24px;
                        color: #17324D;
                        margin: 0;
                        overflow: hidden;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                    ",
                    "{entry.description}"
                }
            }
            // Row 5: THEMES
            if !theme_labels.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                    for (index, label) in theme_labels.into_iter().enumerate() {
                        span {
                            key: "{index}-{label}",
                            style: "font-size: 13px; color: #0066CC; border: 1px solid #0066CC; border-radius: 12px; padding: 2px 10px;",
                            "{label}"
                        }
                    }
                }
            }
            // Row 6: METADATA
            CardMetadataRow {
                rights_holder: entry.rights_holder.as_ref().map(|r| r.summary.clone()),
                modified_on: entry.modified_on.clone(),
                version_info: entry.version_info.clone(),
            }
        }
    }
}

#[component]
fn TypeChip(type_label: String) -> Element {
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                font-size: 13px;
                font-weight: 600;
                text-transform: uppercase;
                color: white;
                background-color: #17324D;
                border-radius: 4px;
                padding: 2px 8px;
            ",
            Icon { icon: GoDatabase, style: "width: 14px; height: 14px;" }
            "{type_label}"
        }
    }
}

#[component]
fn CardMetadataRow(rights_holder: Option<String>, modified_on: Option<String>, version_info: Option<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 20px;
                font-size: 14px;
                color: #5C6F82;
            ",
            if let Some(rights_holder) = rights_holder {
                span { "Titolare: " strong { "{rights_holder}" } }
            }
            if let Some(modified_on) = modified_on {
                span { "Ultima modifica: {modified_on}" }
            }
            if let Some(version_info) = version_info {
                span { "Versione: {version_info}" }
            }
        }
    }
}
