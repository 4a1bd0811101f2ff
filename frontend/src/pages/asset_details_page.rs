use common::{asset_details::AssetDetails, search_result::NodeSummary, vocabulary};
use dioxus::prelude::*;

use crate::{
    api::asset_api::get_asset_details,
    components::{
        error_boundary::ComponentErrorDisplay,
        footer::{EndSection, EndSectionVariant},
        search_components::card_action_buttons::AssetCardActionButtonCopyIri,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::AssetIriParam,
};


/// Asset details page
#[component]
pub fn AssetDetailsPage(asset_iri: AssetIriParam) -> Element {
    let asset_iri = asset_iri.0.clone();
    rsx! {
        Title { "schema - Dettaglio risorsa" }
        div {
            id: "x-asset-details-container",
            style: "padding: 32px; box-sizing: border-box; width: 100%;",
            SuspendWrapper { AssetDetailsView { asset_iri } }
        }
        EndSection { variant: EndSectionVariant::Evolving }
    }
}

#[component]
fn AssetDetailsView(asset_iri: ReadSignal<String>) -> Element {
    let details = use_resource(move || {
        let asset_iri = asset_iri();
        async move { get_asset_details(asset_iri).await }
    })
    .suspend()?.cloned();
    let details = match details {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("Impossibile caricare la risorsa: {e}") } },
        Ok(details) => details,
    };
    let AssetDetails {
        asset_iri,
        asset_type,
        title,
        description,
        themes,
        rights_holder,
        modified_on,
        issued_on,
        version_info,
        keywords,
        languages,
        publishers,
        creators,
        contact_point,
        accrual_periodicity,
        conforms_to,
        distributions,
    } = details;
    let type_label = vocabulary::type_label_or_code(&asset_type);
    let theme_labels: Vec<String> = themes.iter().map(|t| vocabulary::theme_label_or_code(t)).collect();

    rsx! {
        article {
            style: "display: flex; flex-direction: column; gap: 24px; max-width: 1080px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                span {
                    style: "font-size: 13px; font-weight: 600; text-transform: uppercase; color: white; background-color: #17324D; border-radius: 4px; padding: 2px 8px;",
                    "{type_label}"
                }
                div { style: "flex: 1 1 auto;" }
                AssetCardActionButtonCopyIri { asset_iri: asset_iri.clone() }
            }
            h1 { style: "color: #17324D; font-size: 36px; margin: 0;", "{title}" }
            a {
                href: "{asset_iri}",
                target: "_blank",
                rel: "noopener noreferrer",
                style: "font-size: 16px; color: #0066CC; word-break: break-all;",
                "{asset_iri}"
            }
            if !description.is_empty() {
                p { style: "font-size: 18px; line-height: 28px; color: #17324D; margin: 0;", "{description}" }
            }

            dl {
                style: "
                    display: grid;
                    grid-template-columns: minmax(180px, 240px) 1fr;
                    gap: 12px 24px;
                    margin: 0;
                    font-size: 16px;
                    color: #17324D;
                ",
                DetailRow { label: "Temi", values: theme_labels }
                DetailRow { label: "Titolare", values: node_summaries(rights_holder) }
                DetailRow { label: "Editori", values: node_summaries(publishers) }
                DetailRow { label: "Autori", values: node_summaries(creators) }
                DetailRow { label: "Punto di contatto", values: node_summaries(contact_point) }
                DetailRow { label: "Parole chiave", values: keywords }
                DetailRow { label: "Lingue", values: languages }
                DetailRow { label: "Versione", values: version_info.into_iter().collect::<Vec<_>>() }
                DetailRow { label: "Data di rilascio", values: issued_on.into_iter().collect::<Vec<_>>() }
                DetailRow { label: "Ultima modifica", values: modified_on.into_iter().collect::<Vec<_>>() }
                DetailRow { label: "Frequenza di aggiornamento", values: accrual_periodicity.into_iter().collect::<Vec<_>>() }
                DetailRow { label: "Conforme a", values: node_summaries(conforms_to) }
            }

            if !distributions.is_empty() {
                section {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    h2 { style: "color: #17324D; font-size: 24px; margin: 0;", "Distribuzioni" }
                    ul {
                        style: "margin: 0; padding-left: 20px;",
                        for (index, distribution) in distributions.into_iter().enumerate() {
                            li {
                                key: "{index}",
                                a {
                                    href: "{distribution.download_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    style: "color: #0066CC; word-break: break-all;",
                                    "{distribution.download_url}"
                                }
                                if let Some(access_url) = distribution.access_url {
                                    " ("
                                    a {
                                        href: "{access_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        style: "color: #0066CC;",
                                        "accesso"
                                    }
                                    ")"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn node_summaries(nodes: impl IntoIterator<Item = NodeSummary>) -> Vec<String> {
    nodes.into_iter().map(|n| if n.summary.is_empty() { n.iri } else { n.summary }).collect()
}

/// Skipped entirely when there is nothing to show.
#[component]
fn DetailRow(label: String, values: Vec<String>) -> Element {
    if values.is_empty() {
        return rsx! {};
    }
    let joined = values.join(", ");
    rsx! {
        dt { style: "font-weight: 700; text-transform: uppercase; font-size: 14px; color: #5C6F82;", "{label}" }
        dd { style: "margin: 0;", "{joined}" }
    }
}
