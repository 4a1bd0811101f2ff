//! Footer links and the closing call-to-action section.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::go_icons::GoMarkGithub};

pub const DOCS_ITALIA_GUIDE_URL: &str = "https://docs.italia.it/italia/schema/schema-catalogo-guida/it/stabile/";
pub const GITHUB_SCHEMA_URL: &str = "https://github.com/italia/dati-semantic-backend";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndSectionVariant {
    /// Shown under search results.
    Contribute,
    /// Shown on the informational pages.
    Evolving,
}

#[component]
pub fn EndSection(variant: EndSectionVariant) -> Element {
    rsx! {
        section {
            id: "x-end-section",
            style: "
                background-color: #004D99;
                color: white;
                padding: 48px 32px;
                margin-top: 32px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            {match variant {
                EndSectionVariant::Contribute => rsx! {
                    h2 { style: "margin: 0; font-size: 28px;", "Non hai trovato quello che cercavi? Contribuisci al catalogo" }
                    p {
                        style: "margin: 0; font-size: 18px;",
                        "Scopri come contribuire al catalogo con un contenuto semantico, leggi la guida su Docs Italia"
                    }
                    div {
                        a {
                            class: "schema-button",
                            href: DOCS_ITALIA_GUIDE_URL,
                            role: "button",
                            title: "vai alla pagina di docs italia",
                            "CONTRIBUISCI"
                        }
                    }
                },
                EndSectionVariant::Evolving => rsx! {
                    h2 { style: "margin: 0; font-size: 28px;", "Schema è un catalogo in continua evoluzione" }
                    p {
                        style: "margin: 0; font-size: 18px;",
                        "Se trovi errori o bug apri una issue su GitHub. Se vuoi contribuire al catalogo con un contenuto leggi la guida su Docs Italia."
                    }
                    div {
                        style: "display: flex; flex-direction: row; gap: 16px; flex-wrap: wrap;",
                        a {
                            class: "schema-button",
                            href: GITHUB_SCHEMA_URL,
                            role: "button",
                            title: "vai su github di schema",
                            style: "display: inline-flex; align-items: center; gap: 8px;",
                            "Vai su GitHub"
                            Icon { icon: GoMarkGithub, style: "width: 18px; height: 18px;" }
                        }
                        a {
                            class: "schema-button-outline-light",
                            href: DOCS_ITALIA_GUIDE_URL,
                            role: "button",
                            title: "vai alla pagina di docs italia",
                            "Scopri come contribuire"
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn FooterLinks() -> Element {
    rsx! {
        footer {
            role: "contentinfo",
            style: "
                background-color: #00264D;
                padding: 16px 32px;
                display: flex;
                flex-direction: row;
                gap: 24px;
                flex-shrink: 0;
            ",
            for label in ["Note Legali", "Privacy Policy", "Dichiarazione di Accessibilità"] {
                a {
                    key: "{label}",
                    href: "#",
                    style: "color: white; font-size: 14px; font-weight: 600; text-decoration: none;",
                    "{label}"
                }
            }
        }
    }
}
