use dioxus::prelude::*;

use crate::components::footer::{EndSection, EndSectionVariant, GITHUB_SCHEMA_URL};

/// Project page
#[component]
pub fn ProjectPage() -> Element {
    rsx! {
        Title { "schema - Il progetto" }
        div {
            id: "x-project-container",
            style: "display: flex; flex-direction: column; gap: 20px; padding: 48px 32px; max-width: 960px; box-sizing: border-box; color: #17324D;",
            h1 { style: "font-size: 40px; margin: 0;", "Il progetto" }
            p {
                style: "font-size: 18px; line-height: 28px; margin: 0;",
                "schema nasce per favorire l'interoperabilità semantica dei dati della pubblica amministrazione, rendendo facili da trovare e riutilizzare le ontologie, i vocabolari controllati e gli schemi dati."
            }
            p {
                style: "font-size: 18px; line-height: 28px; margin: 0;",
                "Il catalogo raccoglie le risorse semantiche dai repository delle amministrazioni, ne verifica la conformità e le rende consultabili attraverso questo sito e le relative API."
            }
            p {
                style: "font-size: 18px; line-height: 28px; margin: 0;",
                "Il codice sorgente è pubblicato su "
                a { href: GITHUB_SCHEMA_URL, style: "color: #0066CC;", "GitHub" }
                "."
            }
        }
        EndSection { variant: EndSectionVariant::Evolving }
    }
}
