use dioxus::prelude::*;

use crate::components::footer::{DOCS_ITALIA_GUIDE_URL, EndSection, EndSectionVariant};

const FAQ_ENTRIES: [(&str, &str); 5] = [
    (
        "Che cos'è schema?",
        "schema è il catalogo nazionale della semantica dei dati: raccoglie ontologie, vocabolari controllati e schemi dati pubblicati dalle pubbliche amministrazioni.",
    ),
    (
        "Che cos'è un vocabolario controllato?",
        "Un elenco di termini, con codici e definizioni condivise, usato per descrivere i dati in modo uniforme tra sistemi diversi.",
    ),
    (
        "Che cos'è un'ontologia?",
        "Un modello formale dei concetti di un dominio e delle relazioni tra essi, espresso in linguaggi del web semantico come OWL.",
    ),
    (
        "Come posso cercare una risorsa?",
        "Dalla pagina Cerca puoi inserire un testo libero e filtrare i risultati per tipo di risorsa e per tema.",
    ),
    (
        "Come posso pubblicare una risorsa nel catalogo?",
        "Le amministrazioni pubblicano le proprie risorse in un repository che segue le regole descritte nella guida su Docs Italia; il catalogo le raccoglie periodicamente.",
    ),
];

/// FAQ page
#[component]
pub fn FaqPage() -> Element {
    rsx! {
        Title { "schema - FAQ" }
        div {
            id: "x-faq-container",
            style: "display: flex; flex-direction: column; gap: 24px; padding: 48px 32px; max-width: 960px; box-sizing: border-box;",
            h1 { style: "color: #17324D; font-size: 40px; margin: 0;", "Domande frequenti" }
            for (question, answer) in FAQ_ENTRIES {
                details {
                    key: "{question}",
                    style: "border-bottom: 1px solid #E6E9F2; padding: 12px 0;",
                    summary { style: "font-size: 20px; font-weight: 600; color: #0066CC; cursor: pointer;", "{question}" }
                    p { style: "font-size: 18px; line-height: 28px; color: #17324D;", "{answer}" }
                }
            }
            p {
                style: "font-size: 18px; color: #17324D;",
                "Per maggiori dettagli consulta la "
                a { href: DOCS_ITALIA_GUIDE_URL, style: "color: #0066CC;", "guida su Docs Italia" }
                "."
            }
        }
        EndSection { variant: EndSectionVariant::Evolving }
    }
}
