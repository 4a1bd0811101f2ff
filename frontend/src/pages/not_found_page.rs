use dioxus::{logger::tracing, prelude::*};

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::info!("no route for /{}", path);
    rsx! {
        Title { "schema - Pagina non trovata" }
        div {
            role: "alert",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 48px 32px; color: #17324D;",
            h1 { style: "font-size: 40px; margin: 0;", "Pagina non trovata" }
            p { style: "font-size: 18px; margin: 0;", "La pagina /{path} non esiste." }
            div {
                Link { to: Route::ExplorePage {}, class: "schema-button", "Torna alla home" }
            }
        }
    }
}
