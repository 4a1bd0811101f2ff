//! Error boundary component for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in boundary {}: {:?}", boundary_name(), _err);
                rsx! {
                    div {
                        role: "alert",
                        style: "margin: 24px; padding: 16px; border: 1px solid #D9364F; border-radius: 4px; background: #FFF5F6;",
                        h1 {
                            style: "color: #D9364F; font-size: 32px; margin: 0 0 12px 0;",
                            "Si è verificato un errore",
                        }
                        p {
                            style: "color: #5C6F82; font-size: 16px;",
                            "Sezione: {boundary_name}"
                        }
                        Link {
                            to: Route::ExplorePage {},
                            style: "color: #0066CC; font-size: 18px; font-weight: 600;",
                            "Torna alla pagina iniziale"
                        }
                        pre {
                            style: "color: #17324D; padding: 10px; margin-top: 16px; text-wrap: auto; font-size: 12px;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Errore sconosciuto".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "schema-button-outline",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Riprova"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color: #D9364F; font-size: 24px; margin: 5px;",
                "Impossibile caricare il contenuto",
            }

            pre {
                style: "color: #5C6F82; padding: 10px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 300px; overflow-y: auto; font-size: 12px;",
                "{error_txt}"
            }

            {children}
        }
    }
}
