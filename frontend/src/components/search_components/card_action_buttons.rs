//! Search result card action buttons component.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_content_icons::MdContentCopy, md_editor_icons::MdInsertLink}};

use crate::routes::Route;

const CARD_BUTTON_STYLE: &str = "
    width: 36px;
    height: 36px;
    cursor: pointer;
    border: 1px solid #0066CC;
    border-radius: 4px;
    background: white;
    color: #0066CC;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1px;
    margin: 1px;
";

#[component]
pub fn AssetCardActionButtonDetails(asset_iri: ReadSignal<String>) -> Element {
    rsx! {
        Link {
            to: Route::asset_details(asset_iri()),
            style: CARD_BUTTON_STYLE,
            title: "Apri la scheda della risorsa",
            class: "schema-hover-shadow-background",
            Icon {
                icon: MdOpenInNew,
                style: "width: 20px; height: 20px;"
            }
        }
    }
}

#[component]
pub fn AssetCardActionButtonCopyIri(asset_iri: ReadSignal<String>) -> Element {
    let mut copied = use_signal(|| false);
    let do_copy_iri = use_callback(move |_: ()| {
        let iri = asset_iri();
        spawn(async move {
            match copy_to_clipboard(&iri).await {
                Ok(()) => {
                    tracing::info!("IRI copied to clipboard: {}", iri);
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    copied.set(false);
                }
                Err(e) => tracing::warn!("Cannot copy IRI to clipboard: {e:?}"),
            }
        });
    });
    rsx! {
        button {
            style: CARD_BUTTON_STYLE,
            class: "schema-hover-shadow-background",
            title: if copied() { "IRI copiato" } else { "Copia l'IRI della risorsa" },
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                do_copy_iri.call(());
            },
            if copied() {
                Icon { icon: MdContentCopy, style: "width: 20px; height: 20px;" }
            } else {
                Icon { icon: MdInsertLink, style: "width: 20px; height: 20px;" }
            }
        }
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
