use dioxus::prelude::*;

use crate::registry;

/// Renders whatever is registered under `tag` in the process-wide registry.
///
/// Unknown tags render nothing, like an undefined custom element in a document.
#[component]
pub fn CustomElement(tag: String) -> Element {
    match registry::create(&tag) {
        Ok(element) => element,
        Err(err) => {
            tracing::error!(%tag, "cannot instantiate element: {err}");
            rsx! {}
        }
    }
}
