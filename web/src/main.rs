use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{CustomElement, NAV_BAR_TAG};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[zoi] Failed to initialise logging ({err}); continuing without it");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Define elements once per app instance; a repeat definition is harmless.
    use_hook(|| {
        if let Err(err) = ui::register_components() {
            tracing::warn!("component registration skipped: {err}");
        }
        tracing::info!(elements = ?ui::registry::defined_names(), "custom elements defined");
    });

    rsx! {
        // Global app resources
        document::Title { "Zoi" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        CustomElement { tag: NAV_BAR_TAG.to_string() }
    }
}
