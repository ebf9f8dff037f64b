#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{CustomElement, NAV_BAR_TAG};

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(format!("Zoi – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[zoi] Failed to initialise logging ({err}); continuing without it");
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        if let Err(err) = ui::register_components() {
            tracing::warn!("component registration skipped: {err}");
        }
        tracing::info!(elements = ?ui::registry::defined_names(), "custom elements defined");
    });

    let theme = ui::THEME_CSS_INLINE;

    rsx! {
        // Inline the shared theme so packaged builds need no asset directory.
        document::Style { "{theme}" }

        CustomElement { tag: NAV_BAR_TAG.to_string() }
    }
}
