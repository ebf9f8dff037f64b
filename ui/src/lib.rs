//! Shared UI crate for Zoi: the navigation bar element and the registry hosts use to
//! instantiate it by tag name.

use dioxus::prelude::*;

pub mod registry;

pub mod components {
    // Static source-code navigation bar (components/nav_bar.rs)
    pub mod nav_bar;
    pub use nav_bar::{NavBar, NAV_BAR_TAG, SOURCE_LABEL, SOURCE_URL};

    // Registry-backed host element (components/custom_element.rs)
    mod custom_element;
    pub use custom_element::CustomElement;
}

/// Shared theme; web hosts link it, desktop inlines `THEME_CSS_INLINE`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Define every element this crate provides on the process-wide registry.
///
/// Call once at start-up. A second call reports `AlreadyDefined` and leaves the
/// existing definitions untouched.
pub fn register_components() -> Result<(), registry::RegistryError> {
    registry::define(components::NAV_BAR_TAG, components::nav_bar::nav_bar)
}
