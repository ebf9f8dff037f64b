use dioxus::prelude::*;

/// Tag the navigation bar is registered under.
pub const NAV_BAR_TAG: &str = "nav-bar";

/// Repository the navigation bar links out to.
pub const SOURCE_URL: &str = "https://github.com/AndrewGossage/Zoi";

pub const SOURCE_LABEL: &str = "Source Code";

/// Registry constructor for [`NAV_BAR_TAG`].
pub fn nav_bar() -> Element {
    rsx! { NavBar {} }
}

/// Static navigation bar with a single outbound link to the source repository.
///
/// Takes no props and holds no signals, so the markup is produced once when the
/// component is constructed and never re-rendered by the component itself.
#[component]
pub fn NavBar() -> Element {
    use_hook(|| tracing::debug!(element = NAV_BAR_TAG, "constructed"));

    rsx! {
        nav {
            a {
                class: "btn",
                href: SOURCE_URL,
                target: "_blank",
                style: "margin-left: auto;",
                "{SOURCE_LABEL}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        dioxus_ssr::render_element(nav_bar())
    }

    #[test]
    fn renders_single_source_link() {
        let html = render();
        assert_eq!(html.matches("<a").count(), 1, "expected one anchor: {html}");
        assert!(html.contains(&format!("href=\"{SOURCE_URL}\"")), "{html}");
        assert!(html.contains("Source Code"), "{html}");
    }

    #[test]
    fn link_opens_in_new_context() {
        let html = render();
        assert!(html.contains("target=\"_blank\""), "{html}");
    }

    #[test]
    fn link_is_a_right_aligned_button() {
        let html = render();
        assert!(html.contains("class=\"btn\""), "{html}");
        assert!(html.contains("margin-left: auto"), "{html}");
    }

    #[test]
    fn anchor_sits_inside_nav() {
        let html = render();
        let nav_open = html.find("<nav").expect("missing <nav>");
        let anchor = html.find("<a").expect("missing <a>");
        let nav_close = html.find("</nav>").expect("missing </nav>");
        assert!(nav_open < anchor && anchor < nav_close, "{html}");
    }

    #[test]
    fn instances_render_identically() {
        assert_eq!(render(), render());
    }
}
