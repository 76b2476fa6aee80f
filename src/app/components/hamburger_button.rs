use dioxus::prelude::*;

/// Opens the mobile flyout. Hidden from large viewports by CSS.
#[component]
pub fn HamburgerButton(
    class: &'static str,
    expanded: bool,
    on_open: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "c-nav__hamburger-wrap",
            button {
                class: "{class}",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |evt| on_open.call(evt),
                span { class: "sr-only", "Open main menu" }
                svg {
                    class: "c-nav__hamburger-icon",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    "aria-hidden": "true",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M4 6h16M4 12h16M4 18h16",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Host(expanded: bool) -> Element {
        rsx! {
            HamburgerButton { class: "c-nav__hamburger", expanded, on_open: |_| {} }
        }
    }

    fn render(expanded: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Host, HostProps { expanded });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_reports_flyout_state() {
        assert!(render(false).contains(r#"aria-expanded="false""#));
        assert!(render(true).contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn test_icon_hidden_from_assistive_tech() {
        let html = render(false);
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
        assert!(html.contains("Open main menu"), "{html}");
    }
}
