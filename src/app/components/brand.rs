use crate::app::pages::Route;
use dioxus::prelude::*;

/// Site wordmark; the light variant sits on dark backgrounds
#[component]
pub fn Logo(dark: bool, name: String) -> Element {
    let variant = if dark { "c-logo--light" } else { "c-logo--dark" };

    rsx! {
        Link {
            to: Route::Home {},
            class: "c-logo {variant}",
            span { class: "c-logo__mark", aria_hidden: "true", "◆" }
            span { class: "c-logo__wordmark", "{name}" }
        }
    }
}

#[component]
pub fn GitHubButton(href: String) -> Element {
    rsx! {
        a {
            class: "c-button c-button--default c-github-button",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            svg {
                class: "c-github-button__icon",
                view_box: "0 0 16 16",
                fill: "currentColor",
                "aria-hidden": "true",
                path {
                    d: "M8 .2a8 8 0 0 0-2.5 15.6c.4 0 .5-.2.5-.4v-1.5c-2.2.5-2.7-1-2.7-1-.4-.9-.9-1.2-.9-1.2-.7-.5.1-.5.1-.5.8.1 1.2.8 1.2.8.7 1.3 1.9.9 2.3.7.1-.5.3-.9.5-1.1-1.8-.2-3.6-.9-3.6-4 0-.9.3-1.6.8-2.1-.1-.2-.4-1 .1-2.1 0 0 .7-.2 2.2.8a7.5 7.5 0 0 1 4 0c1.5-1 2.2-.8 2.2-.8.4 1.1.2 1.9.1 2.1.5.6.8 1.3.8 2.1 0 3.1-1.9 3.8-3.6 4 .3.3.6.8.6 1.5v2.2c0 .2.1.5.6.4A8 8 0 0 0 8 .2z",
                }
            }
            span { "Star us on GitHub" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_icon_hidden_from_assistive_tech() {
        let html = dioxus_ssr::render_element(rsx! {
            GitHubButton { href: "https://github.com/acme/site".to_string() }
        });
        assert!(html.contains(r#"href="https://github.com/acme/site""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    }
}
