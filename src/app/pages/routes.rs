use crate::app::layouts::SiteLayout;
use crate::config;
use crate::domain::services::RouteObserver;
use crate::shared::hooks::{use_auth_provider, use_theme_provider};
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/pricing")]
    Pricing {},
    #[route("/docs")]
    Docs {},
    #[route("/blog")]
    Blog {},
    #[route("/company")]
    Company {},

    // Campaign section, styled by the nav like the home page
    #[route("/launch-week")]
    LaunchWeek {},
    #[route("/launch-week/:day")]
    LaunchWeekDay { day: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl RouteObserver for Route {
    fn current_path(&self) -> String {
        self.to_string()
    }
}

#[component]
pub fn App() -> Element {
    let nav_config = use_context_provider(config::current);
    use_theme_provider();
    use_auth_provider(nav_config.auth_storage_key.clone());

    use_effect(|| {
        tracing::info!("Site nav app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Placeholder body for marketing pages outside the nav's scope
#[component]
fn PageShell(title: String, children: Element) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            {children}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        PageShell { title: "Build in a weekend. Scale to millions.".to_string(),
            p { class: "c-page__lead", "Launch week is live." }
        }
    }
}

#[component]
fn Pricing() -> Element {
    rsx! { PageShell { title: "Pricing".to_string() } }
}

#[component]
fn Docs() -> Element {
    rsx! { PageShell { title: "Documentation".to_string() } }
}

#[component]
fn Blog() -> Element {
    rsx! { PageShell { title: "Blog".to_string() } }
}

#[component]
fn Company() -> Element {
    rsx! { PageShell { title: "Company".to_string() } }
}

#[component]
fn LaunchWeek() -> Element {
    rsx! {
        PageShell { title: "Launch Week".to_string(),
            ul { class: "c-page__days",
                for day in 1..=5 {
                    li { key: "{day}",
                        Link {
                            to: Route::LaunchWeekDay { day: format!("day-{day}") },
                            "Day {day}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LaunchWeekDay(day: String) -> Element {
    rsx! { PageShell { title: format!("Launch Week: {day}") } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        PageShell { title: "Page not found".to_string(),
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
