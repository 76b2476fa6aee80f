use crate::app::components::Nav;
use crate::app::pages::Route;
use dioxus::prelude::*;

/// Page frame shared by every route: stylesheet, nav, then the page
#[component]
pub fn SiteLayout() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Nav {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
