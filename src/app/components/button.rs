use crate::domain::models::CtaVariant;
use dioxus::prelude::*;

/// Button-styled anchor. CTAs leave the marketing site for the dashboard,
/// so this is a plain `a` rather than a router link.
#[component]
pub fn LinkButton(href: String, variant: CtaVariant, children: Element) -> Element {
    let variant_class = match variant {
        CtaVariant::Default => "c-button--default",
        CtaVariant::Primary => "c-button--primary",
    };

    rsx! {
        a {
            class: "c-button {variant_class}",
            href: "{href}",
            {children}
        }
    }
}
