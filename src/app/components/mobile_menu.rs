use crate::app::components::transition::{Transition, TransitionClasses};
use crate::domain::models::NavLink;
use dioxus::prelude::*;

const FLYOUT_TRANSITION: TransitionClasses = TransitionClasses {
    enter: "u-transition u-ease-out u-duration-200",
    enter_from: "u-opacity-0 u-translate-y-1",
    enter_to: "u-opacity-100 u-translate-y-0",
    leave: "u-transition u-ease-in u-duration-150",
    leave_from: "u-opacity-100 u-translate-y-0",
    leave_to: "u-opacity-0 u-translate-y-1",
};

/// Full-screen flyout for small viewports
#[component]
pub fn MobileMenu(
    open: bool,
    on_close: EventHandler<MouseEvent>,
    sign_in: NavLink,
    links: Vec<NavLink>,
) -> Element {
    rsx! {
        Transition {
            show: open,
            appear: true,
            classes: FLYOUT_TRANSITION,
            enter_ms: 200,
            leave_ms: 150,
            div { class: "c-mobile-menu",
                div { class: "c-mobile-menu__close-wrap",
                    button {
                        class: "c-mobile-menu__close",
                        r#type: "button",
                        onclick: move |evt| on_close.call(evt),
                        span { class: "sr-only", "Close menu" }
                        svg {
                            class: "c-mobile-menu__close-icon",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            "aria-hidden": "true",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M6 18L18 6M6 6l12 12",
                            }
                        }
                    }
                }

                div { class: "c-mobile-menu__body",
                    div { class: "c-mobile-menu__group",
                        a {
                            class: "c-mobile-menu__sign-in",
                            href: "{sign_in.href}",
                            "{sign_in.label}"
                        }
                    }
                    div { class: "c-mobile-menu__group",
                        for link in links {
                            Link {
                                key: "{link.label}",
                                to: link.href.clone(),
                                new_tab: link.new_tab,
                                class: "c-mobile-menu__link",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
