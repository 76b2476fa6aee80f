use crate::app::components::brand::{GitHubButton, Logo};
use crate::app::components::button::LinkButton;
use crate::app::components::hamburger_button::HamburgerButton;
use crate::app::components::mobile_menu::MobileMenu;
use crate::app::components::nav_dropdown::{NavDropdown, PanelList};
use crate::app::pages::Route;
use crate::config::NavConfig;
use crate::domain::models::{
    cta_links, desktop_links, mobile_links, mobile_sign_in, DEVELOPERS_ENTRIES, PRODUCT_ENTRIES,
};
use crate::domain::services::{AuthObserver, NavInputs, RouteObserver, StaticFlag, ThemeObserver};
use crate::shared::hooks::{
    use_auth, use_close_on_navigation, use_nav_menus, use_scroll_lock, use_theme,
};
use crate::shared::logging::log_visual_mode;
use dioxus::prelude::*;

/// Site navigation: sticky top bar, mega-menus, CTAs and the mobile flyout.
///
/// The bar switches to its transparent launch-week look on the home page
/// and launch-week pages while every menu is closed. Page scrolling is
/// locked for as long as the mobile flyout is open.
#[component]
pub fn Nav() -> Element {
    let config = try_use_context::<NavConfig>().unwrap_or_default();
    let route = use_route::<Route>();
    let path = route.current_path();

    let mut menus = use_nav_menus();
    use_close_on_navigation(path.clone(), menus);
    use_scroll_lock(menus.mobile);

    let theme = use_theme();
    let auth = use_auth();
    let fallback = StaticFlag::default();
    let theme_observer: &dyn ThemeObserver = match &theme {
        Some(signal) => signal,
        None => &fallback,
    };
    let auth_observer: &dyn AuthObserver = match &auth {
        Some(signal) => signal,
        None => &fallback,
    };

    let inputs = NavInputs::observe(&route, theme_observer, auth_observer, menus.snapshot());
    let presentation = inputs.presentation(&config);

    let mode = presentation.mode;
    let any_open = inputs.menus.any_open();
    use_effect(use_reactive((&mode, &path, &any_open), |(mode, path, any_open)| {
        log_visual_mode(&path, mode.as_str(), any_open);
    }));

    let style = presentation.style;
    let backdrop_class = style.backdrop;
    let bar_class = presentation.bar_class();
    let link_class = style.link;
    let show_launch_week_link = presentation.show_launch_week_link();
    let menu_state = inputs.menus;

    rsx! {
        div { class: "c-nav",
            div { class: "{backdrop_class}" }
            nav { class: "{bar_class}",
                div { class: "c-nav__inner",
                    HamburgerButton {
                        class: style.hamburger,
                        expanded: menu_state.mobile_open,
                        on_open: move |_| menus.open_mobile(),
                    }

                    div { class: "c-nav__main",
                        div { class: "c-nav__left",
                            div { class: "c-nav__brand",
                                Logo { dark: inputs.is_dark_mode, name: config.brand_name.clone() }
                                if show_launch_week_link {
                                    Link {
                                        to: Route::LaunchWeek {},
                                        class: "c-nav__launch-week-link",
                                        "Launch Week"
                                    }
                                }
                            }

                            div { class: "c-nav__desktop",
                                ul { class: "c-nav-menu",
                                    NavDropdown {
                                        label: "Product",
                                        open: menu_state.product_open,
                                        on_open_change: move |open| menus.set_product_open(open),
                                        PanelList { entries: PRODUCT_ENTRIES }
                                    }
                                    NavDropdown {
                                        label: "Developers",
                                        open: menu_state.developers_open,
                                        on_open_change: move |open| menus.set_developers_open(open),
                                        PanelList { entries: DEVELOPERS_ENTRIES }
                                    }
                                }
                                for link in desktop_links() {
                                    Link {
                                        key: "{link.label}",
                                        to: link.href.clone(),
                                        class: "{link_class}",
                                        "{link.label}"
                                    }
                                }
                            }
                        }

                        div { class: "c-nav__actions",
                            GitHubButton { href: config.github_url.clone() }
                            for cta in cta_links(inputs.is_logged_in, &config) {
                                LinkButton {
                                    key: "{cta.label}",
                                    href: cta.href.clone(),
                                    variant: cta.variant,
                                    "{cta.label}"
                                }
                            }
                        }
                    }
                }

                MobileMenu {
                    open: menu_state.mobile_open,
                    on_close: move |_| menus.close_mobile(),
                    sign_in: mobile_sign_in(&config),
                    links: mobile_links(&config),
                }
            }
        }
    }
}
