use crate::domain::models::{MenuState, NavMenu};
use crate::shared::logging::{log_menu_toggle, log_navigation};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Local open/closed state of the nav's three menus
#[derive(Clone, Copy, PartialEq)]
pub struct NavMenus {
    pub mobile: Signal<bool>,
    pub product: Signal<bool>,
    pub developers: Signal<bool>,
}

impl NavMenus {
    /// Current flags. Reading subscribes the calling component.
    pub fn snapshot(&self) -> MenuState {
        MenuState::new((self.mobile)(), (self.product)(), (self.developers)())
    }

    pub fn set(&mut self, menu: NavMenu, open: bool) {
        let signal = match menu {
            NavMenu::Mobile => &mut self.mobile,
            NavMenu::Product => &mut self.product,
            NavMenu::Developers => &mut self.developers,
        };
        if *signal.peek() != open {
            signal.set(open);
            log_menu_toggle(menu.as_str(), open);
        }
    }

    pub fn open_mobile(&mut self) {
        self.set(NavMenu::Mobile, true);
    }

    pub fn close_mobile(&mut self) {
        self.set(NavMenu::Mobile, false);
    }

    pub fn set_product_open(&mut self, open: bool) {
        self.set(NavMenu::Product, open);
    }

    pub fn set_developers_open(&mut self, open: bool) {
        self.set(NavMenu::Developers, open);
    }

    pub fn close_all(&mut self) {
        self.close_mobile();
        self.set_product_open(false);
        self.set_developers_open(false);
    }
}

/// Hook to manage nav menu state. Everything starts closed.
pub fn use_nav_menus() -> NavMenus {
    let mobile = use_signal(|| false);
    let product = use_signal(|| false);
    let developers = use_signal(|| false);

    NavMenus {
        mobile,
        product,
        developers,
    }
}

/// Close every menu whenever the route path changes.
pub fn use_close_on_navigation(path: String, mut menus: NavMenus) {
    let last_path = use_hook(|| Rc::new(RefCell::new(path.clone())));

    use_effect(use_reactive((&path,), move |(path,)| {
        if *last_path.borrow() == path {
            return;
        }
        let was_open = *menus.mobile.peek();
        menus.close_all();
        log_navigation(&path, was_open);
        *last_path.borrow_mut() = path;
    }));
}
