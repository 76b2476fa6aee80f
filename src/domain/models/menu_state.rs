/// The three menus the nav owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMenu {
    Mobile,
    Product,
    Developers,
}

impl NavMenu {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavMenu::Mobile => "mobile",
            NavMenu::Product => "product",
            NavMenu::Developers => "developers",
        }
    }
}

/// Open/closed flags of the nav's local menus, as of one render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub product_open: bool,
    pub developers_open: bool,
}

impl MenuState {
    pub fn new(mobile_open: bool, product_open: bool, developers_open: bool) -> Self {
        Self {
            mobile_open,
            product_open,
            developers_open,
        }
    }

    pub fn is_open(&self, menu: NavMenu) -> bool {
        match menu {
            NavMenu::Mobile => self.mobile_open,
            NavMenu::Product => self.product_open,
            NavMenu::Developers => self.developers_open,
        }
    }

    pub fn any_dropdown_open(&self) -> bool {
        self.product_open || self.developers_open
    }

    pub fn any_open(&self) -> bool {
        self.mobile_open || self.any_dropdown_open()
    }
}
