// Domain models for the nav chrome
// Pure Rust, no framework dependencies

pub mod menu_state;
pub mod nav_links;
pub mod visual_mode;

pub use menu_state::{MenuState, NavMenu};
pub use nav_links::{
    cta_links, desktop_links, mobile_links, mobile_sign_in, CtaLink, CtaVariant, NavLink,
    PanelEntry, DEVELOPERS_ENTRIES, PRODUCT_ENTRIES,
};
pub use visual_mode::{is_launch_week_page, NavPresentation, NavStyle, VisualMode};
