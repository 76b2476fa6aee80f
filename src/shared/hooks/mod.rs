// Custom Dioxus hooks
pub mod use_auth;
pub mod use_nav_menus;
pub mod use_scroll_lock;
pub mod use_theme;

pub use use_auth::{use_auth, use_auth_provider, AuthState};
pub use use_nav_menus::{use_close_on_navigation, use_nav_menus, NavMenus};
pub use use_scroll_lock::{use_scroll_lock, SharedScrollLock};
pub use use_theme::{use_theme, use_theme_provider, Theme};
