//! Structured logging for the navigation chrome
//!
//! Every nav event goes through one of these helpers so that the
//! `operation` field stays consistent across components and hooks.

/// Operation tags carried on every nav log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    VisualMode,
    MenuToggle,
    ScrollLock,
    Navigation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::VisualMode => "visual_mode",
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::ScrollLock => "scroll_lock",
            LogOperation::Navigation => "navigation",
            LogOperation::Config => "config",
        }
    }
}

/// Log the derived visual mode for the current render
pub fn log_visual_mode(path: &str, mode: &str, any_menu_open: bool) {
    tracing::debug!(
        operation = LogOperation::VisualMode.as_str(),
        path = path,
        mode = mode,
        any_menu_open = any_menu_open,
        "Derived nav visual mode"
    );
}

/// Log a menu opening or closing
pub fn log_menu_toggle(menu: &str, open: bool) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        menu = menu,
        open = open,
        "Menu toggled"
    );
}

/// Log scroll lock acquisition
pub fn log_scroll_lock_acquired() {
    tracing::debug!(
        operation = LogOperation::ScrollLock.as_str(),
        scroll_disabled = true,
        "Page scroll locked"
    );
}

/// Log scroll lock release
pub fn log_scroll_lock_released() {
    tracing::debug!(
        operation = LogOperation::ScrollLock.as_str(),
        scroll_disabled = false,
        "Page scroll released"
    );
}

/// Log a scroll lock backend failure (the page is left as-is)
pub fn log_scroll_lock_error(action: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ScrollLock.as_str(),
        action = action,
        error = error,
        "Scroll lock backend failed"
    );
}

/// Log a route change observed by the nav
pub fn log_navigation(path: &str, closed_mobile_menu: bool) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        closed_mobile_menu = closed_mobile_menu,
        "Route changed"
    );
}

/// Log a config file being applied
pub fn log_config_loaded(path: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        path = path,
        "Navigation config loaded"
    );
}

/// Log a config error that was replaced by defaults
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid navigation config, using defaults"
    );
}
