//! Read-only capabilities the nav consumes
//!
//! The router, theme and auth providers are injected behind these traits
//! so that the nav's derived state is computed from a plain snapshot.

use crate::config::NavConfig;
use crate::domain::models::{MenuState, NavPresentation};

pub trait RouteObserver {
    fn current_path(&self) -> String;
}

pub trait ThemeObserver {
    fn is_dark_mode(&self) -> bool;
}

pub trait AuthObserver {
    fn is_logged_in(&self) -> bool;
}

/// Fixed path, for server rendering and tests
#[derive(Debug, Clone, PartialEq)]
pub struct StaticRoute(pub String);

impl RouteObserver for StaticRoute {
    fn current_path(&self) -> String {
        self.0.clone()
    }
}

/// Fixed flag used for both theme and auth when no provider is mounted
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticFlag(pub bool);

impl ThemeObserver for StaticFlag {
    fn is_dark_mode(&self) -> bool {
        self.0
    }
}

impl AuthObserver for StaticFlag {
    fn is_logged_in(&self) -> bool {
        self.0
    }
}

/// Snapshot of every input the nav renders from
#[derive(Debug, Clone, PartialEq)]
pub struct NavInputs {
    pub path: String,
    pub is_dark_mode: bool,
    pub is_logged_in: bool,
    pub menus: MenuState,
}

impl NavInputs {
    pub fn observe(
        route: &dyn RouteObserver,
        theme: &dyn ThemeObserver,
        auth: &dyn AuthObserver,
        menus: MenuState,
    ) -> Self {
        Self {
            path: route.current_path(),
            is_dark_mode: theme.is_dark_mode(),
            is_logged_in: auth.is_logged_in(),
            menus,
        }
    }

    pub fn presentation(&self, config: &NavConfig) -> NavPresentation {
        NavPresentation::compute(&self.path, self.menus, config)
    }
}
