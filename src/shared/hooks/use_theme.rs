use crate::domain::services::ThemeObserver;
use dioxus::prelude::*;
use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
const THEME_STORAGE_KEY: &str = "theme";

/// Site color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Get the appropriate default theme based on system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl ThemeObserver for Signal<Theme> {
    fn is_dark_mode(&self) -> bool {
        self.read().is_dark()
    }
}

/// Provide the theme signal to the tree, initialised from localStorage or
/// the system color scheme once mounted in the browser.
pub fn use_theme_provider() -> Signal<Theme> {
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));

    use_effect(move || {
        if let Some(initial) = read_initial_theme() {
            theme.set(initial);
        }
    });

    // Keep the root element's class in step for the CSS variables
    use_effect(move || apply_theme_class(theme()));

    theme
}

/// Theme signal from the nearest provider, if any
pub fn use_theme() -> Option<Signal<Theme>> {
    try_use_context::<Signal<Theme>>()
}

#[cfg(target_arch = "wasm32")]
fn read_initial_theme() -> Option<Theme> {
    let window = web_sys::window()?;

    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse::<Theme>().ok());
    if saved.is_some() {
        return saved;
    }

    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    Some(Theme::system_default(prefers_dark))
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_theme: Theme) {}

#[cfg(not(target_arch = "wasm32"))]
fn read_initial_theme() -> Option<Theme> {
    // Server render keeps the default until hydration
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_is_dark() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_system_default() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }
}
