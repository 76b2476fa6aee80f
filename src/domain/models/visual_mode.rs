//! Nav visual mode
//!
//! The nav bar has two looks: a transparent overlay used on the home page
//! and the launch-week section, and the solid default used everywhere
//! else. Which one applies is a pure function of the current path and the
//! menu flags, recomputed on every render.

use super::menu_state::MenuState;
use crate::config::NavConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    Default,
    LaunchWeek,
}

/// Class names for the parts of the bar that change with the visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub backdrop: &'static str,
    pub bar: &'static str,
    /// Bar classes on launch-week pages, where the bottom border is dropped
    pub bar_borderless: &'static str,
    pub link: &'static str,
    pub hamburger: &'static str,
}

const DEFAULT_STYLE: NavStyle = NavStyle {
    backdrop: "c-nav__backdrop c-nav__backdrop--solid",
    bar: "c-nav__bar",
    bar_borderless: "c-nav__bar",
    link: "c-nav__link",
    hamburger: "c-nav__hamburger",
};

const LAUNCH_WEEK_STYLE: NavStyle = NavStyle {
    backdrop: "c-nav__backdrop c-nav__backdrop--transparent",
    bar: "c-nav__bar c-nav__bar--launch-week",
    bar_borderless: "c-nav__bar c-nav__bar--launch-week c-nav__bar--borderless",
    link: "c-nav__link c-nav__link--inverted",
    hamburger: "c-nav__hamburger c-nav__hamburger--inverted",
};

impl VisualMode {
    /// Launch-week styling applies on the home page or any launch-week path,
    /// unless a menu that suppresses it is open.
    pub fn derive(path: &str, menus: MenuState, config: &NavConfig) -> Self {
        let eligible = path == config.home_path || is_launch_week_page(path, config);
        let suppressed = menus.mobile_open
            || (config.dropdowns_suppress_launch_week && menus.any_dropdown_open());

        if eligible && !suppressed {
            VisualMode::LaunchWeek
        } else {
            VisualMode::Default
        }
    }

    pub fn style(self) -> &'static NavStyle {
        match self {
            VisualMode::Default => &DEFAULT_STYLE,
            VisualMode::LaunchWeek => &LAUNCH_WEEK_STYLE,
        }
    }

    pub fn is_launch_week(self) -> bool {
        self == VisualMode::LaunchWeek
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisualMode::Default => "default",
            VisualMode::LaunchWeek => "launch_week",
        }
    }
}

pub fn is_launch_week_page(path: &str, config: &NavConfig) -> bool {
    path.contains(config.launch_week_marker.as_str())
}

/// Everything the bar needs to know about its look for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPresentation {
    pub mode: VisualMode,
    pub style: &'static NavStyle,
    pub is_launch_week_page: bool,
}

impl NavPresentation {
    pub fn compute(path: &str, menus: MenuState, config: &NavConfig) -> Self {
        let mode = VisualMode::derive(path, menus, config);
        Self {
            mode,
            style: mode.style(),
            is_launch_week_page: is_launch_week_page(path, config),
        }
    }

    pub fn hide_bottom_border(&self) -> bool {
        self.is_launch_week_page && self.mode.is_launch_week()
    }

    pub fn bar_class(&self) -> &'static str {
        if self.hide_bottom_border() {
            self.style.bar_borderless
        } else {
            self.style.bar
        }
    }

    /// The "Launch Week" wordmark next to the logo
    pub fn show_launch_week_link(&self) -> bool {
        self.is_launch_week_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn closed() -> MenuState {
        MenuState::default()
    }

    #[test]
    fn test_home_page_all_closed_is_launch_week() {
        let config = NavConfig::default();
        let presentation = NavPresentation::compute("/", closed(), &config);
        assert_eq!(presentation.mode, VisualMode::LaunchWeek);
        assert_eq!(
            presentation.style.backdrop,
            "c-nav__backdrop c-nav__backdrop--transparent"
        );
    }

    #[test]
    fn test_pricing_all_closed_is_default() {
        let config = NavConfig::default();
        let presentation = NavPresentation::compute("/pricing", closed(), &config);
        assert_eq!(presentation.mode, VisualMode::Default);
        assert_eq!(presentation.style.backdrop, "c-nav__backdrop c-nav__backdrop--solid");
    }

    #[test]
    fn test_opening_mobile_menu_on_home_forces_default() {
        let config = NavConfig::default();
        let before = VisualMode::derive("/", closed(), &config);
        let after = VisualMode::derive("/", MenuState::new(true, false, false), &config);
        assert_eq!(before, VisualMode::LaunchWeek);
        assert_eq!(after, VisualMode::Default);
    }

    #[rstest]
    #[case("/", VisualMode::LaunchWeek)]
    #[case("/launch-week", VisualMode::LaunchWeek)]
    #[case("/launch-week/day-3", VisualMode::LaunchWeek)]
    #[case("/blog/launch-week-recap", VisualMode::LaunchWeek)]
    #[case("/pricing", VisualMode::Default)]
    #[case("/docs", VisualMode::Default)]
    #[case("", VisualMode::Default)]
    #[case("//", VisualMode::Default)]
    fn test_mode_by_path(#[case] path: &str, #[case] expected: VisualMode) {
        let config = NavConfig::default();
        assert_eq!(VisualMode::derive(path, closed(), &config), expected);
    }

    #[rstest]
    #[case(MenuState::new(false, true, false))]
    #[case(MenuState::new(false, false, true))]
    #[case(MenuState::new(false, true, true))]
    fn test_open_dropdown_suppresses_by_default(#[case] menus: MenuState) {
        let config = NavConfig::default();
        assert_eq!(VisualMode::derive("/", menus, &config), VisualMode::Default);
    }

    #[test]
    fn test_hover_policy_can_keep_launch_week_under_dropdown() {
        let config = NavConfig {
            dropdowns_suppress_launch_week: false,
            ..NavConfig::default()
        };
        let dropdown = MenuState::new(false, true, false);
        let mobile = MenuState::new(true, true, false);
        assert_eq!(VisualMode::derive("/", dropdown, &config), VisualMode::LaunchWeek);
        assert_eq!(VisualMode::derive("/", mobile, &config), VisualMode::Default);
    }

    #[test]
    fn test_custom_marker() {
        let config = NavConfig {
            launch_week_marker: "summit".to_string(),
            ..NavConfig::default()
        };
        assert_eq!(VisualMode::derive("/summit/2024", closed(), &config), VisualMode::LaunchWeek);
        assert_eq!(VisualMode::derive("/launch-week", closed(), &config), VisualMode::Default);
    }

    #[test]
    fn test_border_hidden_only_on_launch_week_pages_in_launch_week_mode() {
        let config = NavConfig::default();

        let home = NavPresentation::compute("/", closed(), &config);
        assert!(!home.hide_bottom_border());
        assert!(!home.show_launch_week_link());
        assert_eq!(home.bar_class(), "c-nav__bar c-nav__bar--launch-week");

        let lw = NavPresentation::compute("/launch-week", closed(), &config);
        assert!(lw.hide_bottom_border());
        assert!(lw.show_launch_week_link());
        assert_eq!(
            lw.bar_class(),
            "c-nav__bar c-nav__bar--launch-week c-nav__bar--borderless"
        );

        let lw_open = NavPresentation::compute("/launch-week", MenuState::new(false, true, false), &config);
        assert!(!lw_open.hide_bottom_border());
        assert!(lw_open.show_launch_week_link());
        assert_eq!(lw_open.bar_class(), "c-nav__bar");
    }

    #[test]
    fn test_style_records_are_distinct() {
        let default = VisualMode::Default.style();
        let launch = VisualMode::LaunchWeek.style();
        assert_ne!(default.backdrop, launch.backdrop);
        assert_ne!(default.link, launch.link);
        assert_ne!(default.hamburger, launch.hamburger);
    }

    fn path_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("/".to_string()),
            "/[a-z/-]{0,24}",
            "/[a-z]{0,6}/?launch-week[a-z/-]{0,10}",
            ".{0,16}",
        ]
    }

    proptest! {
        #[test]
        fn prop_launch_week_iff_eligible_and_all_closed(
            path in path_strategy(),
            mobile in any::<bool>(),
            product in any::<bool>(),
            developers in any::<bool>(),
        ) {
            let config = NavConfig::default();
            let menus = MenuState::new(mobile, product, developers);
            let expected = (path == "/" || path.contains("launch-week"))
                && !mobile && !product && !developers;
            prop_assert_eq!(
                VisualMode::derive(&path, menus, &config).is_launch_week(),
                expected
            );
        }
    }
}
