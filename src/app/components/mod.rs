pub mod brand;
pub mod button;
pub mod hamburger_button;
pub mod mobile_menu;
pub mod nav;
pub mod nav_dropdown;
pub mod transition;

pub use brand::{GitHubButton, Logo};
pub use button::LinkButton;
pub use hamburger_button::HamburgerButton;
pub use mobile_menu::MobileMenu;
pub use nav::Nav;
pub use nav_dropdown::{NavDropdown, PanelList};
pub use transition::{Transition, TransitionClasses, TransitionPhase};
