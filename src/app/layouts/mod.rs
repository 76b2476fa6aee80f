pub mod site_layout;

pub use site_layout::SiteLayout;
