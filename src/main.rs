//! Site Nav - Main Entry Point
//!
//! Server build: installs logging and the nav config, then serves the app
//! with server-side rendering. Browser build: hydrates the same app.

use site_nav::app::App;

// Server entry point - dioxus::launch creates its own runtime
#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use site_nav::config::{self, NavConfig};

    // Initialize tracing BEFORE dioxus::launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Site Nav...");

    let nav_config = NavConfig::load().context("failed to load navigation config")?;
    tracing::info!(
        launch_week_marker = %nav_config.launch_week_marker,
        dropdowns_suppress_launch_week = nav_config.dropdowns_suppress_launch_week,
        "Navigation config ready"
    );
    config::install(nav_config);

    dioxus::launch(App);
    Ok(())
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Site Nav - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
