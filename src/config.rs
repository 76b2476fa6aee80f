//! Navigation configuration
//!
//! Everything the nav treats as site configuration rather than logic:
//! which paths count as launch-week pages, whether dropdowns suppress the
//! launch-week styling, the brand shown in the logo, and the outbound URLs
//! used by the CTA buttons.

use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_config_fallback, log_config_loaded};
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Environment variable naming a JSON config file (native builds only).
pub const CONFIG_ENV_VAR: &str = "SITE_NAV_CONFIG";

static INSTALLED: OnceCell<NavConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Site name rendered as the logo wordmark.
    pub brand_name: String,
    /// Path of the home page, which always qualifies for launch-week styling.
    pub home_path: String,
    /// Substring identifying the launch-week section.
    pub launch_week_marker: String,
    /// Whether an open Product/Developers dropdown forces default styling.
    pub dropdowns_suppress_launch_week: bool,
    /// Dashboard entry point for signed-out visitors (sign in / sign up).
    pub dashboard_url: String,
    /// Dashboard landing page for signed-in visitors.
    pub signed_in_dashboard_path: String,
    pub github_url: String,
    /// localStorage key whose presence means the visitor has a session.
    pub auth_storage_key: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand_name: "Supabase".to_string(),
            home_path: "/".to_string(),
            launch_week_marker: "launch-week".to_string(),
            dropdowns_suppress_launch_week: true,
            dashboard_url: "/dashboard".to_string(),
            signed_in_dashboard_path: "/dashboard/projects".to_string(),
            github_url: "https://github.com".to_string(),
            auth_storage_key: "site.auth.token".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.home_path.starts_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "home_path must start with '/': {}",
                self.home_path
            )));
        }
        if self.launch_week_marker.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "launch_week_marker must not be empty".to_string(),
            ));
        }
        if self.brand_name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "brand_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)?;
                let config = Self::from_json(&raw)?;
                log_config_loaded(&path);
                Ok(config)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }

    /// Like [`NavConfig::load`], but falls back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log_config_fallback(&e.to_string());
            Self::default()
        })
    }
}

/// Install the process-wide config. Only the first call wins.
pub fn install(config: NavConfig) -> bool {
    INSTALLED.set(config).is_ok()
}

/// The installed config, or one loaded from the environment on first use.
pub fn current() -> NavConfig {
    INSTALLED.get_or_init(NavConfig::load_or_default).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_site_layout() {
        let config = NavConfig::default();
        assert_eq!(config.home_path, "/");
        assert_eq!(config.launch_week_marker, "launch-week");
        assert!(config.dropdowns_suppress_launch_week);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = NavConfig::from_json(r#"{ "github_url": "https://github.com/acme/site" }"#)
            .unwrap();
        assert_eq!(
            config,
            NavConfig {
                github_url: "https://github.com/acme/site".to_string(),
                ..NavConfig::default()
            }
        );
    }

    #[test]
    fn test_from_json_hover_policy() {
        let config =
            NavConfig::from_json(r#"{ "dropdowns_suppress_launch_week": false }"#).unwrap();
        assert!(!config.dropdowns_suppress_launch_week);
    }

    #[test]
    fn test_from_json_rejects_relative_home() {
        let err = NavConfig::from_json(r#"{ "home_path": "home" }"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_blank_marker() {
        let err = NavConfig::from_json(r#"{ "launch_week_marker": "  " }"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_brand_name() {
        let config = NavConfig::from_json(r#"{ "brand_name": "Acme" }"#).unwrap();
        assert_eq!(config.brand_name, "Acme");
        assert_eq!(NavConfig::default().brand_name, "Supabase");
    }

    #[test]
    fn test_from_json_rejects_blank_brand() {
        let err = NavConfig::from_json(r#"{ "brand_name": "" }"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = NavConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
