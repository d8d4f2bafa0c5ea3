//! Theme configuration.
//!
//! Everything a deployment can customize without touching page structure:
//! style class overrides, extra translations, stylesheet links and where the
//! bundled resources are served from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classes::ClassOverrides;
use crate::error::{Result, ThemeError};
use crate::i18n::MessageOverrides;

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Whether keys without an override resolve to the default classes.
    pub use_default_css: bool,

    /// Style class overrides. Only the keys listed here change.
    pub class_overrides: ClassOverrides,

    /// Whether registration asks for the password twice.
    pub make_user_confirm_password: bool,

    /// Public base URL of the bundled resources (icons, scripts).
    pub resources_url: String,

    /// Stylesheets linked from every page.
    pub stylesheets: Vec<String>,

    /// Locale used when the context carries none.
    pub default_locale: String,

    /// Extra or replacement translations.
    pub message_overrides: MessageOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_default_css: true,
            class_overrides: ClassOverrides::new(),
            make_user_confirm_password: true,
            resources_url: "/resources".to_string(),
            stylesheets: Vec::new(),
            default_locale: "en".to_string(),
            message_overrides: MessageOverrides::new(),
        }
    }
}

impl ThemeConfig {
    /// Parses a configuration from JSON text. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ThemeError::Config(format!("invalid theme configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "theme configuration loaded");
        Ok(config)
    }

    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.resources_url.trim().is_empty() {
            return Err(ThemeError::Config("resources_url must not be empty".to_string()));
        }
        if self.default_locale.trim().is_empty() {
            return Err(ThemeError::Config("default_locale must not be empty".to_string()));
        }
        if let Some(key) = self.class_overrides.keys().find(|k| !k.starts_with("kc")) {
            return Err(ThemeError::Config(format!("unknown class key: {key}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ThemeConfig::default();
        assert!(config.use_default_css);
        assert!(config.make_user_confirm_password);
        assert!(config.class_overrides.is_empty());
        assert_eq!(config.resources_url, "/resources");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ThemeConfig::from_json(
            r#"{"class_overrides": {"kcButtonClass": "btn"}, "stylesheets": ["/css/login.css"]}"#,
        )
        .unwrap();
        assert_eq!(config.class_overrides["kcButtonClass"], "btn");
        assert_eq!(config.stylesheets, vec!["/css/login.css".to_string()]);
        assert!(config.make_user_confirm_password);
    }

    #[test]
    fn rejects_empty_resources_url() {
        let err = ThemeConfig::from_json(r#"{"resources_url": " "}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn rejects_unknown_class_key() {
        let err = ThemeConfig::from_json(r#"{"class_overrides": {"button": "btn"}}"#).unwrap_err();
        assert!(err.to_string().contains("unknown class key: button"));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ThemeConfig::from_json("{").unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ThemeConfig::from_file("/nonexistent/theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
