//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use std::path::PathBuf;

use kc_theme::ThemeConfig;
use tracing_subscriber::EnvFilter;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Path of the theme configuration file. Built-in defaults when unset.
    pub theme_config_path: Option<PathBuf>,

    /// Serve the preview routes with mock contexts.
    pub preview_enabled: bool,

    /// CORS allowed origins (comma-separated).
    pub cors_origins: Vec<String>,

    /// Tracing filter directives, in `RUST_LOG` syntax.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("KC_THEME_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("KC_THEME_PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| anyhow::anyhow!("KC_THEME_PORT is not a valid port: {p}"))?,
            Err(_) => 8080,
        };

        let theme_config_path = std::env::var("KC_THEME_CONFIG").ok().map(PathBuf::from);

        let preview_enabled = std::env::var("KC_THEME_PREVIEW_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        let cors_origins = std::env::var("KC_THEME_CORS_ORIGINS")
            .map(|s| s.split(',').map(str::trim).map(String::from).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            theme_config_path,
            preview_enabled,
            cors_origins,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            theme_config_path: None,
            preview_enabled: true,
            cors_origins: vec!["*".to_string()],
            log_level: "debug".to_string(),
        }
    }

    /// Builds the tracing filter from `log_level`, falling back to `info`
    /// when the directives do not parse.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Loads the theme configuration this server renders with.
    pub fn load_theme_config(&self) -> anyhow::Result<ThemeConfig> {
        match &self.theme_config_path {
            Some(path) => Ok(ThemeConfig::from_file(path)?),
            None => Ok(ThemeConfig::default()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            theme_config_path: None,
            preview_enabled: true,
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}
