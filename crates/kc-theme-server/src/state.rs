//! Application state management.
//!
//! This module defines the shared state that is passed to all request handlers.

use std::sync::Arc;

use kc_theme::Theme;

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// The theme pages are rendered with.
    pub theme: Arc<Theme>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ServerConfig, theme: Theme) -> Self {
        Self {
            config,
            theme: Arc::new(theme),
        }
    }

    /// Returns the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the server configuration.
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
