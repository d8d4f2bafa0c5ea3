//! Error handling for theme rendering.
//!
//! Rendering itself is a total function over a well-formed context; errors
//! only arise at the edges: a context that cannot be decoded, a template
//! engine failure, or an unreadable configuration file.

use thiserror::Error;

/// Result type alias using the theme error type.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors raised while loading configuration or rendering pages.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The context supplied by the identity server could not be decoded.
    #[error("invalid context: {0}")]
    Context(#[from] serde_json::Error),

    /// The context carries no `pageId`.
    #[error("invalid context: missing pageId")]
    MissingPageId,

    /// Template rendering failed.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading configuration or contexts.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Returns whether the caller supplied bad input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Context(_) | Self::MissingPageId)
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Render(_) | Self::Config(_) | Self::Io(_))
    }
}
