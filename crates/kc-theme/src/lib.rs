//! # kc-theme
//!
//! Server-side rendering of the login, registration and OTP pages of a
//! Keycloak login theme.
//!
//! The identity server hands over a fully formed [`KcContext`] per page
//! load. [`Theme::render`] dispatches on its page identifier and produces a
//! complete HTML document whose forms post back to the URLs the server
//! supplied. Nothing is stored between renders.
//!
//! ## Example
//!
//! ```
//! use kc_theme::{Theme, ThemeConfig};
//!
//! let theme = Theme::new(ThemeConfig::default())?;
//! let html = theme.render_json(r#"{"pageId": "login.ftl", "realm": {"name": "acme", "password": true}}"#)?;
//! assert!(html.contains("kc-form-login"));
//! # Ok::<(), kc_theme::ThemeError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod classes;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod form_state;
pub mod i18n;
pub mod icons;
pub mod messages;
pub mod mock;
pub mod pages;
pub mod sanitize;
pub mod template;

pub use classes::{ClassOverrides, ClassResolver};
pub use config::ThemeConfig;
pub use context::{KcContext, PageId};
pub use dispatch::{PageKind, Theme};
pub use error::{Result, ThemeError};
pub use i18n::I18n;
pub use icons::{resolve_icon, SocialIcon};
pub use messages::{FieldMessages, MessagesPerField};
pub use sanitize::kc_sanitize;
