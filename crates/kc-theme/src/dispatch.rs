//! Page dispatch.
//!
//! [`Theme`] owns everything that outlives a single request (configuration,
//! class resolver, page template) and turns a [`KcContext`] into a page.

use std::sync::Arc;

use crate::classes::ClassResolver;
use crate::config::ThemeConfig;
use crate::context::{KcContext, PageId};
use crate::error::Result;
use crate::fields::{LazyFieldRenderer, USER_PROFILE_FORM_FIELDS};
use crate::i18n::I18n;
use crate::pages::{render_default, render_login, render_login_otp, render_register, PageProps};
use crate::template::{KcTemplate, PageTemplate};

/// Renderer a page identifier maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Username and password form.
    Login,
    /// Self-registration form.
    Register,
    /// One-time code form.
    LoginOtp,
    /// Generic page.
    Default,
}

impl PageKind {
    /// Maps a page identifier to its renderer. Total: unknown identifiers
    /// go to the generic page.
    #[must_use]
    pub const fn for_page(page_id: &PageId) -> Self {
        match page_id {
            PageId::Login => Self::Login,
            PageId::Register => Self::Register,
            PageId::LoginOtp => Self::LoginOtp,
            PageId::Other(_) => Self::Default,
        }
    }
}

/// A configured login theme.
#[derive(Clone)]
pub struct Theme {
    config: Arc<ThemeConfig>,
    classes: ClassResolver,
    template: Arc<dyn PageTemplate>,
    fields: &'static LazyFieldRenderer,
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Theme")
            .field("config", &self.config)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

impl Theme {
    /// Creates a theme with the default page template.
    pub fn new(config: ThemeConfig) -> Result<Self> {
        Self::with_template(config, Arc::new(KcTemplate))
    }

    /// Creates a theme with a custom page template.
    pub fn with_template(config: ThemeConfig, template: Arc<dyn PageTemplate>) -> Result<Self> {
        config.validate()?;
        let classes = ClassResolver::new(
            config.use_default_css,
            Arc::new(config.class_overrides.clone()),
        );
        Ok(Self {
            config: Arc::new(config),
            classes,
            template,
            fields: &USER_PROFILE_FORM_FIELDS,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Builds the message accessor for a context: its current locale, else
    /// the configured default.
    #[must_use]
    pub fn i18n_for(&self, ctx: &KcContext) -> I18n {
        let language_tag = ctx
            .common()
            .locale
            .as_ref()
            .map(|l| l.current_language_tag.as_str())
            .filter(|tag| !tag.is_empty())
            .unwrap_or(&self.config.default_locale);
        I18n::new(Some(language_tag), &self.config.message_overrides)
    }

    /// Renders the page the context asks for.
    pub fn render(&self, ctx: &KcContext) -> Result<String> {
        let page_id = ctx.page_id();
        let kind = PageKind::for_page(&page_id);
        tracing::debug!(page_id = %page_id, ?kind, "rendering page");

        let i18n = self.i18n_for(ctx);
        let props = PageProps {
            i18n: &i18n,
            classes: &self.classes,
            template: self.template.as_ref(),
            fields: self.fields.get(),
            config: &self.config,
        };

        match ctx {
            KcContext::Login(login) => render_login(login, &props),
            KcContext::Register(register) => render_register(register, &props),
            KcContext::LoginOtp(otp) => render_login_otp(otp, &props),
            KcContext::Other(generic) => render_default(generic, &props),
        }
    }

    /// Decodes a JSON context and renders it.
    pub fn render_json(&self, json: &str) -> Result<String> {
        let ctx = KcContext::from_json(json)?;
        self.render(&ctx)
    }
}
