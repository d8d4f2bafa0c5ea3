//! Page renderers.
//!
//! Each renderer takes its typed context plus the shared [`PageProps`] and
//! returns a complete HTML document. Renderers build their form and hand it
//! to the page template; none of them keeps state beyond one call.

use crate::classes::ClassResolver;
use crate::config::ThemeConfig;
use crate::context::CommonContext;
use crate::error::Result;
use crate::fields::FieldGroupRenderer;
use crate::i18n::I18n;
use crate::template::{PageTemplate, TemplateProps};

pub mod default;
pub mod login;
pub mod login_otp;
pub mod password;
pub mod register;

pub use default::render_default;
pub use login::render_login;
pub use login_otp::render_login_otp;
pub use password::PasswordInput;
pub use register::render_register;

/// Collaborators shared by every page render.
#[derive(Clone, Copy)]
pub struct PageProps<'a> {
    /// Message accessor.
    pub i18n: &'a I18n,
    /// Class resolver.
    pub classes: &'a ClassResolver,
    /// Page chrome.
    pub template: &'a dyn PageTemplate,
    /// User-profile field renderer.
    pub fields: &'a dyn FieldGroupRenderer,
    /// Theme configuration.
    pub config: &'a ThemeConfig,
}

impl<'a> PageProps<'a> {
    /// Starts the template props for a page. Every slot is empty and the
    /// message banner is allowed.
    fn template_props<'b>(
        &self,
        common: &'b CommonContext,
        header: &'b str,
        body: &'b str,
    ) -> TemplateProps<'b>
    where
        'a: 'b,
    {
        TemplateProps {
            common,
            i18n: self.i18n,
            classes: self.classes,
            stylesheets: &self.config.stylesheets,
            header,
            display_message: true,
            display_info: false,
            info: "",
            social_providers: "",
            display_required_fields: false,
            wrapper_class: None,
            body,
        }
    }

    fn wrap(&self, props: &TemplateProps<'_>) -> Result<String> {
        self.template.render(props)
    }
}

/// Resolves a header override, which may be a message key, a `${key}`
/// reference or plain text.
fn header_text(i18n: &I18n, header: &str) -> String {
    if i18n.has(header) {
        i18n.msg(header)
    } else {
        i18n.advanced_msg(header)
    }
}
