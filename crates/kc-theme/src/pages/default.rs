//! Generic page for every page id without a dedicated renderer.

use askama::Template;

use crate::classes::ClassResolver;
use crate::context::GenericContext;
use crate::error::Result;
use crate::fields::FieldGroupProps;
use crate::pages::{header_text, PageProps};
use crate::sanitize::kc_sanitize;

#[derive(Template)]
#[template(path = "default.html")]
struct DefaultTemplate<'a> {
    classes: &'a ClassResolver,
    page_id: &'a str,
    login_action: &'a str,
    has_form: bool,
    fields: String,
    submit_class: String,
    submit_label: String,
}

impl DefaultTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// Renders a generic page: the header, the message banner and, when the
/// context carries a user profile, the profile form.
pub fn render_default(ctx: &GenericContext, props: &PageProps<'_>) -> Result<String> {
    let common = &ctx.common;
    let i18n = props.i18n;

    let fields = match &ctx.profile {
        Some(profile) => props.fields.render(&FieldGroupProps {
            attributes: &profile.attributes,
            messages: &common.messages_per_field,
            i18n,
            classes: props.classes,
            password_required: false,
            make_user_confirm_password: props.config.make_user_confirm_password,
            email_as_username: common.realm.registration_email_as_username,
        })?,
        None => String::new(),
    };

    let body = DefaultTemplate {
        classes: props.classes,
        page_id: &ctx.page_id,
        login_action: &common.url.login_action,
        has_form: ctx.profile.is_some(),
        fields,
        submit_class: props.classes.resolve(&[
            "kcButtonClass",
            "kcButtonPrimaryClass",
            "kcButtonBlockClass",
            "kcButtonLargeClass",
        ]),
        submit_label: i18n.msg_str("doSubmit"),
    }
    .render()?;

    let header = common.message_header.as_deref().map_or_else(
        || kc_sanitize(&ctx.page_id),
        |header| header_text(i18n, header),
    );
    let template_props = props.template_props(common, &header, &body);
    props.wrap(&template_props)
}
