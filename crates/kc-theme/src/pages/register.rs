//! `register.ftl`: self-registration form.

use askama::Template;

use crate::classes::ClassResolver;
use crate::context::RegisterContext;
use crate::error::Result;
use crate::fields::{FieldGroupProps, FieldGroupRenderer, TwoColumnFields};
use crate::messages::FieldMessages;
use crate::pages::{header_text, PageProps};
use crate::sanitize::kc_sanitize;

/// Extra class wrapping the whole registration page.
pub const REGISTER_WRAPPER_CLASS: &str = "register-page-custom-wrapper";

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate<'a> {
    classes: &'a ClassResolver,
    registration_action: &'a str,
    fields: String,
    terms_required: bool,
    terms_title: String,
    terms_text: String,
    accept_terms_label: String,
    has_terms_error: bool,
    terms_error: String,
    show_recaptcha_widget: bool,
    recaptcha_button: bool,
    recaptcha_site_key: &'a str,
    recaptcha_action: &'a str,
    login_url: &'a str,
    back_to_login: String,
    submit_class: String,
    submit_disabled: bool,
    submit_label: String,
}

impl RegisterTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// Renders the registration page.
///
/// Profile attributes go through the injected field renderer, laid out on
/// two columns. The password confirmation flag is taken from the theme
/// configuration and handed to the field renderer unchanged.
pub fn render_register(ctx: &RegisterContext, props: &PageProps<'_>) -> Result<String> {
    let common = &ctx.common;
    let i18n = props.i18n;
    let classes = props.classes;
    let errors = &common.messages_per_field;

    let fields = TwoColumnFields(props.fields).render(&FieldGroupProps {
        attributes: &ctx.profile.attributes,
        messages: errors,
        i18n,
        classes,
        password_required: ctx.password_required,
        make_user_confirm_password: props.config.make_user_confirm_password,
        email_as_username: common.realm.registration_email_as_username,
    })?;

    let terms_error = errors.get_first_error(&["termsAccepted"]);
    let recaptcha_action = ctx.recaptcha_action.as_deref();
    // An invisible widget with an action is bound to the submit button itself.
    let recaptcha_button =
        ctx.recaptcha_required && !ctx.recaptcha_visible && recaptcha_action.is_some();

    let form = RegisterTemplate {
        classes,
        registration_action: &common.url.registration_action,
        fields,
        terms_required: ctx.terms_acceptance_required,
        terms_title: i18n.msg("termsTitle"),
        terms_text: i18n.msg("termsText"),
        accept_terms_label: i18n.msg("acceptTerms"),
        has_terms_error: terms_error.is_some(),
        terms_error: terms_error.map(kc_sanitize).unwrap_or_default(),
        show_recaptcha_widget: ctx.recaptcha_required
            && (ctx.recaptcha_visible || recaptcha_action.is_none()),
        recaptcha_button,
        recaptcha_site_key: ctx.recaptcha_site_key.as_deref().unwrap_or_default(),
        recaptcha_action: recaptcha_action.unwrap_or_default(),
        login_url: &common.url.login_url,
        back_to_login: i18n.msg("backToLogin"),
        submit_class: classes.resolve(&[
            "kcButtonClass",
            "kcButtonPrimaryClass",
            "kcButtonBlockClass",
            "kcButtonLargeClass",
        ]),
        // Terms must be accepted before the form can be submitted.
        submit_disabled: ctx.terms_acceptance_required,
        submit_label: i18n.msg_str("doRegister"),
    };
    let body = form.render()?;

    let header = common.message_header.as_deref().map_or_else(
        || i18n.msg("registerTitle"),
        |header| header_text(i18n, header),
    );
    let mut template_props = props.template_props(common, &header, &body);
    template_props.display_message = errors.exists_error(&["global"]);
    template_props.display_required_fields = true;
    template_props.wrapper_class = Some(REGISTER_WRAPPER_CLASS);
    props.wrap(&template_props)
}
