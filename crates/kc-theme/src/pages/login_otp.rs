//! `login-otp.ftl`: one-time code form.

use askama::Template;

use crate::classes::ClassResolver;
use crate::context::LoginOtpContext;
use crate::error::Result;
use crate::messages::FieldMessages;
use crate::pages::PageProps;
use crate::sanitize::kc_sanitize;

/// Fields the server may report a wrong code under.
const OTP_FIELDS: &[&str] = &["totp", "otp"];

struct CredentialOption {
    id: String,
    label: String,
    checked: bool,
}

#[derive(Template)]
#[template(path = "login_otp.html")]
struct LoginOtpTemplate<'a> {
    classes: &'a ClassResolver,
    login_action: &'a str,
    show_selector: bool,
    credentials: Vec<CredentialOption>,
    otp_label: String,
    has_otp_error: bool,
    otp_error: String,
    submit_class: String,
    submit_label: String,
}

impl LoginOtpTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// Renders the OTP page.
///
/// The credential selector only appears when the user has more than one
/// OTP credential.
pub fn render_login_otp(ctx: &LoginOtpContext, props: &PageProps<'_>) -> Result<String> {
    let common = &ctx.common;
    let i18n = props.i18n;
    let errors = &common.messages_per_field;
    let otp = &ctx.otp_login;

    let has_otp_error = errors.exists_error(OTP_FIELDS);
    let selected = otp.selected_credential_id.as_deref();

    let form = LoginOtpTemplate {
        classes: props.classes,
        login_action: &common.url.login_action,
        show_selector: otp.user_otp_credentials.len() > 1,
        credentials: otp
            .user_otp_credentials
            .iter()
            .map(|c| CredentialOption {
                id: c.id.clone(),
                label: c.user_label.clone(),
                checked: selected == Some(c.id.as_str()),
            })
            .collect(),
        otp_label: i18n.msg("loginOtpOneTime"),
        has_otp_error,
        otp_error: errors
            .get_first_error(OTP_FIELDS)
            .map(kc_sanitize)
            .unwrap_or_default(),
        submit_class: props.classes.resolve(&[
            "kcButtonClass",
            "kcButtonPrimaryClass",
            "kcButtonBlockClass",
            "kcButtonLargeClass",
        ]),
        submit_label: i18n.msg_str("doLogIn"),
    };
    let body = form.render()?;

    let header = i18n.msg("doLogIn");
    let mut template_props = props.template_props(common, &header, &body);
    template_props.display_message = !has_otp_error;
    props.wrap(&template_props)
}
