//! `login.ftl`: username and password form with social providers.

use askama::Template;

use crate::classes::{clsx, ClassResolver};
use crate::context::{LoginContext, SocialProvider};
use crate::error::Result;
use crate::icons::resolve_icon;
use crate::messages::FieldMessages;
use crate::pages::password::PasswordInput;
use crate::pages::PageProps;
use crate::sanitize::kc_sanitize;

/// Above this many providers the list is laid out as a grid.
const SOCIAL_GRID_THRESHOLD: usize = 3;

const CREDENTIAL_FIELDS: &[&str] = &["username", "password"];

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    classes: &'a ClassResolver,
    show_form: bool,
    login_action: &'a str,
    show_username: bool,
    username_label: String,
    username_value: &'a str,
    username_input_class: String,
    has_credential_error: bool,
    credential_error: String,
    error_beside_password: bool,
    password_label: String,
    password_input: String,
    show_remember_me: bool,
    remember_me_checked: bool,
    remember_me_label: String,
    show_forgot_password: bool,
    reset_credentials_url: &'a str,
    forgot_password_label: String,
    selected_credential: &'a str,
    submit_class: String,
    submit_label: String,
}

impl LoginTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// A social provider button, ready for the template.
struct SocialButton {
    alias: String,
    login_url: String,
    label: String,
    alt: String,
    has_icon_url: bool,
    icon_url: String,
    has_icon_classes: bool,
    icon_classes: String,
    name_class: String,
}

#[derive(Template)]
#[template(path = "login_social.html")]
struct SocialTemplate<'a> {
    classes: &'a ClassResolver,
    heading: String,
    list_class: String,
    button_class: String,
    buttons: Vec<SocialButton>,
}

impl SocialTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

#[derive(Template)]
#[template(path = "login_info.html")]
struct InfoTemplate<'a> {
    no_account: String,
    registration_url: &'a str,
    do_register: String,
}

fn username_label_key(ctx: &LoginContext) -> &'static str {
    let realm = &ctx.common.realm;
    if !realm.login_with_email_allowed {
        "username"
    } else if !realm.registration_email_as_username {
        "usernameOrEmail"
    } else {
        "email"
    }
}

fn social_button(provider: &SocialProvider, props: &PageProps<'_>) -> SocialButton {
    let icon = resolve_icon(&provider.alias, provider.display_name.as_deref());
    let icon_classes = provider
        .icon_classes
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or_default();
    let has_icon_classes = icon.is_none() && !icon_classes.is_empty();

    let name_class = props.classes.class_of("kcFormSocialAccountNameClass");
    SocialButton {
        alias: provider.alias.clone(),
        login_url: provider.login_url.clone(),
        label: kc_sanitize(provider.label()),
        alt: provider.label().to_string(),
        has_icon_url: icon.is_some(),
        icon_url: icon
            .map(|i| i.url(&props.config.resources_url))
            .unwrap_or_default(),
        has_icon_classes,
        icon_classes: clsx(&[&props.classes.class_of("kcCommonLogoIdP"), icon_classes]),
        name_class: clsx(&[
            &name_class,
            if has_icon_classes { "kc-social-icon-text" } else { "" },
        ]),
    }
}

fn render_social(ctx: &LoginContext, props: &PageProps<'_>) -> Result<String> {
    let providers = ctx
        .social
        .as_ref()
        .and_then(|s| s.providers.as_deref())
        .unwrap_or_default();
    if !ctx.common.realm.password || providers.is_empty() {
        return Ok(String::new());
    }

    let grid = providers.len() > SOCIAL_GRID_THRESHOLD;
    let template = SocialTemplate {
        classes: props.classes,
        heading: props.i18n.msg("identity-provider-login-label"),
        list_class: props.classes.resolve_if(
            &["kcFormSocialAccountListClass"],
            grid,
            "kcFormSocialAccountListGridClass",
        ),
        button_class: clsx(&[
            &props.classes.resolve_if(
                &["kcFormSocialAccountListButtonClass"],
                grid,
                "kcFormSocialAccountGridItem",
            ),
            "custom-social-btn",
        ]),
        buttons: providers.iter().map(|p| social_button(p, props)).collect(),
    };
    Ok(template.render()?)
}

/// Renders the login page.
pub fn render_login(ctx: &LoginContext, props: &PageProps<'_>) -> Result<String> {
    let common = &ctx.common;
    let realm = &common.realm;
    let i18n = props.i18n;
    let classes = props.classes;
    let errors = &common.messages_per_field;

    let has_credential_error = errors.exists_error(CREDENTIAL_FIELDS);
    let credential_error = errors
        .get_first_error(CREDENTIAL_FIELDS)
        .map(kc_sanitize)
        .unwrap_or_default();

    let password_input = PasswordInput::new("password")
        .tabindex(3)
        .invalid(has_credential_error)
        .render(i18n, classes)?;

    let form = LoginTemplate {
        classes,
        show_form: realm.password,
        login_action: &common.url.login_action,
        show_username: !ctx.username_hidden,
        username_label: i18n.msg(username_label_key(ctx)),
        username_value: ctx.login.username.as_deref().unwrap_or_default(),
        username_input_class: clsx(&[
            &classes.class_of("kcInputClass"),
            if has_credential_error { "kcInputInvalid" } else { "" },
        ]),
        has_credential_error,
        credential_error,
        error_beside_password: ctx.username_hidden && has_credential_error,
        password_label: i18n.msg("password"),
        password_input,
        show_remember_me: realm.remember_me && !ctx.username_hidden,
        remember_me_checked: ctx.login.remember_me_checked(),
        remember_me_label: i18n.msg("rememberMe"),
        show_forgot_password: realm.reset_password_allowed,
        reset_credentials_url: &common.url.login_reset_credentials_url,
        forgot_password_label: i18n.msg("doForgotPassword"),
        selected_credential: common
            .auth
            .as_ref()
            .and_then(|a| a.selected_credential.as_deref())
            .unwrap_or_default(),
        submit_class: clsx(&[
            &classes.resolve(&[
                "kcButtonClass",
                "kcButtonPrimaryClass",
                "kcButtonBlockClass",
                "kcButtonLargeClass",
            ]),
            "rounded-lg",
        ]),
        submit_label: i18n.msg_str("doLogIn"),
    };
    let body = form.render()?;

    let social_providers = render_social(ctx, props)?;
    let info = InfoTemplate {
        no_account: i18n.msg("noAccount"),
        registration_url: &common.url.registration_url,
        do_register: i18n.msg("doRegister"),
    }
    .render()?;
    let header = i18n.msg("loginAccountTitle");

    let mut template_props = props.template_props(common, &header, &body);
    template_props.display_message = !has_credential_error;
    template_props.display_info =
        realm.password && realm.registration_allowed && !ctx.registration_disabled;
    template_props.info = &info;
    template_props.social_providers = &social_providers;
    props.wrap(&template_props)
}
