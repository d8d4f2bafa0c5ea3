//! Page chrome around the page content.
//!
//! Pages render their own form and hand the result to a [`PageTemplate`]
//! together with the header, info and social provider slots. The template
//! owns the document: title, realm header, locale selector, message banner,
//! attempted-username bar and the "try another way" link.

use askama::Template;

use crate::classes::ClassResolver;
use crate::context::{CommonContext, MessageType};
use crate::error::Result;
use crate::form_state::FORM_SCRIPT;
use crate::i18n::I18n;
use crate::sanitize::kc_sanitize;

/// Slots and flags a page passes to its template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateProps<'a> {
    /// Shared context fields.
    pub common: &'a CommonContext,
    /// Message accessor.
    pub i18n: &'a I18n,
    /// Class resolver.
    pub classes: &'a ClassResolver,
    /// Stylesheets to link.
    pub stylesheets: &'a [String],
    /// Page header, as HTML.
    pub header: &'a str,
    /// Whether the page-level message banner may be shown.
    pub display_message: bool,
    /// Whether the info slot is shown.
    pub display_info: bool,
    /// Info slot, as HTML.
    pub info: &'a str,
    /// Social providers slot, as HTML.
    pub social_providers: &'a str,
    /// Whether to show the "required fields" hint.
    pub display_required_fields: bool,
    /// Extra wrapper class around the whole page.
    pub wrapper_class: Option<&'a str>,
    /// Page content, as HTML.
    pub body: &'a str,
}

/// Renders page chrome.
pub trait PageTemplate: Send + Sync {
    /// Wraps the page content into a full document.
    fn render(&self, props: &TemplateProps<'_>) -> Result<String>;
}

#[derive(Debug)]
struct LocaleLink {
    label: String,
    url: String,
}

#[derive(Template)]
#[template(path = "template.html")]
struct ChromeTemplate<'a> {
    classes: &'a ClassResolver,
    lang: String,
    dir: &'static str,
    title: String,
    stylesheets: &'a [String],
    scripts: &'a [String],
    wrapper_class: &'a str,
    realm_header: String,
    show_locale_selector: bool,
    languages_label: String,
    current_locale_label: String,
    locales: Vec<LocaleLink>,
    show_attempted_username: bool,
    attempted_username: String,
    restart_url: &'a str,
    restart_label: String,
    header: &'a str,
    display_required_fields: bool,
    required_fields_label: String,
    show_message: bool,
    message_type: &'static str,
    message_modifier: &'static str,
    message_icon_key: &'static str,
    message: String,
    body: &'a str,
    show_try_another_way: bool,
    login_action: &'a str,
    try_another_way_label: String,
    social_providers: &'a str,
    display_info: bool,
    info: &'a str,
    script: &'static str,
}

impl ChromeTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

const fn message_modifier(message_type: MessageType) -> &'static str {
    match message_type {
        MessageType::Error => "danger",
        MessageType::Warning => "warning",
        MessageType::Success => "success",
        MessageType::Info => "info",
    }
}

const fn message_icon_key(message_type: MessageType) -> &'static str {
    match message_type {
        MessageType::Error => "kcFeedbackErrorIcon",
        MessageType::Warning => "kcFeedbackWarningIcon",
        MessageType::Success => "kcFeedbackSuccessIcon",
        MessageType::Info => "kcFeedbackInfoIcon",
    }
}

/// Default chrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct KcTemplate;

impl PageTemplate for KcTemplate {
    fn render(&self, props: &TemplateProps<'_>) -> Result<String> {
        let common = props.common;
        let i18n = props.i18n;
        let realm = &common.realm;

        let locale = common.locale.as_ref();
        let locales: Vec<LocaleLink> = locale
            .map(|l| {
                l.supported
                    .iter()
                    .map(|s| LocaleLink {
                        label: s.label.clone(),
                        url: s.url.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let current_locale_label = locale
            .and_then(|l| {
                l.supported
                    .iter()
                    .find(|s| s.language_tag == l.current_language_tag)
            })
            .map(|s| s.label.clone())
            .unwrap_or_else(|| i18n.current_language_tag().to_string());

        // Warnings raised by an application-initiated action are not shown.
        let message = common.message.as_ref().filter(|m| {
            props.display_message
                && (m.message_type != MessageType::Warning || !common.is_app_initiated_action)
        });

        let auth = common.auth.as_ref();
        let show_attempted_username =
            auth.is_some_and(|a| a.show_username && !a.show_reset_credentials);

        let header_name = realm
            .display_name_html
            .as_deref()
            .unwrap_or_else(|| realm.title());

        let chrome = ChromeTemplate {
            classes: props.classes,
            lang: i18n.current_language_tag().to_string(),
            dir: if locale.is_some_and(|l| l.rtl) { "rtl" } else { "ltr" },
            title: i18n.msg_str_with("loginTitle", &[realm.title()]),
            stylesheets: props.stylesheets,
            scripts: &common.scripts,
            wrapper_class: props.wrapper_class.unwrap_or_default(),
            realm_header: i18n.msg_with("loginTitleHtml", &[header_name]),
            show_locale_selector: realm.internationalization_enabled && locales.len() > 1,
            languages_label: i18n.msg_str("languages"),
            current_locale_label,
            locales,
            show_attempted_username,
            attempted_username: auth
                .and_then(|a| a.attempted_username.clone())
                .unwrap_or_default(),
            restart_url: &common.url.login_restart_flow_url,
            restart_label: i18n.msg_str("restartLoginTooltip"),
            header: props.header,
            display_required_fields: props.display_required_fields,
            required_fields_label: i18n.msg_str("requiredFields"),
            show_message: message.is_some(),
            message_type: message.map_or("info", |m| m.message_type.as_str()),
            message_modifier: message.map_or("info", |m| message_modifier(m.message_type)),
            message_icon_key: message.map_or("kcFeedbackInfoIcon", |m| message_icon_key(m.message_type)),
            message: message.map(|m| kc_sanitize(&m.summary)).unwrap_or_default(),
            body: props.body,
            show_try_another_way: auth.is_some_and(|a| a.show_try_another_way_link),
            login_action: &common.url.login_action,
            try_another_way_label: i18n.msg_str("doTryAnotherWay"),
            social_providers: props.social_providers,
            display_info: props.display_info,
            info: props.info,
            script: FORM_SCRIPT,
        };

        Ok(chrome.render()?)
    }
}
