//! Mock contexts for previewing pages without an identity server.
//!
//! Every page has a `default` story; some pages add variants showing
//! validation errors or optional blocks.

use crate::context::{
    Attribute, AuthInfo, CommonContext, GenericContext, KcContext, Locale, LoginContext,
    LoginOtpContext, Message, MessageType, OtpCredential, PageId, RealmInfo, RegisterContext,
    Social, SocialProvider, SupportedLocale, Urls,
};
use crate::messages::MessagesPerField;

/// Story rendered when none is requested.
pub const DEFAULT_STORY: &str = "default";

const LOGIN_STORIES: &[&str] = &[
    DEFAULT_STORY,
    "with-error",
    "with-social-providers",
    "username-hidden",
];
const REGISTER_STORIES: &[&str] = &[DEFAULT_STORY, "with-error", "with-terms", "with-recaptcha"];
const LOGIN_OTP_STORIES: &[&str] = &[DEFAULT_STORY, "with-error", "with-alternative-authenticator"];
const OTHER_STORIES: &[&str] = &[DEFAULT_STORY, "with-error"];

/// Returns the stories available for a page.
#[must_use]
pub fn story_names(page_id: &PageId) -> &'static [&'static str] {
    match page_id {
        PageId::Login => LOGIN_STORIES,
        PageId::Register => REGISTER_STORIES,
        PageId::LoginOtp => LOGIN_OTP_STORIES,
        PageId::Other(_) => OTHER_STORIES,
    }
}

/// Builds the mock context of a story, or `None` if the page has no such
/// story.
#[must_use]
pub fn mock_context(page_id: &PageId, story: &str) -> Option<KcContext> {
    if !story_names(page_id).iter().any(|s| *s == story) {
        tracing::warn!(page_id = %page_id, story, "unknown preview story");
        return None;
    }

    let ctx = match page_id {
        PageId::Login => KcContext::Login(login(story)),
        PageId::Register => KcContext::Register(register(story)),
        PageId::LoginOtp => KcContext::LoginOtp(login_otp(story)),
        PageId::Other(id) => KcContext::Other(other(id, story)),
    };
    Some(ctx)
}

fn common() -> CommonContext {
    let base = "/realms/myrealm";
    CommonContext {
        realm: RealmInfo {
            name: "myrealm".to_string(),
            display_name: Some("My Realm".to_string()),
            internationalization_enabled: true,
            password: true,
            registration_allowed: true,
            reset_password_allowed: true,
            login_with_email_allowed: true,
            ..RealmInfo::default()
        },
        url: Urls {
            login_action: format!("{base}/login-actions/authenticate"),
            registration_action: format!("{base}/login-actions/registration"),
            registration_url: format!("{base}/login-actions/registration"),
            login_reset_credentials_url: format!("{base}/login-actions/reset-credentials"),
            login_url: format!("{base}/protocol/openid-connect/auth"),
            login_restart_flow_url: format!("{base}/login-actions/restart"),
            resources_path: "/resources".to_string(),
        },
        locale: Some(Locale {
            current_language_tag: "en".to_string(),
            supported: vec![
                SupportedLocale {
                    language_tag: "en".to_string(),
                    label: "English".to_string(),
                    url: "?kc_locale=en".to_string(),
                },
                SupportedLocale {
                    language_tag: "pt-BR".to_string(),
                    label: "Português (Brasil)".to_string(),
                    url: "?kc_locale=pt-BR".to_string(),
                },
            ],
            rtl: false,
        }),
        ..CommonContext::default()
    }
}

fn provider(alias: &str, display_name: &str, icon_classes: Option<&str>) -> SocialProvider {
    SocialProvider {
        alias: alias.to_string(),
        display_name: Some(display_name.to_string()),
        icon_classes: icon_classes.map(str::to_string),
        login_url: format!("/realms/myrealm/broker/{alias}/login"),
        provider_id: Some(alias.to_string()),
    }
}

fn login(story: &str) -> LoginContext {
    let mut ctx = LoginContext {
        common: common(),
        ..LoginContext::default()
    };
    ctx.common.realm.remember_me = true;

    match story {
        "with-error" => {
            ctx.login.username = Some("johndoe".to_string());
            ctx.common.messages_per_field =
                MessagesPerField::new().with("username", "Invalid username or password.");
        }
        "with-social-providers" => {
            ctx.social = Some(Social {
                display_info: true,
                providers: Some(vec![
                    provider("google", "Google", None),
                    provider("facebook", "Facebook", None),
                    provider("instagram", "Instagram", None),
                    provider("linkedin", "LinkedIn", None),
                    provider("github", "GitHub", Some("fa fa-github")),
                    provider("corporate-sso", "Corporate SSO", None),
                ]),
            });
        }
        "username-hidden" => {
            ctx.username_hidden = true;
            ctx.common.auth = Some(AuthInfo {
                attempted_username: Some("johndoe".to_string()),
                show_username: true,
                ..AuthInfo::default()
            });
        }
        _ => {}
    }
    ctx
}

fn profile_attribute(name: &str, autocomplete: &str) -> Attribute {
    Attribute {
        name: name.to_string(),
        display_name: Some(format!("${{{name}}}")),
        required: true,
        autocomplete: Some(autocomplete.to_string()),
        ..Attribute::default()
    }
}

fn register(story: &str) -> RegisterContext {
    let mut ctx = RegisterContext {
        common: common(),
        password_required: true,
        ..RegisterContext::default()
    };
    ctx.profile.attributes = vec![
        profile_attribute("username", "username"),
        profile_attribute("email", "email"),
        profile_attribute("firstName", "given-name"),
        profile_attribute("lastName", "family-name"),
    ];

    match story {
        "with-error" => {
            ctx.common.messages_per_field = MessagesPerField::new()
                .with("email", "Invalid email address.")
                .with("password-confirm", "Password confirmation doesn't match.");
        }
        "with-terms" => ctx.terms_acceptance_required = true,
        "with-recaptcha" => {
            ctx.recaptcha_required = true;
            ctx.recaptcha_site_key = Some("6LcPreviewSiteKey".to_string());
            ctx.recaptcha_action = Some("register".to_string());
            ctx.common.scripts = vec!["https://www.google.com/recaptcha/api.js?hl=en".to_string()];
        }
        _ => {}
    }
    ctx
}

fn login_otp(story: &str) -> LoginOtpContext {
    let mut ctx = LoginOtpContext {
        common: common(),
        ..LoginOtpContext::default()
    };
    ctx.otp_login.user_otp_credentials = vec![OtpCredential {
        id: "1".to_string(),
        user_label: "Phone".to_string(),
    }];

    match story {
        "with-error" => {
            ctx.common.messages_per_field = MessagesPerField::new().with("otp", "Invalid code.");
        }
        "with-alternative-authenticator" => {
            ctx.otp_login.user_otp_credentials = vec![
                OtpCredential {
                    id: "1".to_string(),
                    user_label: "E-mail".to_string(),
                },
                OtpCredential {
                    id: "2".to_string(),
                    user_label: "Telefone".to_string(),
                },
            ];
            ctx.otp_login.selected_credential_id = Some("1".to_string());
        }
        _ => {}
    }
    ctx
}

fn other(page_id: &str, story: &str) -> GenericContext {
    let mut ctx = GenericContext {
        common: common(),
        page_id: page_id.to_string(),
        profile: None,
    };
    ctx.common.message = Some(match story {
        "with-error" => Message {
            message_type: MessageType::Error,
            summary: "Something went wrong.".to_string(),
        },
        _ => Message {
            message_type: MessageType::Info,
            summary: "Your account is ready.".to_string(),
        },
    });
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::dispatch::Theme;
    use crate::messages::FieldMessages;

    #[test]
    fn every_listed_story_renders() {
        let theme = Theme::new(ThemeConfig::default()).unwrap();
        for page_id in [
            PageId::Login,
            PageId::Register,
            PageId::LoginOtp,
            PageId::parse("info.ftl"),
        ] {
            for story in story_names(&page_id) {
                let ctx = mock_context(&page_id, story).unwrap();
                assert_eq!(ctx.page_id(), page_id);
                let html = theme.render(&ctx).unwrap();
                assert!(html.starts_with("<!DOCTYPE html>"), "{page_id} / {story}");
            }
        }
    }

    /// Start tags of a document, without the angle brackets.
    fn start_tags(html: &str) -> impl Iterator<Item = &str> {
        html.split('<')
            .skip(1)
            .filter_map(|chunk| chunk.split_once('>').map(|(tag, _)| tag))
    }

    fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        let needle = format!(" {name}=\"");
        let start = tag.find(&needle)? + needle.len();
        tag[start..].split('"').next()
    }

    /// Every form the script disables on submit owns exactly one submit
    /// input, and every password toggle controls an input of the document.
    /// Returns how many disabling forms and toggles were checked.
    fn assert_script_preconditions(html: &str, label: &str) -> (usize, usize) {
        let tags: Vec<&str> = start_tags(html).collect();
        let mut submits_in_form: Option<usize> = None;
        let (mut forms, mut toggles) = (0, 0);

        for tag in &tags {
            if tag.starts_with("form ") && tag.contains("data-kc-disable-on-submit") {
                submits_in_form = Some(0);
                forms += 1;
            } else if *tag == "/form" {
                if let Some(count) = submits_in_form.take() {
                    assert_eq!(count, 1, "{label}: submit controls in form");
                }
            } else if tag.contains("data-kc-submit") {
                assert!(tag.starts_with("input "), "{label}: submit control is not an input: <{tag}>");
                if let Some(count) = submits_in_form.as_mut() {
                    *count += 1;
                }
            }

            if tag.starts_with("button ") && tag.contains("data-kc-password-toggle") {
                let target = attribute(tag, "aria-controls").unwrap();
                let found = tags
                    .iter()
                    .any(|t| t.starts_with("input ") && attribute(t, "id") == Some(target));
                assert!(found, "{label}: no input #{target} for password toggle");
                toggles += 1;
            }
        }
        assert!(submits_in_form.is_none(), "{label}: unclosed form");
        (forms, toggles)
    }

    #[test]
    fn every_story_satisfies_form_script_preconditions() {
        let theme = Theme::new(ThemeConfig::default()).unwrap();
        let mut disabling_forms = 0;
        let mut toggles = 0;

        for page_id in [
            PageId::Login,
            PageId::Register,
            PageId::LoginOtp,
            PageId::parse("info.ftl"),
        ] {
            for story in story_names(&page_id) {
                let html = theme.render(&mock_context(&page_id, story).unwrap()).unwrap();
                let (forms, page_toggles) =
                    assert_script_preconditions(&html, &format!("{page_id} / {story}"));
                disabling_forms += forms;
                toggles += page_toggles;
            }
        }
        assert!(disabling_forms > 0);
        assert!(toggles > 0);
    }

    #[test]
    fn recaptcha_story_defines_callback() {
        let theme = Theme::new(ThemeConfig::default()).unwrap();
        let ctx = mock_context(&PageId::Register, "with-recaptcha").unwrap();
        let html = theme.render(&ctx).unwrap();
        assert!(html.contains("data-callback=\"onSubmitRecaptcha\""));
        assert!(html.contains("function onSubmitRecaptcha(token)"));
        assert!(html.contains("recaptcha/api.js"));
    }

    #[test]
    fn unknown_story_is_none() {
        assert!(mock_context(&PageId::Login, "with-alternative-authenticator").is_none());
        assert!(mock_context(&PageId::Register, "nope").is_none());
    }

    #[test]
    fn login_error_story_has_credential_error() {
        let Some(KcContext::Login(ctx)) = mock_context(&PageId::Login, "with-error") else {
            panic!("expected login context");
        };
        assert!(ctx.common.messages_per_field.exists_error(&["username", "password"]));
    }

    #[test]
    fn social_story_uses_grid() {
        let theme = Theme::new(ThemeConfig::default()).unwrap();
        let ctx = mock_context(&PageId::Login, "with-social-providers").unwrap();
        let html = theme.render(&ctx).unwrap();
        assert!(html.contains("kcFormSocialAccountListGridClass"));
        assert!(html.contains("/resources/img/linkedin.svg"));
    }
}
