//! The per-request context handed over by the identity server.
//!
//! A context is a read-only view model: realm flags, URLs, previously
//! entered values and validation messages. Its shape depends on the page
//! being rendered, so [`KcContext`] is a tagged union keyed by `pageId`
//! with an explicit variant for every page that has no dedicated renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ThemeError};
use crate::messages::MessagesPerField;

/// Identifier of the page the server asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageId {
    /// `login.ftl`
    Login,
    /// `register.ftl`
    Register,
    /// `login-otp.ftl`
    LoginOtp,
    /// Any other page, rendered by the default page.
    Other(String),
}

impl PageId {
    /// Parses a page identifier. Never fails: unknown ids map to [`PageId::Other`].
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id {
            "login.ftl" => Self::Login,
            "register.ftl" => Self::Register,
            "login-otp.ftl" => Self::LoginOtp,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the identifier as sent by the server.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Login => "login.ftl",
            Self::Register => "register.ftl",
            Self::LoginOtp => "login-otp.ftl",
            Self::Other(id) => id,
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Realm configuration flags relevant to the login pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealmInfo {
    /// Realm name.
    pub name: String,
    /// Display name for the page title.
    pub display_name: Option<String>,
    /// Display name with markup for the page header.
    pub display_name_html: Option<String>,
    /// Whether the locale selector is offered.
    pub internationalization_enabled: bool,
    /// Whether password authentication is enabled.
    pub password: bool,
    /// Whether self-registration is allowed.
    pub registration_allowed: bool,
    /// Whether the email address is used as the username.
    pub registration_email_as_username: bool,
    /// Whether the "remember me" option is enabled.
    pub remember_me: bool,
    /// Whether users can reset their password.
    pub reset_password_allowed: bool,
    /// Whether users can log in with their email address.
    pub login_with_email_allowed: bool,
}

impl RealmInfo {
    /// Returns the display name, falling back to the realm name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// URLs generated by the server. Every form posts to one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Urls {
    /// Action of the login and OTP forms.
    pub login_action: String,
    /// Action of the registration form.
    pub registration_action: String,
    /// Link to the registration page.
    pub registration_url: String,
    /// Link to the reset-credentials page.
    pub login_reset_credentials_url: String,
    /// Link back to the login page.
    pub login_url: String,
    /// Link restarting the login flow.
    pub login_restart_flow_url: String,
    /// Base path of the theme resources.
    pub resources_path: String,
}

/// A selectable locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportedLocale {
    /// BCP 47 language tag.
    pub language_tag: String,
    /// Label shown in the selector.
    pub label: String,
    /// URL switching to this locale.
    pub url: String,
}

/// Locale information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    /// Tag of the active locale.
    pub current_language_tag: String,
    /// Locales the realm offers.
    pub supported: Vec<SupportedLocale>,
    /// Right-to-left script.
    pub rtl: bool,
}

/// Severity of a page-level message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Operation succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// Operation failed.
    Error,
    /// Informational.
    Info,
}

impl MessageType {
    /// Returns the wire name, used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A page-level message banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Severity.
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Text, possibly containing markup.
    pub summary: String,
}

/// Authentication session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthInfo {
    /// Username collected in an earlier step.
    pub attempted_username: Option<String>,
    /// Whether to show the attempted username.
    pub show_username: bool,
    /// Whether the reset-credentials flow is active.
    pub show_reset_credentials: bool,
    /// Whether to offer the "try another way" link.
    pub show_try_another_way_link: bool,
    /// Credential chosen in an earlier step, echoed back on login.
    pub selected_credential: Option<String>,
}

/// Fields present on every page context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonContext {
    /// Realm flags.
    pub realm: RealmInfo,
    /// Server URLs.
    pub url: Urls,
    /// Locale information, absent when the realm is not internationalized.
    pub locale: Option<Locale>,
    /// Page-level message.
    pub message: Option<Message>,
    /// Per-field validation errors.
    pub messages_per_field: MessagesPerField,
    /// Authentication session state.
    pub auth: Option<AuthInfo>,
    /// Whether the page is part of an application-initiated action.
    pub is_app_initiated_action: bool,
    /// Header override (a message key or `${key}` reference).
    pub message_header: Option<String>,
    /// Script URLs added by authenticators (reCAPTCHA, ...).
    pub scripts: Vec<String>,
}

/// A social identity provider offered on the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProvider {
    /// Unique alias.
    pub alias: String,
    /// Human-readable name.
    pub display_name: Option<String>,
    /// Icon classes supplied by the server.
    pub icon_classes: Option<String>,
    /// URL starting the brokered login.
    pub login_url: String,
    /// Provider type (`google`, `oidc`, ...).
    pub provider_id: Option<String>,
}

impl SocialProvider {
    /// Returns the label shown on the button.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.alias)
    }
}

/// Social providers block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    /// Whether the server wants the block shown.
    pub display_info: bool,
    /// Providers in server order.
    pub providers: Option<Vec<SocialProvider>>,
}

/// Values entered in a previous login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginAttempt {
    /// Remembered username.
    pub username: Option<String>,
    /// Remember-me value (`"on"` when checked).
    pub remember_me: Option<String>,
}

impl LoginAttempt {
    /// Returns whether remember-me was checked.
    #[must_use]
    pub fn remember_me_checked(&self) -> bool {
        self.remember_me.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Context of `login.ftl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginContext {
    /// Shared fields.
    #[serde(flatten)]
    pub common: CommonContext,
    /// Social providers.
    pub social: Option<Social>,
    /// Whether the username was collected in an earlier step.
    pub username_hidden: bool,
    /// Previous attempt.
    pub login: LoginAttempt,
    /// Whether registration is disabled for this client.
    pub registration_disabled: bool,
}

/// Annotations steering how a profile attribute is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeAnnotations {
    /// HTML input type (`text`, `email`, `tel`, ...).
    pub input_type: Option<String>,
    /// Placeholder text.
    pub input_type_placeholder: Option<String>,
    /// Helper text above the input.
    pub input_helper_text_before: Option<String>,
    /// Helper text below the input.
    pub input_helper_text_after: Option<String>,
}

/// A user-profile attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribute {
    /// Attribute (and form field) name.
    pub name: String,
    /// Display name, often a `${key}` reference.
    pub display_name: Option<String>,
    /// Whether a value is required.
    pub required: bool,
    /// Current value.
    pub value: Option<String>,
    /// Whether the value is read-only.
    pub read_only: bool,
    /// `autocomplete` hint.
    pub autocomplete: Option<String>,
    /// Rendering annotations.
    pub annotations: AttributeAnnotations,
}

/// User-profile attributes in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Attributes.
    pub attributes: Vec<Attribute>,
}

/// Context of `register.ftl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterContext {
    /// Shared fields.
    #[serde(flatten)]
    pub common: CommonContext,
    /// Profile attributes.
    pub profile: UserProfile,
    /// Whether a password must be chosen.
    pub password_required: bool,
    /// Whether reCAPTCHA is required.
    pub recaptcha_required: bool,
    /// Whether the reCAPTCHA widget is visible.
    pub recaptcha_visible: bool,
    /// reCAPTCHA site key.
    pub recaptcha_site_key: Option<String>,
    /// reCAPTCHA action name.
    pub recaptcha_action: Option<String>,
    /// Whether terms must be accepted.
    pub terms_acceptance_required: bool,
}

/// An OTP credential of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtpCredential {
    /// Credential id.
    pub id: String,
    /// User-chosen label.
    pub user_label: String,
}

/// OTP credentials offered on the OTP page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtpLogin {
    /// Credentials in server order.
    pub user_otp_credentials: Vec<OtpCredential>,
    /// Preselected credential.
    pub selected_credential_id: Option<String>,
}

/// Context of `login-otp.ftl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginOtpContext {
    /// Shared fields.
    #[serde(flatten)]
    pub common: CommonContext,
    /// OTP credentials.
    pub otp_login: OtpLogin,
}

/// Context of any page without a dedicated renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericContext {
    /// Shared fields.
    #[serde(flatten)]
    pub common: CommonContext,
    /// Page identifier.
    pub page_id: String,
    /// Profile attributes, for pages that edit the profile.
    pub profile: Option<UserProfile>,
}

/// Context of one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KcContext {
    /// `login.ftl`
    Login(LoginContext),
    /// `register.ftl`
    Register(RegisterContext),
    /// `login-otp.ftl`
    LoginOtp(LoginOtpContext),
    /// Everything else.
    Other(GenericContext),
}

impl KcContext {
    /// Decodes a context from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decodes a context from a JSON value, dispatching on `pageId`.
    pub fn from_value(value: Value) -> Result<Self> {
        let page_id = value
            .get("pageId")
            .and_then(Value::as_str)
            .map(PageId::parse)
            .ok_or(ThemeError::MissingPageId)?;

        let context = match page_id {
            PageId::Login => Self::Login(serde_json::from_value(value)?),
            PageId::Register => Self::Register(serde_json::from_value(value)?),
            PageId::LoginOtp => Self::LoginOtp(serde_json::from_value(value)?),
            PageId::Other(_) => Self::Other(serde_json::from_value(value)?),
        };
        Ok(context)
    }

    /// Encodes the context back to JSON, including its `pageId`.
    pub fn to_value(&self) -> Result<Value> {
        let mut value = match self {
            Self::Login(ctx) => serde_json::to_value(ctx)?,
            Self::Register(ctx) => serde_json::to_value(ctx)?,
            Self::LoginOtp(ctx) => serde_json::to_value(ctx)?,
            Self::Other(ctx) => serde_json::to_value(ctx)?,
        };
        if let Value::Object(map) = &mut value {
            map.insert(
                "pageId".to_string(),
                Value::String(self.page_id().as_str().to_string()),
            );
        }
        Ok(value)
    }

    /// Returns the page identifier.
    #[must_use]
    pub fn page_id(&self) -> PageId {
        match self {
            Self::Login(_) => PageId::Login,
            Self::Register(_) => PageId::Register,
            Self::LoginOtp(_) => PageId::LoginOtp,
            Self::Other(ctx) => PageId::parse(&ctx.page_id),
        }
    }

    /// Returns the fields shared by every page.
    #[must_use]
    pub fn common(&self) -> &CommonContext {
        match self {
            Self::Login(ctx) => &ctx.common,
            Self::Register(ctx) => &ctx.common,
            Self::LoginOtp(ctx) => &ctx.common,
            Self::Other(ctx) => &ctx.common,
        }
    }
}
