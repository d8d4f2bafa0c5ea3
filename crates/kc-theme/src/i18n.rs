//! Message lookup for the login pages.
//!
//! Messages are resolved in order: theme overrides for the active locale,
//! the built-in bundle for the active locale, theme overrides for the
//! default locale, the built-in English bundle, and finally the key itself.

use std::collections::HashMap;

use crate::sanitize::kc_sanitize;

/// Theme-supplied translations: language tag to key to message.
pub type MessageOverrides = HashMap<String, HashMap<String, String>>;

/// Language tag of the fallback bundle.
pub const FALLBACK_LANGUAGE_TAG: &str = "en";

const EN: &[(&str, &str)] = &[
    ("acceptTerms", "I agree to the terms and conditions"),
    ("backToLogin", "« Back to Login"),
    ("doForgotPassword", "Forgot Password?"),
    ("doLogIn", "Sign In"),
    ("doRegister", "Register"),
    ("doSubmit", "Submit"),
    ("doTryAnotherWay", "Try Another Way"),
    ("email", "Email"),
    ("firstName", "First name"),
    ("hidePassword", "Hide password"),
    ("identity-provider-login-label", "Or sign in with"),
    ("languages", "Languages"),
    ("lastName", "Last name"),
    ("loading", "Loading..."),
    ("loginAccountTitle", "Sign in to your account"),
    ("loginOtpOneTime", "One-time code"),
    ("loginTitle", "Sign in to {0}"),
    ("loginTitleHtml", "{0}"),
    ("noAccount", "New user?"),
    ("password", "Password"),
    ("passwordConfirm", "Confirm password"),
    ("registerTitle", "Register"),
    ("rememberMe", "Remember me"),
    ("requiredFields", "Required fields"),
    ("restartLoginTooltip", "Restart login"),
    ("showPassword", "Show password"),
    ("termsText", "Terms and conditions to be defined"),
    ("termsTitle", "Terms and Conditions"),
    ("username", "Username"),
    ("usernameOrEmail", "Username or email"),
];

const PT_BR: &[(&str, &str)] = &[
    ("acceptTerms", "Eu concordo com os termos e condições"),
    ("backToLogin", "« Voltar para o login"),
    ("doForgotPassword", "Esqueceu sua senha?"),
    ("doLogIn", "Entrar"),
    ("doRegister", "Cadastre-se"),
    ("doSubmit", "Enviar"),
    ("doTryAnotherWay", "Tentar outra forma"),
    ("email", "E-mail"),
    ("firstName", "Nome"),
    ("hidePassword", "Ocultar senha"),
    ("identity-provider-login-label", "Ou entre com"),
    ("languages", "Idiomas"),
    ("lastName", "Sobrenome"),
    ("loading", "Carregando..."),
    ("loginAccountTitle", "Entre na sua conta"),
    ("loginOtpOneTime", "Código de uso único"),
    ("loginTitle", "Entrar em {0}"),
    ("noAccount", "Novo usuário?"),
    ("password", "Senha"),
    ("passwordConfirm", "Confirmar senha"),
    ("registerTitle", "Cadastro"),
    ("rememberMe", "Lembrar de mim"),
    ("requiredFields", "Campos obrigatórios"),
    ("restartLoginTooltip", "Reiniciar login"),
    ("showPassword", "Mostrar senha"),
    ("termsTitle", "Termos e Condições"),
    ("username", "Nome de usuário"),
    ("usernameOrEmail", "Nome de usuário ou e-mail"),
];

/// Returns the built-in bundle for a language tag.
///
/// Matches the full tag first, then its primary subtag (`pt` for `pt-PT`).
fn builtin_bundle(language_tag: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let primary = language_tag.split(['-', '_']).next().unwrap_or(language_tag);
    match (language_tag, primary) {
        ("en", _) | (_, "en") => Some(EN),
        ("pt-BR", _) | (_, "pt") => Some(PT_BR),
        _ => None,
    }
}

fn lookup(bundle: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    bundle.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Replaces `{0}`, `{1}`, ... with the given arguments.
fn apply_args(message: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(message.to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{i}}}"), arg)
        })
}

/// Message accessor for one render.
#[derive(Debug, Clone)]
pub struct I18n {
    language_tag: String,
    bundle: Option<&'static [(&'static str, &'static str)]>,
    overrides: HashMap<String, String>,
    fallback_overrides: HashMap<String, String>,
}

impl I18n {
    /// Creates an accessor for the given language tag.
    ///
    /// `None` or an unsupported tag falls back to English.
    #[must_use]
    pub fn new(language_tag: Option<&str>, overrides: &MessageOverrides) -> Self {
        let requested = language_tag.unwrap_or(FALLBACK_LANGUAGE_TAG);
        let bundle = builtin_bundle(requested);
        let has_overrides = overrides.contains_key(requested);

        let language_tag = if bundle.is_some() || has_overrides {
            requested.to_string()
        } else {
            tracing::warn!(language_tag = requested, "unsupported locale, using fallback");
            FALLBACK_LANGUAGE_TAG.to_string()
        };

        Self {
            bundle: builtin_bundle(&language_tag),
            overrides: overrides.get(&language_tag).cloned().unwrap_or_default(),
            fallback_overrides: overrides
                .get(FALLBACK_LANGUAGE_TAG)
                .cloned()
                .unwrap_or_default(),
            language_tag,
        }
    }

    /// Returns the active language tag.
    #[must_use]
    pub fn current_language_tag(&self) -> &str {
        &self.language_tag
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| self.bundle.and_then(|b| lookup(b, key)))
            .or_else(|| self.fallback_overrides.get(key).map(String::as_str))
            .or_else(|| lookup(EN, key))
    }

    /// Returns `true` if the key resolves to a message.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Returns a message as plain text. Unknown keys resolve to themselves.
    #[must_use]
    pub fn msg_str(&self, key: &str) -> String {
        self.msg_str_with(key, &[])
    }

    /// Returns a message as plain text with positional arguments.
    #[must_use]
    pub fn msg_str_with(&self, key: &str, args: &[&str]) -> String {
        let message = self.raw(key).unwrap_or(key);
        apply_args(message, args)
    }

    /// Returns a message as sanitized HTML.
    #[must_use]
    pub fn msg(&self, key: &str) -> String {
        kc_sanitize(&self.msg_str(key))
    }

    /// Returns a message as sanitized HTML with positional arguments.
    #[must_use]
    pub fn msg_with(&self, key: &str, args: &[&str]) -> String {
        kc_sanitize(&self.msg_str_with(key, args))
    }

    /// Resolves text that may be a `${key}` reference.
    ///
    /// Plain text is returned unchanged.
    #[must_use]
    pub fn advanced_msg_str(&self, text: &str) -> String {
        match text.strip_prefix("${").and_then(|t| t.strip_suffix('}')) {
            Some(key) => self.msg_str(key),
            None => text.to_string(),
        }
    }

    /// Sanitized HTML variant of [`I18n::advanced_msg_str`].
    #[must_use]
    pub fn advanced_msg(&self, text: &str) -> String {
        kc_sanitize(&self.advanced_msg_str(text))
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &MessageOverrides::new())
    }
}
