//! Style class resolution.
//!
//! Markup never hardcodes presentation classes. It names semantic keys
//! (`kcFormGroupClass`, `kcButtonClass`, ...) and [`ClassResolver`] turns
//! them into class attributes. A theme can override any key; an override
//! replaces the default for that key, every other key keeps its default.

use std::collections::HashMap;
use std::sync::Arc;

/// Theme overrides: semantic key to class names.
pub type ClassOverrides = HashMap<String, String>;

/// Default classes, by semantic key.
const DEFAULT_CLASSES: &[(&str, &str)] = &[
    ("kcAlertClass", "pf-v5-c-alert pf-m-inline pf-v5-u-mb-md"),
    ("kcAlertTitleClass", "pf-v5-c-alert__title kc-feedback-text"),
    ("kcBodyClass", ""),
    ("kcButtonBlockClass", "pf-m-block"),
    ("kcButtonClass", "pf-v5-c-button"),
    ("kcButtonLargeClass", "btn-lg"),
    ("kcButtonPrimaryClass", "pf-m-primary"),
    ("kcCheckboxInputClass", "pf-v5-c-check__input"),
    ("kcCommonLogoIdP", "kc-social-provider-logo kc-social-gray"),
    ("kcContentWrapperClass", "pf-v5-u-mb-md-on-md"),
    ("kcFeedbackErrorIcon", "fa fa-fw fa-exclamation-circle"),
    ("kcFeedbackInfoIcon", "fa fa-fw fa-info-circle"),
    ("kcFeedbackSuccessIcon", "fa fa-fw fa-check-circle"),
    ("kcFeedbackWarningIcon", "fa fa-fw fa-exclamation-triangle"),
    ("kcFormButtonsClass", "pf-v5-c-form__actions"),
    ("kcFormCardClass", "card-pf"),
    ("kcFormClass", "pf-v5-c-form"),
    ("kcFormGroupClass", "pf-v5-c-form__group"),
    ("kcFormHeaderClass", "login-pf-header"),
    ("kcFormOptionsClass", "pf-v5-c-form__group-label"),
    ("kcFormOptionsWrapperClass", "pf-v5-c-form__helper-text"),
    ("kcFormPasswordVisibilityButtonClass", "pf-v5-c-button pf-m-control"),
    ("kcFormPasswordVisibilityIconHide", "fa-eye-slash fas"),
    ("kcFormPasswordVisibilityIconShow", "fa-eye fas"),
    ("kcFormSettingClass", "login-pf-settings"),
    (
        "kcFormSocialAccountGridItem",
        "pf-v5-l-grid__item pf-m-6-col kc-social-grid-item",
    ),
    (
        "kcFormSocialAccountListButtonClass",
        "pf-v5-c-button pf-m-secondary pf-m-block kc-social-item kc-social-gray",
    ),
    (
        "kcFormSocialAccountListClass",
        "pf-v5-c-login__main-footer-links kc-social-links",
    ),
    ("kcFormSocialAccountListGridClass", "pf-v5-l-grid kc-social-grid"),
    ("kcFormSocialAccountNameClass", "kc-social-provider-name"),
    ("kcFormSocialAccountSectionClass", "kc-social-section kc-social-gray"),
    ("kcHeaderClass", "pf-v5-c-login__header"),
    ("kcHeaderWrapperClass", "pf-v5-c-brand"),
    ("kcHtmlClass", "login-pf"),
    ("kcInfoAreaWrapperClass", "pf-v5-c-login__main-footer-band"),
    ("kcInputClass", "pf-v5-c-form-control"),
    ("kcInputErrorMessageClass", "pf-v5-c-helper-text__item-text pf-m-error kc-feedback-text"),
    ("kcInputGroup", "pf-v5-c-input-group"),
    ("kcInputHelperTextAfterClass", "pf-v5-c-helper-text__item-text"),
    ("kcInputHelperTextBeforeClass", "pf-v5-c-helper-text__item-text"),
    ("kcInputWrapperClass", ""),
    ("kcLabelClass", "pf-v5-c-form__label pf-v5-c-form__label-text"),
    ("kcLabelWrapperClass", ""),
    ("kcLocaleDropDownClass", "pf-v5-c-dropdown"),
    ("kcLocaleItemClass", "pf-v5-c-dropdown__menu-item"),
    ("kcLocaleListClass", "pf-v5-c-dropdown__menu"),
    ("kcLocaleListItemClass", ""),
    ("kcLocaleMainClass", "pf-v5-c-login__main-header-utilities"),
    ("kcLocaleWrapperClass", ""),
    ("kcLoginClass", "pf-v5-c-login"),
    ("kcLoginOTPListClass", "pf-v5-c-tile"),
    ("kcLoginOTPListInputClass", "pf-v5-c-tile__input"),
    ("kcLoginOTPListItemHeaderClass", "pf-v5-c-tile__header"),
    ("kcLoginOTPListItemIconBodyClass", "pf-v5-c-tile__icon"),
    ("kcLoginOTPListItemIconClass", "fa fa-mobile"),
    ("kcLoginOTPListItemTitleClass", "pf-v5-c-tile__title"),
    ("kcResetFlowIcon", "fa fa-sync-alt fa-fw"),
    ("kcSignUpClass", "login-pf-signup"),
];

fn default_class(key: &str) -> Option<&'static str> {
    DEFAULT_CLASSES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Joins class names, skipping empty ones.
#[must_use]
pub fn clsx(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves semantic class keys to class attributes.
#[derive(Debug, Clone, Default)]
pub struct ClassResolver {
    use_default_css: bool,
    overrides: Arc<ClassOverrides>,
}

impl ClassResolver {
    /// Creates a resolver.
    ///
    /// With `use_default_css` off, keys without an override resolve to the
    /// key alone.
    #[must_use]
    pub fn new(use_default_css: bool, overrides: Arc<ClassOverrides>) -> Self {
        Self {
            use_default_css,
            overrides,
        }
    }

    /// Resolves a single key: the key itself, then its override or default.
    #[must_use]
    pub fn class_of(&self, key: &str) -> String {
        let resolved = match self.overrides.get(key) {
            Some(class) => Some(class.as_str()),
            None if self.use_default_css => default_class(key),
            None => None,
        };
        clsx(&[key, resolved.unwrap_or_default()])
    }

    /// Resolves several keys into one class attribute.
    #[must_use]
    pub fn resolve(&self, keys: &[&str]) -> String {
        let classes: Vec<String> = keys.iter().map(|k| self.class_of(k)).collect();
        let parts: Vec<&str> = classes.iter().map(String::as_str).collect();
        clsx(&parts)
    }

    /// Resolves `keys` plus `extra` only when `condition` holds.
    #[must_use]
    pub fn resolve_if(&self, keys: &[&str], condition: bool, extra: &str) -> String {
        let mut all: Vec<&str> = keys.to_vec();
        if condition {
            all.push(extra);
        }
        self.resolve(&all)
    }
}
