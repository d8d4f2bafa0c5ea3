//! Password input with a visibility toggle.

use askama::Template;

use crate::classes::{clsx, ClassResolver};
use crate::error::Result;
use crate::form_state::PasswordVisibility;
use crate::i18n::I18n;

#[derive(Template)]
#[template(path = "password_input.html")]
struct PasswordInputTemplate<'a> {
    classes: &'a ClassResolver,
    group_class: String,
    input_id: &'a str,
    name: &'a str,
    has_tabindex: bool,
    tabindex: u32,
    autocomplete: &'a str,
    input_type: &'static str,
    invalid: bool,
    label_show: String,
    label_hide: String,
    icon_show: String,
    icon_hide: String,
}

impl PasswordInputTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// A password input wrapped with its show/hide toggle.
///
/// The toggle controls exactly one input, by id, and only within this
/// wrapper.
#[derive(Debug, Clone)]
pub struct PasswordInput<'a> {
    input_id: &'a str,
    name: &'a str,
    tabindex: Option<u32>,
    autocomplete: &'a str,
    invalid: bool,
}

impl<'a> PasswordInput<'a> {
    /// Creates a masked password input whose id and name are `input_id`.
    #[must_use]
    pub const fn new(input_id: &'a str) -> Self {
        Self {
            input_id,
            name: input_id,
            tabindex: None,
            autocomplete: "current-password",
            invalid: false,
        }
    }

    /// Sets the form field name.
    #[must_use]
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Sets the tab index.
    #[must_use]
    pub const fn tabindex(mut self, tabindex: u32) -> Self {
        self.tabindex = Some(tabindex);
        self
    }

    /// Sets the `autocomplete` hint.
    #[must_use]
    pub const fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    /// Marks the input invalid.
    #[must_use]
    pub const fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Renders the wrapper, the input and the toggle button. The input starts
    /// masked; the toggle carries both states for the browser script.
    pub fn render(&self, i18n: &I18n, classes: &ClassResolver) -> Result<String> {
        let masked = PasswordVisibility::new();
        let mut revealed = masked;
        revealed.toggle();

        let group = classes.class_of("kcInputGroup");
        let template = PasswordInputTemplate {
            classes,
            group_class: clsx(&[&group, if self.invalid { "kcInputGroupInvalid" } else { "" }]),
            input_id: self.input_id,
            name: self.name,
            has_tabindex: self.tabindex.is_some(),
            tabindex: self.tabindex.unwrap_or_default(),
            autocomplete: self.autocomplete,
            input_type: masked.input_type(),
            invalid: self.invalid,
            label_show: i18n.msg_str(masked.label_key()),
            label_hide: i18n.msg_str(revealed.label_key()),
            icon_show: classes.class_of(masked.icon_class_key()),
            icon_hide: classes.class_of(revealed.icon_class_key()),
        };
        Ok(template.render()?)
    }
}
