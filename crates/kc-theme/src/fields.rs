//! User-profile field groups.
//!
//! Registration and profile pages render their attribute inputs through a
//! [`FieldGroupRenderer`] injected by the caller. The default renderer,
//! [`UserProfileFormFields`], is loaded once per process through
//! [`LazyFieldRenderer`] and cached from then on.

use askama::Template;
use once_cell::sync::OnceCell;

use crate::classes::ClassResolver;
use crate::context::Attribute;
use crate::error::Result;
use crate::i18n::I18n;
use crate::messages::FieldMessages;
use crate::pages::password::PasswordInput;
use crate::sanitize::kc_sanitize;

/// Inputs of a field group render.
#[derive(Clone, Copy)]
pub struct FieldGroupProps<'a> {
    /// Profile attributes in display order.
    pub attributes: &'a [Attribute],
    /// Field error queries.
    pub messages: &'a dyn FieldMessages,
    /// Message accessor.
    pub i18n: &'a I18n,
    /// Class resolver.
    pub classes: &'a ClassResolver,
    /// Whether the server requires a new password.
    pub password_required: bool,
    /// Whether the password must be entered twice. Passed through unchanged.
    pub make_user_confirm_password: bool,
    /// Whether the email address identifies the user. Password fields follow
    /// `email` when set, `username` otherwise.
    pub email_as_username: bool,
}

/// Renders a group of profile fields.
pub trait FieldGroupRenderer: Send + Sync {
    /// Renders the fields as an HTML fragment.
    fn render(&self, props: &FieldGroupProps<'_>) -> Result<String>;
}

struct FieldRow {
    name: String,
    label: String,
    required: bool,
    input_type: String,
    value: String,
    read_only: bool,
    autocomplete: String,
    placeholder: String,
    helper_before: String,
    helper_after: String,
    has_error: bool,
    error: String,
    password: Option<String>,
}

impl FieldRow {
    fn is_password(&self) -> bool {
        self.password.is_some()
    }

    fn password_html(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[derive(Template)]
#[template(path = "user_profile_fields.html")]
struct FieldsTemplate<'a> {
    classes: &'a ClassResolver,
    fields: Vec<FieldRow>,
}

impl FieldsTemplate<'_> {
    fn cls(&self, key: &str) -> String {
        self.classes.class_of(key)
    }
}

/// Default renderer: one labelled input per attribute, plus the password
/// fields when the server asks for a new password.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserProfileFormFields;

impl UserProfileFormFields {
    fn attribute_row(attribute: &Attribute, props: &FieldGroupProps<'_>) -> FieldRow {
        let i18n = props.i18n;
        let label = attribute.display_name.as_deref().map_or_else(
            || i18n.msg(&attribute.name),
            |display_name| i18n.advanced_msg(display_name),
        );
        let annotations = &attribute.annotations;
        let error = props.messages.get_first_error(&[attribute.name.as_str()]);

        FieldRow {
            name: attribute.name.clone(),
            label,
            required: attribute.required,
            input_type: annotations
                .input_type
                .clone()
                .unwrap_or_else(|| default_input_type(&attribute.name).to_string()),
            value: attribute.value.clone().unwrap_or_default(),
            read_only: attribute.read_only,
            autocomplete: attribute.autocomplete.clone().unwrap_or_default(),
            placeholder: annotations
                .input_type_placeholder
                .as_deref()
                .map(|p| i18n.advanced_msg_str(p))
                .unwrap_or_default(),
            helper_before: annotations
                .input_helper_text_before
                .as_deref()
                .map(|t| i18n.advanced_msg(t))
                .unwrap_or_default(),
            helper_after: annotations
                .input_helper_text_after
                .as_deref()
                .map(|t| i18n.advanced_msg(t))
                .unwrap_or_default(),
            has_error: error.is_some(),
            error: error.map(kc_sanitize).unwrap_or_default(),
            password: None,
        }
    }

    fn password_row(
        name: &str,
        label_key: &str,
        autocomplete: &str,
        props: &FieldGroupProps<'_>,
    ) -> Result<FieldRow> {
        let error = props.messages.get_first_error(&[name]);
        let input = PasswordInput::new(name)
            .autocomplete(autocomplete)
            .invalid(error.is_some())
            .render(props.i18n, props.classes)?;

        Ok(FieldRow {
            name: name.to_string(),
            label: props.i18n.msg(label_key),
            required: true,
            input_type: "password".to_string(),
            value: String::new(),
            read_only: false,
            autocomplete: autocomplete.to_string(),
            placeholder: String::new(),
            helper_before: String::new(),
            helper_after: String::new(),
            has_error: error.is_some(),
            error: error.map(kc_sanitize).unwrap_or_default(),
            password: Some(input),
        })
    }
}

fn default_input_type(name: &str) -> &'static str {
    match name {
        "email" => "email",
        "phoneNumber" => "tel",
        _ => "text",
    }
}

impl FieldGroupRenderer for UserProfileFormFields {
    fn render(&self, props: &FieldGroupProps<'_>) -> Result<String> {
        let mut fields: Vec<FieldRow> = props
            .attributes
            .iter()
            .map(|attribute| Self::attribute_row(attribute, props))
            .collect();

        if props.password_required {
            // Password fields follow the field identifying the user, or close
            // the group when the profile has no such field.
            let identity = if props.email_as_username { "email" } else { "username" };
            let position = fields
                .iter()
                .position(|f| f.name == identity)
                .map_or(fields.len(), |i| i + 1);

            let mut password_rows = vec![Self::password_row(
                "password",
                "password",
                "new-password",
                props,
            )?];
            if props.make_user_confirm_password {
                password_rows.push(Self::password_row(
                    "password-confirm",
                    "passwordConfirm",
                    "new-password",
                    props,
                )?);
            }
            fields.splice(position..position, password_rows);
        }

        let template = FieldsTemplate {
            classes: props.classes,
            fields,
        };
        Ok(template.render()?)
    }
}

/// Lays the wrapped renderer's fields out on a two-column grid.
pub struct TwoColumnFields<'a>(pub &'a dyn FieldGroupRenderer);

impl FieldGroupRenderer for TwoColumnFields<'_> {
    fn render(&self, props: &FieldGroupProps<'_>) -> Result<String> {
        let inner = self.0.render(props)?;
        Ok(format!(
            "<div class=\"grid grid-cols-1 md:grid-cols-2 gap-4\">{inner}</div>"
        ))
    }
}

/// Load state of a lazily loaded renderer.
pub enum LoadState<'a> {
    /// Not loaded yet; callers render a placeholder or trigger the load.
    Pending,
    /// Loaded and cached for the rest of the process.
    Ready(&'a dyn FieldGroupRenderer),
}

/// A field renderer loaded on first use and cached afterwards.
pub struct LazyFieldRenderer {
    cell: OnceCell<Box<dyn FieldGroupRenderer>>,
    load: fn() -> Box<dyn FieldGroupRenderer>,
}

impl LazyFieldRenderer {
    /// Creates an unloaded renderer.
    #[must_use]
    pub const fn new(load: fn() -> Box<dyn FieldGroupRenderer>) -> Self {
        Self {
            cell: OnceCell::new(),
            load,
        }
    }

    /// Returns the current state without loading.
    #[must_use]
    pub fn state(&self) -> LoadState<'_> {
        match self.cell.get() {
            Some(renderer) => LoadState::Ready(renderer.as_ref()),
            None => LoadState::Pending,
        }
    }

    /// Returns the renderer, loading it on first call.
    pub fn get(&self) -> &dyn FieldGroupRenderer {
        self.cell
            .get_or_init(|| {
                tracing::debug!("loading user profile field renderer");
                (self.load)()
            })
            .as_ref()
    }
}

fn load_user_profile_fields() -> Box<dyn FieldGroupRenderer> {
    Box::new(UserProfileFormFields)
}

/// The process-wide default field renderer.
pub static USER_PROFILE_FORM_FIELDS: LazyFieldRenderer =
    LazyFieldRenderer::new(load_user_profile_fields);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::messages::MessagesPerField;

    fn attribute(name: &str, display_name: &str) -> Attribute {
        Attribute {
            name: name.to_string(),
            display_name: Some(display_name.to_string()),
            required: true,
            ..Attribute::default()
        }
    }

    fn render(attributes: &[Attribute], messages: &MessagesPerField, confirm: bool) -> String {
        render_with(attributes, messages, confirm, false)
    }

    fn render_with(
        attributes: &[Attribute],
        messages: &MessagesPerField,
        confirm: bool,
        email_as_username: bool,
    ) -> String {
        let i18n = I18n::default();
        let classes = ClassResolver::new(true, Arc::default());
        let props = FieldGroupProps {
            attributes,
            messages,
            i18n: &i18n,
            classes: &classes,
            password_required: true,
            make_user_confirm_password: confirm,
            email_as_username,
        };
        UserProfileFormFields.render(&props).unwrap()
    }

    #[test]
    fn renders_attributes_with_resolved_labels() {
        let attributes = vec![attribute("firstName", "${firstName}")];
        let html = render(&attributes, &MessagesPerField::new(), false);

        assert!(html.contains("id=\"firstName\""));
        assert!(html.contains("First name"));
        assert!(html.contains("type=\"text\""));
    }

    fn profile() -> Vec<Attribute> {
        vec![
            attribute("username", "${username}"),
            attribute("email", "${email}"),
            attribute("firstName", "${firstName}"),
        ]
    }

    #[test]
    fn password_fields_follow_username() {
        let html = render(&profile(), &MessagesPerField::new(), true);

        let username = html.find("id=\"username\"").unwrap();
        let password = html.find("id=\"password\"").unwrap();
        let confirm = html.find("id=\"password-confirm\"").unwrap();
        let email = html.find("id=\"email\"").unwrap();
        assert!(username < password);
        assert!(password < confirm);
        assert!(confirm < email);
    }

    #[test]
    fn password_fields_follow_email_when_it_is_the_username() {
        let html = render_with(&profile(), &MessagesPerField::new(), true, true);

        let email = html.find("id=\"email\"").unwrap();
        let password = html.find("id=\"password\"").unwrap();
        let confirm = html.find("id=\"password-confirm\"").unwrap();
        let first_name = html.find("id=\"firstName\"").unwrap();
        assert!(email < password);
        assert!(password < confirm);
        assert!(confirm < first_name);
    }

    #[test]
    fn password_fields_close_group_without_identity_field() {
        let attributes = vec![attribute("firstName", "${firstName}")];
        let html = render(&attributes, &MessagesPerField::new(), false);

        let first_name = html.find("id=\"firstName\"").unwrap();
        let password = html.find("id=\"password\"").unwrap();
        assert!(first_name < password);
    }

    #[test]
    fn confirmation_flag_is_passed_through() {
        let attributes = vec![attribute("username", "${username}")];
        let html = render(&attributes, &MessagesPerField::new(), false);
        assert!(html.contains("id=\"password\""));
        assert!(!html.contains("id=\"password-confirm\""));
    }

    #[test]
    fn field_errors_are_shown_inline() {
        let attributes = vec![attribute("email", "${email}")];
        let messages = MessagesPerField::new().with("email", "Invalid email address.");
        let html = render(&attributes, &messages, false);

        assert!(html.contains("id=\"input-error-email\""));
        assert!(html.contains("Invalid email address."));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn two_column_wrapper() {
        let i18n = I18n::default();
        let classes = ClassResolver::new(true, Arc::default());
        let messages = MessagesPerField::new();
        let props = FieldGroupProps {
            attributes: &[],
            messages: &messages,
            i18n: &i18n,
            classes: &classes,
            password_required: false,
            make_user_confirm_password: false,
            email_as_username: false,
        };
        let html = TwoColumnFields(&UserProfileFormFields).render(&props).unwrap();
        assert!(html.starts_with("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-4\">"));
    }

    #[test]
    fn lazy_renderer_loads_once() {
        let lazy = LazyFieldRenderer::new(load_user_profile_fields);
        assert!(matches!(lazy.state(), LoadState::Pending));

        let first: *const dyn FieldGroupRenderer = lazy.get();
        assert!(matches!(lazy.state(), LoadState::Ready(_)));

        let second: *const dyn FieldGroupRenderer = lazy.get();
        assert!(std::ptr::addr_eq(first, second));
    }
}
