//! Ephemeral form state.
//!
//! Each rendered page owns a couple of flags that only live until the
//! browser navigates away. The bundled browser script ([`FORM_SCRIPT`])
//! flips them on the live document:
//!
//! - `form[data-kc-disable-on-submit]`: on submit, the form's single
//!   `input[data-kc-submit]` is disabled once and never re-enabled.
//! - `button[data-kc-password-toggle]`: each activation flips the input
//!   named by `aria-controls` between masked and plain text.
//!
//! [`PasswordVisibility`] describes the toggle states the renderers emit.

/// Browser behavior of the rendered forms.
pub const FORM_SCRIPT: &str = include_str!("../assets/js/kc-form.js");

/// Reveal flag of a password input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    revealed: bool,
}

impl PasswordVisibility {
    /// Creates a masked state.
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: false }
    }

    /// Flips the flag.
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Returns whether the password is shown in plain text.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Input `type` for the current state.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        if self.revealed {
            "text"
        } else {
            "password"
        }
    }

    /// Message key of the toggle's accessible label: the action it performs.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        if self.revealed {
            "hidePassword"
        } else {
            "showPassword"
        }
    }

    /// Class key of the toggle's icon.
    #[must_use]
    pub const fn icon_class_key(self) -> &'static str {
        if self.revealed {
            "kcFormPasswordVisibilityIconHide"
        } else {
            "kcFormPasswordVisibilityIconShow"
        }
    }
}
