//! Per-field validation messages.
//!
//! The identity server reports validation failures as a field name to
//! message mapping. Pages never read that mapping directly; they go through
//! [`FieldMessages`], which only answers "is there an error for any of
//! these fields" and "what is the first one".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Query capability over server-reported field errors.
pub trait FieldMessages {
    /// Returns `true` if any of `fields` has an error.
    fn exists_error(&self, fields: &[&str]) -> bool;

    /// Returns the error of the first field in `fields` that has one.
    ///
    /// Field order is the caller's order, not the server's.
    fn get_first_error(&self, fields: &[&str]) -> Option<&str>;
}

/// Immutable field to message mapping, built once per render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagesPerField {
    by_field: HashMap<String, String>,
}

impl MessagesPerField {
    /// Creates an empty set (no field has an error).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for a field. Used when building contexts in code.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.by_field.insert(field.into(), message.into());
        self
    }

    /// Returns the message for a single field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.by_field.get(field).map(String::as_str)
    }

    /// Returns `true` if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

impl FieldMessages for MessagesPerField {
    fn exists_error(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.by_field.contains_key(*field))
    }

    fn get_first_error(&self, fields: &[&str]) -> Option<&str> {
        fields.iter().find_map(|field| self.get(field))
    }
}

impl<K, V> FromIterator<(K, V)> for MessagesPerField
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            by_field: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_errors() {
        let messages = MessagesPerField::new();
        assert!(!messages.exists_error(&["username", "password"]));
        assert_eq!(messages.get_first_error(&["username"]), None);
    }

    #[test]
    fn exists_error_matches_any_field() {
        let messages = MessagesPerField::new().with("password", "Invalid password.");
        assert!(messages.exists_error(&["username", "password"]));
        assert!(!messages.exists_error(&["username"]));
    }

    #[test]
    fn first_error_follows_caller_order() {
        let messages: MessagesPerField = [("username", "Bad user"), ("password", "Bad password")]
            .into_iter()
            .collect();

        assert_eq!(
            messages.get_first_error(&["username", "password"]),
            Some("Bad user")
        );
        assert_eq!(
            messages.get_first_error(&["password", "username"]),
            Some("Bad password")
        );
    }

    #[test]
    fn deserializes_from_plain_map() {
        let messages: MessagesPerField =
            serde_json::from_str(r#"{"totp": "Invalid authenticator code."}"#).unwrap();
        assert_eq!(messages.get("totp"), Some("Invalid authenticator code."));
    }
}
