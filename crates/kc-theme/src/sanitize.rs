//! HTML sanitization of server-supplied fragments.
//!
//! Error messages, banner summaries and provider labels come from the
//! identity server and may legitimately contain simple markup. They are
//! inserted unescaped, so every such fragment goes through [`kc_sanitize`]
//! first.

use std::collections::HashSet;

use ammonia::Builder;
use once_cell::sync::Lazy;

/// Markup allowed in server-supplied fragments.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "li",
    "ol", "p", "pre", "small", "span", "strong", "sub", "sup", "u", "ul",
];

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .add_tag_attributes("a", &["target"])
        .add_generic_attributes(&["class"]);
    builder
});

/// Sanitizes an HTML fragment, keeping only allowlisted markup.
#[must_use]
pub fn kc_sanitize(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(
            kc_sanitize("Invalid username or password."),
            "Invalid username or password."
        );
    }

    #[test]
    fn scripts_are_removed() {
        let cleaned = kc_sanitize("Hello<script>alert(1)</script>");
        assert_eq!(cleaned, "Hello");
    }

    #[test]
    fn event_handlers_are_stripped() {
        let cleaned = kc_sanitize(r#"<b onclick="steal()">Acme</b>"#);
        assert_eq!(cleaned, "<b>Acme</b>");
    }

    #[test]
    fn javascript_links_are_dropped() {
        let cleaned = kc_sanitize(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript:"));
    }

    #[test]
    fn simple_formatting_survives() {
        let cleaned = kc_sanitize("<strong>Acme</strong> <em>Corp</em>");
        assert_eq!(cleaned, "<strong>Acme</strong> <em>Corp</em>");
    }

    #[test]
    fn bare_ampersand_is_escaped() {
        assert_eq!(kc_sanitize("Tom & Jerry"), "Tom &amp; Jerry");
    }
}
