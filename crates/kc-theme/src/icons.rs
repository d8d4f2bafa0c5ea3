//! Icons for social login buttons.
//!
//! Four providers ship with a bundled icon. Any other provider falls back
//! to the icon classes the server supplies, or to a text-only button.

/// A social provider with a bundled icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    /// Google.
    Google,
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// `LinkedIn`.
    LinkedIn,
}

impl SocialIcon {
    /// All icons, in substring-match priority order.
    pub const ALL: [Self; 4] = [Self::Google, Self::Facebook, Self::Instagram, Self::LinkedIn];

    /// Returns the lowercase provider name used for matching.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
        }
    }

    /// Returns the asset file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Google => "google.svg",
            Self::Facebook => "facebook.svg",
            Self::Instagram => "instagram.svg",
            Self::LinkedIn => "linkedin.svg",
        }
    }

    /// Returns the bundled SVG document.
    #[must_use]
    pub const fn svg(self) -> &'static str {
        match self {
            Self::Google => include_str!("../assets/img/google.svg"),
            Self::Facebook => include_str!("../assets/img/facebook.svg"),
            Self::Instagram => include_str!("../assets/img/instagram.svg"),
            Self::LinkedIn => include_str!("../assets/img/linkedin.svg"),
        }
    }

    /// Returns the public URL of the icon under `resources_url`.
    #[must_use]
    pub fn url(self, resources_url: &str) -> String {
        format!("{}/img/{}", resources_url.trim_end_matches('/'), self.file_name())
    }

    /// Looks an icon up by its asset file name.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.file_name() == file_name)
    }
}

/// Resolves the bundled icon for a provider.
///
/// An exact alias match wins. Otherwise the first provider name, in
/// [`SocialIcon::ALL`] order, contained in the alias or display name
/// matches, so an alias such as `mygoogleclone` resolves to Google.
#[must_use]
pub fn resolve_icon(alias: &str, display_name: Option<&str>) -> Option<SocialIcon> {
    let alias = alias.to_lowercase();
    let display_name = display_name.unwrap_or_default().to_lowercase();

    if let Some(icon) = SocialIcon::ALL.into_iter().find(|icon| icon.name() == alias) {
        return Some(icon);
    }

    let icon = SocialIcon::ALL
        .into_iter()
        .find(|icon| alias.contains(icon.name()) || display_name.contains(icon.name()));

    if icon.is_none() {
        tracing::trace!(alias = %alias, "no bundled icon for provider");
    }
    icon
}
