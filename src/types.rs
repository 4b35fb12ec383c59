//! Shared types passed from configuration into every renderer.
//!
//! Everything here is read-only once the config is loaded. Renderers take
//! these by reference; nothing is stored globally.

use serde::{Deserialize, Serialize};

/// Identity of the site, used to populate document head tags.
///
/// Optional fields that are absent simply produce no tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Comma-separated, emitted verbatim.
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_systems: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Source repository of the advertised product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Canonical origin, e.g. `https://ori3nt8.nickguletskii.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Analytics tracking identifier. Carried for completeness; no
    /// analytics script is generated from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Ori3nt8".to_string(),
            author: "Nick Guletskii".to_string(),
            description: "Software for automatically rotating photos/fixing the JPEG \
                          orientation using a neural network"
                .to_string(),
            keywords: "Image, Photo, Rotation, Orientation".to_string(),
            application_category: Some("Multimedia".to_string()),
            operating_systems: Some("Windows 10, Linux".to_string()),
            download_url: Some(
                "https://github.com/nickguletskii/ori3nt8/releases/latest".to_string(),
            ),
            source_url: Some("https://github.com/nickguletskii/ori3nt8".to_string()),
            site_url: Some("https://ori3nt8.nickguletskii.com".to_string()),
            tracking_id: Some("UA-46764899-3".to_string()),
        }
    }
}

impl SiteMetadata {
    /// Resolve a site-relative URL against `site_url`.
    ///
    /// Returns the input unchanged when no `site_url` is configured or the
    /// input is already absolute.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match &self.site_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

/// External targets for the navbar and hero call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductLinks {
    /// Releases page of the advertised product.
    pub releases: String,
    /// Source code repository.
    pub source: String,
}

impl Default for ProductLinks {
    fn default() -> Self {
        Self {
            releases: "https://github.com/nickguletskii/ori3nt8/releases".to_string(),
            source: "https://github.com/nickguletskii/ori3nt8".to_string(),
        }
    }
}

/// Page chrome chosen by the layout.
///
/// The home page embeds its own navbar inside the hero, so it asks for
/// [`Chrome::Bare`]; every other page gets the shared navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Chrome {
    #[default]
    Navbar,
    Bare,
}

impl From<bool> for Chrome {
    fn from(include_navbar: bool) -> Self {
        if include_navbar {
            Chrome::Navbar
        } else {
            Chrome::Bare
        }
    }
}

impl Chrome {
    pub fn includes_navbar(self) -> bool {
        matches!(self, Chrome::Navbar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_defaults_to_navbar() {
        assert_eq!(Chrome::default(), Chrome::Navbar);
        assert!(Chrome::default().includes_navbar());
    }

    #[test]
    fn chrome_from_flag() {
        assert_eq!(Chrome::from(true), Chrome::Navbar);
        assert_eq!(Chrome::from(false), Chrome::Bare);
        assert!(!Chrome::Bare.includes_navbar());
    }

    #[test]
    fn absolute_url_joins_site_url() {
        let meta = SiteMetadata {
            site_url: Some("https://example.com/".to_string()),
            ..SiteMetadata::default()
        };
        assert_eq!(
            meta.absolute_url("/static/shot.png"),
            "https://example.com/static/shot.png"
        );
    }

    #[test]
    fn absolute_url_without_site_url_is_unchanged() {
        let meta = SiteMetadata {
            site_url: None,
            ..SiteMetadata::default()
        };
        assert_eq!(meta.absolute_url("/static/shot.png"), "/static/shot.png");
    }

    #[test]
    fn absolute_url_keeps_absolute_input() {
        let meta = SiteMetadata::default();
        assert_eq!(
            meta.absolute_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn partial_metadata_keeps_defaults() {
        let meta: SiteMetadata = toml::from_str(r#"title = "Other""#).unwrap();
        assert_eq!(meta.title, "Other");
        assert_eq!(meta.author, "Nick Guletskii");
    }
}
