//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. The file lives in
//! the site source root and is optional: stock defaults describe the
//! Ori3nt8 site, and a user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [metadata]
//! title = "Ori3nt8"
//! author = "Nick Guletskii"
//! description = "Software for automatically rotating photos/..."
//! keywords = "Image, Photo, Rotation, Orientation"
//! application_category = "Multimedia"
//! operating_systems = "Windows 10, Linux"
//! download_url = "https://github.com/nickguletskii/ori3nt8/releases/latest"
//! source_url = "https://github.com/nickguletskii/ori3nt8"
//! site_url = "https://ori3nt8.nickguletskii.com"
//! tracking_id = "UA-46764899-3"
//!
//! [links]
//! releases = "https://github.com/nickguletskii/ori3nt8/releases"
//! source = "https://github.com/nickguletskii/ori3nt8"
//!
//! [assets]
//! logo = "ori3nt8_long_white.svg"        # relative to <source>/images/
//! screenshot = "ori3nt8_screenshot.png"
//!
//! [theme]
//! primary = "#00d1b2"
//! primary_text = "#ffffff"
//! background = "#ffffff"
//! text = "#4a4a4a"
//! footer_background = "#f5f5f5"
//!
//! [sitemap]
//! enabled = true                         # needs metadata.site_url
//! ```
//!
//! Unknown keys are rejected to catch typos early. Optional metadata fields
//! set to an empty string are treated as absent.

use crate::types::{ProductLinks, SiteMetadata};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the config file inside the site source directory.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity record rendered into every page head.
    pub metadata: SiteMetadata,
    /// Download and source targets for the navbar and hero.
    pub links: ProductLinks,
    /// Static asset file names.
    pub assets: AssetsConfig,
    /// Colors emitted as CSS custom properties.
    pub theme: ThemeConfig,
    /// Sitemap output.
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "metadata.title must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("links.releases", &self.links.releases),
            ("links.source", &self.links.source),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        let urls = [
            ("metadata.download_url", self.metadata.download_url.as_deref()),
            ("metadata.source_url", self.metadata.source_url.as_deref()),
            ("metadata.site_url", self.metadata.site_url.as_deref()),
            ("links.releases", Some(self.links.releases.as_str())),
            ("links.source", Some(self.links.source.as_str())),
        ];
        for (key, value) in urls {
            if let Some(url) = value.filter(|u| !u.is_empty())
                && !is_http_url(url)
            {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        for (key, value) in [
            ("assets.logo", &self.assets.logo),
            ("assets.screenshot", &self.assets.screenshot),
        ] {
            if !is_plain_file_name(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a file name inside images/, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// A single normal path component: no separators, no `..`, not absolute.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Static asset file names, relative to `<source>/images/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Brand logo shown in the navbar.
    pub logo: String,
    /// Product screenshot shown in the hero and used as preview image.
    pub screenshot: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            logo: "ori3nt8_long_white.svg".to_string(),
            screenshot: "ori3nt8_screenshot.png".to_string(),
        }
    }
}

/// Color settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Navbar and hero background.
    pub primary: String,
    /// Text on top of `primary`.
    pub primary_text: String,
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
    /// Footer background.
    pub footer_background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#00d1b2".to_string(),
            primary_text: "#ffffff".to_string(),
            background: "#ffffff".to_string(),
            text: "#4a4a4a".to_string(),
            footer_background: "#f5f5f5".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Write `sitemap.xml`. Skipped with a warning when `metadata.site_url`
    /// is not set.
    pub enabled: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `site.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    blank_to_none(&mut config.metadata);
    config.validate()?;
    Ok(config)
}

/// TOML has no null, so an empty string is how a user drops a stock
/// optional field.
fn blank_to_none(meta: &mut SiteMetadata) {
    for field in [
        &mut meta.application_category,
        &mut meta.operating_systems,
        &mut meta.download_url,
        &mut meta.source_url,
        &mut meta.site_url,
        &mut meta.tracking_id,
    ] {
        if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
            *field = None;
        }
    }
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    log::debug!(
        "config: {} ({})",
        root.join(CONFIG_FILE).display(),
        if overlay.is_some() { "found" } else { "stock defaults" }
    );
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Ori3nt8 site configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site metadata, rendered into the <head> of every page
# ---------------------------------------------------------------------------
[metadata]
title = "Ori3nt8"
author = "Nick Guletskii"
description = "Software for automatically rotating photos/fixing the JPEG orientation using a neural network"
# Comma-separated, emitted verbatim.
keywords = "Image, Photo, Rotation, Orientation"

# Optional fields. Set to "" to leave the corresponding tag out.
application_category = "Multimedia"
operating_systems = "Windows 10, Linux"
download_url = "https://github.com/nickguletskii/ori3nt8/releases/latest"
source_url = "https://github.com/nickguletskii/ori3nt8"
# Canonical origin. Needed for sitemap.xml and absolute preview images.
site_url = "https://ori3nt8.nickguletskii.com"
# Kept with the metadata; no analytics script is generated.
tracking_id = "UA-46764899-3"

# ---------------------------------------------------------------------------
# Call-to-action targets (navbar and hero)
# ---------------------------------------------------------------------------
[links]
releases = "https://github.com/nickguletskii/ori3nt8/releases"
source = "https://github.com/nickguletskii/ori3nt8"

# ---------------------------------------------------------------------------
# Static assets, relative to <source>/images/. Missing files fail the build.
# ---------------------------------------------------------------------------
[assets]
logo = "ori3nt8_long_white.svg"
screenshot = "ori3nt8_screenshot.png"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[theme]
primary = "#00d1b2"
primary_text = "#ffffff"
background = "#ffffff"
text = "#4a4a4a"
footer_background = "#f5f5f5"

# ---------------------------------------------------------------------------
# Sitemap
# ---------------------------------------------------------------------------
[sitemap]
enabled = true
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-text: {primary_text};
    --color-bg: {background};
    --color-text: {text};
    --color-footer-bg: {footer_background};
}}"#,
        primary = theme.primary,
        primary_text = theme.primary_text,
        background = theme.background,
        text = theme.text,
        footer_background = theme.footer_background,
    )
}
