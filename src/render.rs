//! Render context shared by every component.
//!
//! [`Site`] bundles what a page needs to render: the metadata record, the
//! call-to-action links, the resolved assets, and the final stylesheet. It
//! is built once per build and handed down by reference, so every renderer
//! stays a pure function of its arguments.

use crate::assets::SiteAssets;
use crate::config::{self, SiteConfig};
use crate::types::{ProductLinks, SiteMetadata};

const CSS_STATIC: &str = include_str!("../static/style.css");

#[derive(Debug, Clone)]
pub struct Site<'a> {
    pub metadata: &'a SiteMetadata,
    pub links: &'a ProductLinks,
    pub assets: &'a SiteAssets,
    /// Theme variables followed by the base stylesheet.
    pub css: String,
}

impl<'a> Site<'a> {
    pub fn new(config: &'a SiteConfig, assets: &'a SiteAssets) -> Self {
        let css = format!(
            "{}\n\n{}",
            config::generate_theme_css(&config.theme),
            CSS_STATIC
        );
        Self {
            metadata: &config.metadata,
            links: &config.links,
            assets,
            css,
        }
    }
}
