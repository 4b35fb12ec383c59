//! Site generation.
//!
//! Takes a loaded [`SiteConfig`] and the site source directory and writes the
//! finished site:
//!
//! ```text
//! public/
//! ├── index.html                          # Home page
//! ├── 404.html                            # Not-found page
//! ├── sitemap.xml                         # When enabled and site_url is set
//! └── static/
//!     ├── ori3nt8_long_white-1a2b3c4d.svg
//!     └── ori3nt8_screenshot-5e6f7a8b.png
//! ```
//!
//! Assets are resolved before anything is written, so a missing logo or
//! screenshot leaves the output directory untouched.

use crate::assets::{self, AssetError};
use crate::config::SiteConfig;
use crate::pages::Page;
use crate::render::Site;
use crate::sitemap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("cannot write {file}: {0}", file = sitemap::SITEMAP_FILE)]
    Sitemap(#[source] std::io::Error),
}

/// What a build wrote, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// `(label, file)` for each page, in render order.
    pub pages: Vec<(&'static str, PathBuf)>,
    pub assets: Vec<PathBuf>,
    pub sitemap: SitemapOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SitemapOutcome {
    Written { path: PathBuf, urls: usize },
    Disabled,
    /// Enabled, but there is no `site_url` to build absolute URLs from.
    MissingSiteUrl,
}

pub fn generate(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let resolved = assets::resolve(source_dir, &config.assets)?;

    fs::create_dir_all(output_dir)?;
    let written_assets = assets::copy_assets(&resolved, output_dir)?;

    let site = Site::new(config, &resolved);
    let mut pages = Vec::new();
    for page in Page::ALL {
        let html = page.render(&site);
        let file = PathBuf::from(page.file_name());
        fs::write(output_dir.join(&file), html.into_string())?;
        log::debug!("wrote {}", output_dir.join(&file).display());
        pages.push((page.label(), file));
    }

    let sitemap = write_sitemap(config, output_dir)?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        pages,
        assets: written_assets,
        sitemap,
    })
}

fn write_sitemap(config: &SiteConfig, output_dir: &Path) -> Result<SitemapOutcome, GenerateError> {
    if !config.sitemap.enabled {
        return Ok(SitemapOutcome::Disabled);
    }
    let Some(site_url) = config.metadata.site_url.as_deref() else {
        log::warn!("sitemap enabled but metadata.site_url is not set; skipping sitemap.xml");
        return Ok(SitemapOutcome::MissingSiteUrl);
    };
    let entries = sitemap::entries(
        site_url,
        Page::ALL
            .into_iter()
            .filter(|p| p.in_sitemap())
            .map(|p| p.url_path()),
    );
    sitemap::write_sitemap(&entries, output_dir).map_err(GenerateError::Sitemap)?;
    Ok(SitemapOutcome::Written {
        path: PathBuf::from(sitemap::SITEMAP_FILE),
        urls: entries.len(),
    })
}
