//! Shared test utilities.
//!
//! Builds a throwaway site source directory:
//!
//! ```text
//! <tmp>/
//! ├── site.toml                       # only when a config is passed
//! └── images/
//!     ├── ori3nt8_long_white.svg
//!     └── ori3nt8_screenshot.png      # 40x30 solid PNG
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::assets::{Asset, SiteAssets};
use crate::config::SiteConfig;
use crate::render::Site;

pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="24"><rect width="120" height="24" fill="white"/></svg>"#;

/// Write the default assets (and optionally `site.toml`) into `dir`.
pub fn write_site(dir: &Path, config: Option<&str>) {
    let images = dir.join("images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("ori3nt8_long_white.svg"), LOGO_SVG).unwrap();
    image::RgbImage::from_pixel(40, 30, image::Rgb([20, 200, 180]))
        .save(images.join("ori3nt8_screenshot.png"))
        .unwrap();
    if let Some(toml) = config {
        std::fs::write(dir.join("site.toml"), toml).unwrap();
    }
}

/// A temp site source with stock assets and no config file.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), None);
    tmp
}

/// In-memory assets for render tests that never touch disk.
pub fn fake_assets() -> SiteAssets {
    SiteAssets {
        logo: Asset {
            source: "images/ori3nt8_long_white.svg".into(),
            output_path: "static/ori3nt8_long_white-00000000.svg".into(),
            url: "/static/ori3nt8_long_white-00000000.svg".to_string(),
            dimensions: None,
        },
        screenshot: Asset {
            source: "images/ori3nt8_screenshot.png".into(),
            output_path: "static/ori3nt8_screenshot-11111111.png".into(),
            url: "/static/ori3nt8_screenshot-11111111.png".to_string(),
            dimensions: Some((1200, 900)),
        },
    }
}

/// Render context over a config and [`fake_assets`].
pub fn site<'a>(config: &'a SiteConfig, assets: &'a SiteAssets) -> Site<'a> {
    Site::new(config, assets)
}

/// The part of a document between `<body>` and `</body>`.
pub fn body_of(html: &str) -> &str {
    let start = html.find("<body").expect("document has no <body>");
    let end = html.rfind("</body>").expect("document has no </body>");
    &html[start..end]
}

/// The part of a document between `<head>` and `</head>`.
pub fn head_of(html: &str) -> &str {
    let start = html.find("<head>").expect("document has no <head>");
    let end = html.find("</head>").expect("document has no </head>");
    &html[start..end]
}
