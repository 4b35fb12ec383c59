//! Static asset resolution.
//!
//! The logo and the screenshot are the only files pages reference. Both are
//! looked up under `<source>/images/` and copied to `<output>/static/` with a
//! content hash in the file name, so a changed image never hides behind a
//! cached copy on the host.
//!
//! A missing asset is a hard error: the build stops before any page that
//! would point at it is written.

use crate::config::AssetsConfig;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the site source that holds referenced images.
pub const IMAGES_DIR: &str = "images";
/// Directory under the output root that receives fingerprinted copies.
pub const STATIC_DIR: &str = "static";

/// Hex digits of the content hash kept in output file names.
const HASH_LEN: usize = 8;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("missing {kind} asset: {}", .path.display())]
    Missing { kind: &'static str, path: PathBuf },
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read image header of {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A located asset and its public URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Source file on disk.
    pub source: PathBuf,
    /// Path relative to the output root, e.g. `static/logo-1a2b3c4d.svg`.
    pub output_path: PathBuf,
    /// Site-relative URL, e.g. `/static/logo-1a2b3c4d.svg`.
    pub url: String,
    /// Pixel dimensions for raster images.
    pub dimensions: Option<(u32, u32)>,
}

/// The assets every page set needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteAssets {
    pub logo: Asset,
    pub screenshot: Asset,
}

/// Locate and fingerprint the configured assets without writing anything.
pub fn resolve(source_root: &Path, config: &AssetsConfig) -> Result<SiteAssets, AssetError> {
    let images = source_root.join(IMAGES_DIR);
    Ok(SiteAssets {
        logo: resolve_one(&images, &config.logo, "logo")?,
        screenshot: resolve_one(&images, &config.screenshot, "screenshot")?,
    })
}

fn resolve_one(images_dir: &Path, name: &str, kind: &'static str) -> Result<Asset, AssetError> {
    let source = images_dir.join(name);
    if !source.is_file() {
        return Err(AssetError::Missing { kind, path: source });
    }
    let bytes = fs::read(&source).map_err(|e| AssetError::Io {
        path: source.clone(),
        source: e,
    })?;
    let file_name = fingerprinted_name(Path::new(name), &bytes);
    let output_path = Path::new(STATIC_DIR).join(&file_name);
    let url = format!("/{STATIC_DIR}/{file_name}");
    let dimensions = read_dimensions(&source)?;
    log::debug!("asset {kind}: {} -> {url}", source.display());

    Ok(Asset {
        source,
        output_path,
        url,
        dimensions,
    })
}

/// `shot.png` + contents → `shot-<first 8 hex of sha256>.png`.
pub fn fingerprinted_name(name: &Path, contents: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(contents));
    let hash = &digest[..HASH_LEN];
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.extension() {
        Some(ext) => format!("{stem}-{hash}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{hash}"),
    }
}

/// Raster images with an enabled decoder report their size; vector,
/// unknown, and not-compiled-in formats do not.
fn read_dimensions(path: &Path) -> Result<Option<(u32, u32)>, AssetError> {
    match image::ImageFormat::from_path(path) {
        Ok(format) if format.reading_enabled() => {}
        _ => return Ok(None),
    }
    image::image_dimensions(path)
        .map(Some)
        .map_err(|e| AssetError::Image {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Copy resolved assets into the output tree. Returns the written paths,
/// relative to `output_dir`.
pub fn copy_assets(assets: &SiteAssets, output_dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let static_dir = output_dir.join(STATIC_DIR);
    fs::create_dir_all(&static_dir).map_err(|e| AssetError::Io {
        path: static_dir.clone(),
        source: e,
    })?;
    let mut written = Vec::new();
    for asset in [&assets.logo, &assets.screenshot] {
        let dst = output_dir.join(&asset.output_path);
        fs::copy(&asset.source, &dst).map_err(|e| AssetError::Io {
            path: asset.source.clone(),
            source: e,
        })?;
        written.push(asset.output_path.clone());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{setup_site, write_site};
    use tempfile::TempDir;

    #[test]
    fn fingerprint_keeps_stem_and_extension() {
        let name = fingerprinted_name(Path::new("ori3nt8_screenshot.png"), b"abc");
        // sha256("abc") = ba7816bf...
        assert_eq!(name, "ori3nt8_screenshot-ba7816bf.png");
    }

    #[test]
    fn fingerprint_changes_with_contents() {
        let a = fingerprinted_name(Path::new("logo.svg"), b"one");
        let b = fingerprinted_name(Path::new("logo.svg"), b"two");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_reads_screenshot_dimensions() {
        let tmp = setup_site();
        let assets = resolve(tmp.path(), &AssetsConfig::default()).unwrap();
        assert_eq!(assets.screenshot.dimensions, Some((40, 30)));
        assert!(assets.screenshot.url.starts_with("/static/ori3nt8_screenshot-"));
        assert!(assets.screenshot.url.ends_with(".png"));
    }

    #[test]
    fn resolve_svg_has_no_dimensions() {
        let tmp = setup_site();
        let assets = resolve(tmp.path(), &AssetsConfig::default()).unwrap();
        assert_eq!(assets.logo.dimensions, None);
        assert!(assets.logo.url.ends_with(".svg"));
    }

    #[test]
    fn missing_screenshot_is_error() {
        let tmp = TempDir::new().unwrap();
        write_site(tmp.path(), None);
        fs::remove_file(tmp.path().join("images/ori3nt8_screenshot.png")).unwrap();

        let err = resolve(tmp.path(), &AssetsConfig::default()).unwrap_err();
        assert!(matches!(err, AssetError::Missing { kind: "screenshot", .. }));
        assert!(err.to_string().contains("ori3nt8_screenshot.png"));
    }

    #[test]
    fn missing_logo_is_error() {
        let tmp = setup_site();
        let config = AssetsConfig {
            logo: "nope.svg".to_string(),
            ..AssetsConfig::default()
        };
        let err = resolve(tmp.path(), &config).unwrap_err();
        assert!(matches!(err, AssetError::Missing { kind: "logo", .. }));
    }

    #[test]
    fn corrupt_raster_is_error() {
        let tmp = setup_site();
        fs::write(tmp.path().join("images/broken.png"), b"not a png").unwrap();
        let config = AssetsConfig {
            screenshot: "broken.png".to_string(),
            ..AssetsConfig::default()
        };
        let err = resolve(tmp.path(), &config).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
    }

    #[test]
    fn raster_without_enabled_decoder_has_no_dimensions() {
        let tmp = setup_site();
        // 1x1 GIF89a; the gif decoder is not compiled in.
        let gif: &[u8] = &[
            0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xff,
            0xff, 0xff, 0x00, 0x00, 0x00, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c,
            0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00,
            0x3b,
        ];
        fs::write(tmp.path().join("images/shot.gif"), gif).unwrap();
        let config = AssetsConfig {
            screenshot: "shot.gif".to_string(),
            ..AssetsConfig::default()
        };
        let assets = resolve(tmp.path(), &config).unwrap();
        assert_eq!(assets.screenshot.dimensions, None);
        assert!(assets.screenshot.url.ends_with(".gif"));
    }

    #[test]
    fn copy_assets_writes_fingerprinted_files() {
        let tmp = setup_site();
        let out = TempDir::new().unwrap();
        let assets = resolve(tmp.path(), &AssetsConfig::default()).unwrap();

        let written = copy_assets(&assets, out.path()).unwrap();
        assert_eq!(written.len(), 2);
        for path in written {
            assert!(out.path().join(path).is_file());
        }
    }
}
