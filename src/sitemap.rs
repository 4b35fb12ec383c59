//! `sitemap.xml` output.
//!
//! A single urlset; the site is two pages, so there is no index splitting.

use std::fs;
use std::path::Path;

/// Output file name, relative to the output root.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// A single URL entry in the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        format!("<url><loc>{}</loc></url>", escape_xml(&self.loc))
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build entries from site-relative paths against `base_url`, sorted by URL.
pub fn entries<'a>(base_url: &str, paths: impl IntoIterator<Item = &'a str>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries: Vec<SitemapEntry> = paths
        .into_iter()
        .map(|path| SitemapEntry {
            loc: format!("{base}/{}", path.trim_start_matches('/')),
        })
        .collect();
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));
    entries
}

/// Render a complete urlset document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    for entry in entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Write `sitemap.xml` into `output_dir`.
pub fn write_sitemap(entries: &[SitemapEntry], output_dir: &Path) -> std::io::Result<()> {
    let path = output_dir.join(SITEMAP_FILE);
    fs::write(&path, render_sitemap(entries))?;
    log::debug!("sitemap: {} URLs at {}", entries.len(), path.display());
    Ok(())
}
