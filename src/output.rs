//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 Home → index.html
//! 002 Not found → 404.html
//!
//! Assets
//!     static/ori3nt8_long_white-1a2b3c4d.svg
//!     static/ori3nt8_screenshot-5e6f7a8b.png
//!
//! Sitemap → sitemap.xml (1 URL)
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     Title: Ori3nt8
//!     Author: Nick Guletskii
//!     Site URL: https://ori3nt8.nickguletskii.com
//!
//! Assets
//!     logo: images/ori3nt8_long_white.svg
//!     screenshot: images/ori3nt8_screenshot.png (1200x900)
//! ```

use crate::assets::{Asset, SiteAssets};
use crate::generate::{GenerateReport, SitemapOutcome};
use crate::types::SiteMetadata;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Path relative to `root` when possible, for shorter lines.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, (label, file)) in report.pages.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), label, file.display()));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    for asset in &report.assets {
        lines.push(format!("{}{}", indent(1), asset.display()));
    }

    lines.push(String::new());
    lines.push(match &report.sitemap {
        SitemapOutcome::Written { path, urls } => format!(
            "Sitemap → {} ({} URL{})",
            path.display(),
            urls,
            if *urls == 1 { "" } else { "s" }
        ),
        SitemapOutcome::Disabled => "Sitemap: disabled".to_string(),
        SitemapOutcome::MissingSiteUrl => "Sitemap: skipped (no metadata.site_url)".to_string(),
    });
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

fn asset_line(kind: &str, asset: &Asset, source_root: &Path) -> String {
    let path = display_relative(&asset.source, source_root);
    match asset.dimensions {
        Some((w, h)) => format!("{}{}: {} ({}x{})", indent(1), kind, path, w, h),
        None => format!("{}{}: {}", indent(1), kind, path),
    }
}

pub fn format_check_output(
    metadata: &SiteMetadata,
    assets: &SiteAssets,
    source_root: &Path,
) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Title: {}", indent(1), metadata.title),
        format!("{}Author: {}", indent(1), metadata.author),
    ];
    if let Some(url) = &metadata.site_url {
        lines.push(format!("{}Site URL: {}", indent(1), url));
    }
    if let Some(id) = &metadata.tracking_id {
        lines.push(format!("{}Tracking ID: {}", indent(1), id));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(asset_line("logo", &assets.logo, source_root));
    lines.push(asset_line("screenshot", &assets.screenshot, source_root));
    lines
}

pub fn print_check_output(metadata: &SiteMetadata, assets: &SiteAssets, source_root: &Path) {
    for line in format_check_output(metadata, assets, source_root) {
        println!("{}", line);
    }
}
