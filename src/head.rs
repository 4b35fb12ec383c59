//! Document head tags.
//!
//! [`head_tags`] turns a [`SiteMetadata`] into the contents of `<head>`:
//! viewport, description, keywords, title, and the `itemprop` identity
//! attributes crawlers read for software listings, plus Open Graph tags for
//! share previews. Optional fields that are absent (or blank) produce no
//! tag at all.
//!
//! The document language is not a head tag; [`LANG`] is applied to the
//! `<html>` element by the layout.

use crate::types::SiteMetadata;
use maud::{Markup, html};

/// Value of the `lang` attribute on `<html>`.
pub const LANG: &str = "en";

/// Viewport directive. Pinch zoom is disabled to match the fixed hero.
pub const VIEWPORT: &str = "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=0";

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Render head declarations for `meta`.
///
/// `preview_image` is a site-relative or absolute URL of the share image.
pub fn head_tags(meta: &SiteMetadata, preview_image: Option<&str>) -> Markup {
    let preview = preview_image.map(|url| meta.absolute_url(url));
    html! {
        meta charset="utf-8";
        meta name="viewport" content=(VIEWPORT);
        meta name="description" content=(meta.description);
        meta name="keywords" content=(meta.keywords);
        title { (meta.title) }
        meta itemprop="name" content=(meta.title);
        meta itemprop="author" content=(meta.author);
        @if let Some(category) = present(&meta.application_category) {
            meta itemprop="applicationCategory" content=(category);
        }
        @if let Some(systems) = present(&meta.operating_systems) {
            meta itemprop="operatingSystems" content=(systems);
        }
        @if let Some(url) = present(&meta.download_url) {
            meta itemprop="downloadURL" content=(url);
        }
        meta itemprop="description" content=(meta.description);
        @if let Some(url) = &preview {
            meta itemprop="image" content=(url);
        }
        meta property="og:type" content="website";
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        @if let Some(url) = &preview {
            meta property="og:image" content=(url);
        }
        @if let Some(site_url) = present(&meta.site_url) {
            link rel="canonical" href=(site_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> SiteMetadata {
        SiteMetadata {
            title: "Ori3nt8".to_string(),
            author: "A".to_string(),
            description: "D".to_string(),
            keywords: "K".to_string(),
            application_category: None,
            operating_systems: None,
            download_url: None,
            source_url: None,
            site_url: None,
            tracking_id: None,
        }
    }

    #[test]
    fn title_matches_metadata_exactly() {
        let mut meta = minimal();
        meta.title = "A rather long product title that should never be cut short at all".into();
        let html = head_tags(&meta, None).into_string();
        assert!(html.contains(
            "<title>A rather long product title that should never be cut short at all</title>"
        ));
    }

    #[test]
    fn emits_required_tags() {
        let html = head_tags(&minimal(), None).into_string();
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width"#));
        assert!(html.contains(r#"<meta name="description" content="D">"#));
        assert!(html.contains(r#"<meta name="keywords" content="K">"#));
        assert!(html.contains(r#"<meta itemprop="name" content="Ori3nt8">"#));
        assert!(html.contains(r#"<meta itemprop="author" content="A">"#));
        assert!(html.contains(r#"<meta itemprop="description" content="D">"#));
    }

    #[test]
    fn absent_optional_fields_omit_tags() {
        let html = head_tags(&minimal(), None).into_string();
        assert!(!html.contains("applicationCategory"));
        assert!(!html.contains("operatingSystems"));
        assert!(!html.contains("downloadURL"));
        assert!(!html.contains(r#"itemprop="image""#));
        assert!(!html.contains("og:image"));
        assert!(!html.contains("canonical"));
    }

    #[test]
    fn blank_optional_field_is_absent() {
        let mut meta = minimal();
        meta.operating_systems = Some("  ".to_string());
        let html = head_tags(&meta, None).into_string();
        assert!(!html.contains("operatingSystems"));
    }

    #[test]
    fn present_optional_fields_emit_tags() {
        let html = head_tags(&SiteMetadata::default(), None).into_string();
        assert!(html.contains(r#"<meta itemprop="applicationCategory" content="Multimedia">"#));
        assert!(html.contains(r#"<meta itemprop="operatingSystems" content="Windows 10, Linux">"#));
        assert!(html.contains(
            r#"<meta itemprop="downloadURL" content="https://github.com/nickguletskii/ori3nt8/releases/latest">"#
        ));
    }

    #[test]
    fn preview_image_is_absolute_with_site_url() {
        let mut meta = minimal();
        meta.site_url = Some("https://example.com".to_string());
        let html = head_tags(&meta, Some("/static/shot-1.png")).into_string();
        assert!(html.contains(r#"<meta itemprop="image" content="https://example.com/static/shot-1.png">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://example.com/static/shot-1.png">"#));
    }

    #[test]
    fn preview_image_stays_relative_without_site_url() {
        let html = head_tags(&minimal(), Some("/static/shot-1.png")).into_string();
        assert!(html.contains(r#"<meta itemprop="image" content="/static/shot-1.png">"#));
    }

    #[test]
    fn metadata_is_escaped() {
        let mut meta = minimal();
        meta.description = r#"say "hi" <b>"#.to_string();
        let html = head_tags(&meta, None).into_string();
        assert!(html.contains("say &quot;hi&quot; &lt;b&gt;"));
    }
}
