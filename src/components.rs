//! Page components: navbar, footer, and the layout that assembles a full
//! document around page content.

use crate::head::{self, LANG};
use crate::render::Site;
use crate::types::Chrome;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Copyright line shown on every page.
pub const COPYRIGHT: &str = "Copyright © 2020 Nick Guletskii";

// Inline 24x24 icons so the output needs no icon font.
pub(crate) const ICON_DOWNLOAD: &str = r#"<svg viewBox="0 0 24 24" width="32" height="32" aria-hidden="true"><path fill="currentColor" d="M11 3h2v9.2l3.3-3.3 1.4 1.4L12 16l-5.7-5.7 1.4-1.4 3.3 3.3zM4 18h16v2H4z"/></svg>"#;
pub(crate) const ICON_SOURCE: &str = r#"<svg viewBox="0 0 24 24" width="32" height="32" aria-hidden="true"><path fill="currentColor" d="M8.6 16.6 4 12l4.6-4.6L7.2 6 1.2 12l6 6zm6.8 0L20 12l-4.6-4.6L16.8 6l6 6-6 6z"/></svg>"#;

/// Brand logo linking home, plus the external download button.
pub fn navbar(site: &Site) -> Markup {
    html! {
        nav.navbar.is-primary {
            div.container {
                div.navbar-brand {
                    a.navbar-item href="/" {
                        img src=(site.assets.logo.url) alt="Ori3nt8 logo";
                    }
                }
                div.navbar-menu {
                    div.navbar-end {
                        span.navbar-item {
                            a.button.is-secondary.is-inverted href=(site.links.releases) {
                                span.icon { (PreEscaped(ICON_DOWNLOAD)) }
                                span { "Download" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer.has-background-light {
            div.content.has-text-centered {
                p { (COPYRIGHT) }
            }
        }
    }
}

/// Wrap `content` in a full document: head tags, optional navbar, footer.
pub fn layout(site: &Site, chrome: Chrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(LANG) {
            head {
                (head::head_tags(site.metadata, Some(site.assets.screenshot.url.as_str())))
                style { (PreEscaped(&site.css)) }
            }
            body {
                @if chrome.includes_navbar() {
                    (navbar(site))
                }
                (content)
                (footer())
            }
        }
    }
}
