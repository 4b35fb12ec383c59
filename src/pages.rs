//! The site's pages.
//!
//! Each [`Page`] renders to exactly one HTML document. Content is fixed
//! copy; the only inputs are the render context's links and assets.

use crate::components::{ICON_DOWNLOAD, ICON_SOURCE, layout, navbar};
use crate::render::Site;
use crate::types::Chrome;
use maud::{Markup, PreEscaped, html};

/// Headline of the home page hero.
pub const HEADLINE: &str = "Fix rotated photos in a breeze";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::NotFound];

    /// Output file, relative to the output root.
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::NotFound => "404.html",
        }
    }

    /// Public URL path.
    pub fn url_path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::NotFound => "/404.html",
        }
    }

    /// Display label for build output.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::NotFound => "Not found",
        }
    }

    /// The error page is served by the host, never linked or indexed.
    pub fn in_sitemap(self) -> bool {
        matches!(self, Page::Home)
    }

    pub fn render(self, site: &Site) -> Markup {
        match self {
            Page::Home => render_home(site),
            Page::NotFound => render_not_found(site),
        }
    }
}

/// Usage steps for the desktop application, in order.
const USAGE_STEPS: [&str; 7] = [
    "Backup your photos.",
    "Open a directory by pressing Ctrl + O, or selecting File > Open Directory.",
    "Select a photo in the file tree on the right. Only JPEG files are currently supported.",
    "The original orientation of the photo is indicated using a yellow rectangle. After a \
     second or two, a green triangle should appear and the photo will be rotated \
     automatically. The green triangle indicates the suggested orientation for this image. \
     The orientation will be saved automatically.",
    "Move on to the next photo by pressing the right arrow on your keyboard. To select the \
     previous photo, press the left arrow.",
    "You may disable automatic rotation by unchecking Edit > Automatically apply suggested \
     orientation. After automatic rotation has been disabled, you may apply the suggested \
     rotation by clicking \"Apply\" or pressing the spacebar.",
    "The image can be rotated clockwise by pressing D or counter-clockwise by pressing A.",
];

fn render_home(site: &Site) -> Markup {
    let screenshot = &site.assets.screenshot;
    let (width, height) = screenshot.dimensions.unzip();

    let content = html! {
        section.hero.primary-hero.is-fullheight-with-navbar
            itemscope itemtype="http://schema.org/SoftwareApplication" {
            div.hero-head {
                (navbar(site))
            }
            div.hero-body {
                div.container {
                    article.media {
                        div.media-content {
                            div.content {
                                figure class="image is-4x3" {
                                    img.has-shadow src=(screenshot.url)
                                        alt="A screenshot of Ori3nt8"
                                        itemprop="screenshot"
                                        width=[width] height=[height];
                                }
                                h1 class="is-uppercase is-size-1 has-text-white has-text-centered" {
                                    (HEADLINE)
                                }
                                p class="subtitle has-text-white is-size-3 has-text-centered" itemprop="abstract" {
                                    "Automatically rotate your photos while viewing them"
                                }
                                p.has-text-white.has-text-centered {
                                    "Ori3nt8 is a program that tries to automatically guess the \
                                     correct orientation of your photos using a neural network and \
                                     rotates them by correcting their EXIF metadata."
                                }
                                p.hero-actions.has-text-white.has-text-centered {
                                    a.button.is-secondary.is-inverted.is-large href=(site.links.releases) {
                                        span.icon { (PreEscaped(ICON_DOWNLOAD)) }
                                        span { "Download" }
                                    }
                                    " "
                                    a.button.is-secondary.is-inverted.is-large href=(site.links.source) {
                                        span.icon { (PreEscaped(ICON_SOURCE)) }
                                        span { "Source code" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        section.section {
            div.container {
                h1.title { "How do I use it?" }
                ol.usage {
                    @for step in USAGE_STEPS {
                        li { (step) }
                    }
                }
            }
        }
    };

    layout(site, Chrome::Bare, content)
}

fn render_not_found(site: &Site) -> Markup {
    let content = html! {
        section.section {
            div.container {
                h1.title { "404: Page not found" }
                p { "The requested page does not exist." }
            }
        }
    };

    layout(site, Chrome::Navbar, content)
}
