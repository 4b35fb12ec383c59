//! # ori3nt8-site
//!
//! Static site generator for the website of Ori3nt8, a desktop tool that
//! fixes photo orientation with a neural network. The tool itself lives
//! elsewhere; this crate only renders its landing page and 404 page.
//!
//! # Pipeline
//!
//! ```text
//! site/site.toml  →  SiteConfig            (stock defaults + user overrides)
//! site/images/    →  SiteAssets            (located, hashed, measured)
//! config + assets →  Site                  (render context)
//! Site            →  public/*.html         (one document per Page)
//! ```
//!
//! Rendering is a pure function of the [`render::Site`] context. Nothing is
//! read from global state, so every page can be rendered in a unit test with
//! an in-memory config.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation, theme CSS |
//! | [`types`] | `SiteMetadata`, `ProductLinks`, and the layout `Chrome` variant |
//! | [`assets`] | Logo and screenshot lookup, content-hashed copies, image dimensions |
//! | [`render`] | The render context passed to every component |
//! | [`head`] | Document head tags from `SiteMetadata` |
//! | [`components`] | Navbar, footer, and the page layout |
//! | [`pages`] | Home and not-found pages |
//! | [`sitemap`] | `sitemap.xml` output |
//! | [`generate`] | Writes the finished site |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Templates are
//! Rust expressions, checked at compile time and escaped by default, and
//! there is no template directory to ship.
//!
//! ## Assets Fail Loudly
//!
//! A page that points at a missing image is worse than no page. Assets are
//! resolved before the output directory is created, and any missing file
//! aborts the build.

pub mod assets;
pub mod components;
pub mod config;
pub mod generate;
pub mod head;
pub mod output;
pub mod pages;
pub mod render;
pub mod sitemap;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
