//! `[build]` section configuration.
//!
//! Contains build settings: paths, minification, feed/sitemap/search
//! artifacts, and the blog/portfolio listing knobs.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in aperture.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # JSON content directory
/// output = "public"        # Output directory
/// minify = true            # Minify HTML
///
/// [build.blog]
/// posts_per_page = 6
///
/// [build.rss]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// URL path prefix for subdirectory deployment (e.g., "studio" → `/studio/...`).
    #[serde(default = "defaults::build::path_prefix")]
    #[educe(Default = defaults::build::path_prefix())]
    pub path_prefix: PathBuf,

    /// Content directory holding the JSON collections.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory (images, CSS, fonts).
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML output (removes whitespace).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clear: bool,

    /// Blog listing settings.
    #[serde(default)]
    pub blog: BlogConfig,

    /// Portfolio listing settings.
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    /// RSS feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Client search index generation settings.
    #[serde(default)]
    pub search: SearchConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.blog]` section - blog listing knobs.
///
/// `posts_per_page` drives pagination of the blog index and its category
/// pages; `related` bounds the related-posts strip on detail pages;
/// `featured` is how many of the newest-loaded posts the home page shows.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    /// Posts per page on the blog index and category pages.
    #[serde(default = "defaults::build::blog::posts_per_page")]
    #[educe(Default = defaults::build::blog::posts_per_page())]
    pub posts_per_page: usize,

    /// Related posts shown on a post detail page.
    #[serde(default = "defaults::build::blog::related")]
    #[educe(Default = defaults::build::blog::related())]
    pub related: usize,

    /// Featured posts shown on the home page.
    #[serde(default = "defaults::build::blog::featured")]
    #[educe(Default = defaults::build::blog::featured())]
    pub featured: usize,
}

/// `[build.portfolio]` section - portfolio listing knobs.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Featured projects shown on the home page.
    #[serde(default = "defaults::build::portfolio::featured")]
    #[educe(Default = defaults::build::portfolio::featured())]
    pub featured: usize,
}

/// `[build.rss]` section - RSS feed generation configuration.
///
/// RSS generation is controlled by two factors:
/// - `enable`: this config option (user-controlled)
/// - Mode: `build` generates the feed, `serve` skips it for faster preview
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable RSS feed generation (only effective in build mode).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub enable: bool,

    /// Output path for RSS feed file.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,

    /// Maximum number of items in the feed.
    #[serde(default = "defaults::build::rss::limit")]
    #[educe(Default = defaults::build::rss::limit())]
    pub limit: usize,
}

/// `[build.sitemap]` section - sitemap generation configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap.xml generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path for the sitemap file.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.search]` section - client search index configuration.
///
/// The index carries the same searchable text the query layer matches
/// against, so client-side search agrees with the build-time semantics.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Enable search-index.json generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path for the search index file.
    #[serde(default = "defaults::build::search::path")]
    #[educe(Default = defaults::build::search::path())]
    pub path: PathBuf,
}

// ============================================================================
// Tests
// ============================================================================
