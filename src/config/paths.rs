//! Centralized path resolution for consistent URL and output path generation.
//!
//! This module provides a single source of truth for all path operations,
//! eliminating manual `path_prefix` handling throughout the codebase.
//!
//! # Architecture
//!
//! ```text
//! SiteConfig
//!     │
//!     └── paths() → PathResolver
//!                       │
//!                       ├── output_root()       → /abs/path/public
//!                       ├── output_dir()        → /abs/path/public/prefix
//!                       ├── output_for_route()  → /abs/path/public/prefix/blog/index.html
//!                       ├── url_for_route()     → /prefix/blog/
//!                       └── url_for_filename()  → /prefix/feed.xml
//! ```
//!
//! Routes are prefix-free, slash-separated segments without leading or
//! trailing slashes; the empty route is the home page. Every route maps
//! to a directory with an `index.html` so emitted links can always end
//! in `/`.

use std::path::{Path, PathBuf};

/// Centralized path resolver for consistent URL and output path generation.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    /// Output root directory (without path_prefix)
    output: &'a Path,
    /// Path prefix for subdirectory deployment
    prefix: &'a Path,
}

impl<'a> PathResolver<'a> {
    /// Create a new PathResolver from config paths.
    #[inline]
    pub const fn new(output: &'a Path, prefix: &'a Path) -> Self {
        Self { output, prefix }
    }

    /// Raw output directory (without path_prefix).
    ///
    /// Used when clearing the output before a build.
    #[inline]
    pub const fn output_root(&self) -> &Path {
        self.output
    }

    /// Content output directory (with path_prefix).
    ///
    /// Where HTML pages, assets, and generated files are placed.
    /// Example: `/path/to/public/studio/`
    #[inline]
    pub fn output_dir(&self) -> PathBuf {
        self.output.join(self.prefix)
    }

    /// Check if path_prefix is set (non-empty).
    #[inline]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.as_os_str().is_empty()
    }

    /// Output file for a route.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// paths.output_for_route("")            → public/index.html
    /// paths.output_for_route("blog/page/2") → public/blog/page/2/index.html
    /// ```
    pub fn output_for_route(&self, route: &str) -> PathBuf {
        let dir = self.output_dir();
        if route.is_empty() {
            dir.join("index.html")
        } else {
            dir.join(route).join("index.html")
        }
    }

    /// URL path for a route, always with a trailing slash.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // With prefix "studio":
    /// paths.url_for_route("")     → "/studio/"
    /// paths.url_for_route("blog") → "/studio/blog/"
    ///
    /// // Without prefix:
    /// paths.url_for_route("blog/first-post") → "/blog/first-post/"
    /// ```
    pub fn url_for_route(&self, route: &str) -> String {
        let mut url = String::from("/");
        if self.has_prefix() {
            url.push_str(&self.prefix.to_string_lossy().replace('\\', "/"));
            url.push('/');
        }
        if !route.is_empty() {
            url.push_str(route);
            url.push('/');
        }
        url
    }

    /// URL path for a file at the output directory root.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // With prefix "studio":
    /// paths.url_for_filename("feed.xml") → "/studio/feed.xml"
    ///
    /// // Without prefix:
    /// paths.url_for_filename("feed.xml") → "/feed.xml"
    /// ```
    pub fn url_for_filename(&self, filename: &str) -> String {
        if self.has_prefix() {
            format!("/{}/{}", self.prefix.display(), filename)
        } else {
            format!("/{filename}")
        }
    }
}
