//! File category classification for watch mode.
//!
//! Categorizes changed paths by their role so the watcher knows how to
//! react. The site renders in a single pass over the content store, so
//! every change funnels into a full rebuild; the category only decides
//! whether the configuration must be reloaded first.
//!
//! # File Categories
//!
//! | Category   | Watcher Response          | Example Files                |
//! |------------|---------------------------|------------------------------|
//! | Content    | Full rebuild              | `content/posts.json`         |
//! | Asset      | Full rebuild              | `assets/images/*`            |
//! | Config     | Reload config, rebuild    | `aperture.toml`              |
//! | Unknown    | Ignored                   | Files outside watched dirs   |

use crate::config::SiteConfig;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Category of a changed file, used to decide the watcher's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Content record file (posts, portfolio, services, ...)
    Content,
    /// Static asset file
    Asset,
    /// Site configuration (aperture.toml)
    Config,
    /// File outside watched directories
    Unknown,
}

impl FileCategory {
    /// Get the short name for this category (used in logs)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Asset => "assets",
            Self::Config => "config",
            Self::Unknown => "unknown",
        }
    }

    /// Get the watched path for this category from config, if any.
    pub fn path(self, config: &SiteConfig) -> Option<PathBuf> {
        match self {
            Self::Content => Some(config.build.content.clone()),
            Self::Asset => Some(config.build.assets.clone()),
            Self::Config => Some(config.config_path.clone()),
            Self::Unknown => None,
        }
    }

    /// Returns true if this category represents a directory (vs a single file)
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Content | Self::Asset)
    }
}

/// Categorize a file path to determine how a change should be handled.
///
/// Used by the file watcher:
/// - `Content`/`Asset`: rebuild the site
/// - `Config`: reload `aperture.toml`, then rebuild
/// - `Unknown`: ignored
pub fn categorize_path(path: &Path, config: &SiteConfig) -> FileCategory {
    let path = normalize_path(path);

    if path == config.config_path {
        FileCategory::Config
    } else if path.starts_with(&config.build.content) {
        FileCategory::Content
    } else if path.starts_with(&config.build.assets) {
        FileCategory::Asset
    } else {
        FileCategory::Unknown
    }
}

/// Normalize a path to absolute form for reliable comparison.
///
/// Config paths are already canonicalized, so we need to canonicalize
/// incoming paths (e.g., from file watcher) before comparison.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // ========================================================================
    // FileCategory Tests
    // ========================================================================

    #[test]
    fn test_category_name() {
        assert_eq!(FileCategory::Content.name(), "content");
        assert_eq!(FileCategory::Asset.name(), "assets");
        assert_eq!(FileCategory::Config.name(), "config");
        assert_eq!(FileCategory::Unknown.name(), "unknown");
    }

    #[test]
    fn test_is_directory() {
        // Directory-based categories
        assert!(FileCategory::Content.is_directory());
        assert!(FileCategory::Asset.is_directory());

        // Single file or unknown
        assert!(!FileCategory::Config.is_directory());
        assert!(!FileCategory::Unknown.is_directory());
    }

    #[test]
    fn test_unknown_has_no_path() {
        let config = SiteConfig::default();
        assert_eq!(FileCategory::Unknown.path(&config), None);
    }

    // ========================================================================
    // categorize_path Tests
    // ========================================================================

    /// Config over paths that do not exist on disk, so `normalize_path`
    /// passes them through untouched and comparisons stay predictable.
    fn watch_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.config_path = PathBuf::from("/studio/aperture.toml");
        config.build.content = PathBuf::from("/studio/content");
        config.build.assets = PathBuf::from("/studio/assets");
        config
    }

    #[test]
    fn test_categorize_content_and_assets() {
        let config = watch_config();

        assert_eq!(
            categorize_path(Path::new("/studio/content/posts.json"), &config),
            FileCategory::Content
        );
        assert_eq!(
            categorize_path(Path::new("/studio/assets/images/hero.jpg"), &config),
            FileCategory::Asset
        );
    }

    #[test]
    fn test_categorize_config_file() {
        let config = watch_config();
        assert_eq!(
            categorize_path(Path::new("/studio/aperture.toml"), &config),
            FileCategory::Config
        );
    }

    #[test]
    fn test_categorize_outside_paths() {
        let config = watch_config();

        assert_eq!(
            categorize_path(Path::new("/studio/public/index.html"), &config),
            FileCategory::Unknown
        );
        assert_eq!(
            categorize_path(Path::new("/elsewhere/notes.txt"), &config),
            FileCategory::Unknown
        );
    }

    // ========================================================================
    // normalize_path Tests
    // ========================================================================

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        // Should be converted to absolute (joined with cwd)
        assert!(normalized.is_absolute());
    }
}
