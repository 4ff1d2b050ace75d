//! Site configuration loaded from `aperture.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Studio identity (name, tagline, author, url)     |
//! | `[build]`   | Paths, minify, blog/portfolio/feed options       |
//! | `[serve]`   | Development server (interface, port, watch)      |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! name = "Lumière Studio"
//! description = "Wedding and portrait photography"
//! url = "https://lumiere.example"
//!
//! [build]
//! content = "content"
//! output = "public"
//! minify = true
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 4848
//!
//! [extra]
//! instagram = "lumiere.studio"
//! ```
//!
//! CLI arguments override file values, which override built-in defaults.

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod paths;
mod serve;

pub use base::BaseConfig;
pub use build::{BlogConfig, BuildConfig, PortfolioConfig, RssConfig, SearchConfig, SitemapConfig};
pub use error::ConfigError;
pub use handle::{cfg, init_config, reload_config};
pub use paths::PathResolver;
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[derive(Educe, Serialize, Deserialize, Debug, Clone)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI reference, set once during startup
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path of the loaded config file
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    /// Arbitrary user values, exposed to page templates as-is
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_str(&content)
    }

    /// Load config for the given CLI invocation.
    ///
    /// Reads `aperture.toml` from the project root (or starts from defaults
    /// when running `init`), applies CLI overrides and validates the result.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);

        match (cli.is_init(), config.config_path.exists()) {
            (true, true) => bail!(
                "config file already exists: {}",
                config.config_path.display()
            ),
            (false, false) => bail!(
                "config file not found: {} (run `aperture init` first)",
                config.config_path.display()
            ),
            _ => {}
        }

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    pub fn set_root(&mut self, root: &Path) {
        self.build.root = Some(root.to_path_buf());
    }

    /// Get CLI reference (panics if called before initialization)
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.expect("CLI should be set during initialization")
    }

    /// Site URL with any trailing slash removed, for joining route paths onto.
    pub fn site_url(&self) -> Option<&str> {
        self.base.url.as_deref().map(|u| u.trim_end_matches('/'))
    }

    /// Resolver for output paths and page URLs under the current prefix.
    pub fn paths(&self) -> PathResolver<'_> {
        PathResolver::new(&self.build.output, &self.build.path_prefix)
    }

    /// Apply CLI argument overrides to file-loaded values.
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = match &cli.command {
            // `init <name>` creates the site under root/name
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .clone()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .clone()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Some(args) = cli.build_args() {
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());

            if let Some(base_url) = &args.base_url {
                self.base.url = Some(base_url.clone());
            }
            if args.clean {
                self.build.clear = true;
            }
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());

            // Local preview always links against the dev server address
            self.base.url = Some(format!(
                "http://{}:{}",
                self.serve.interface, self.serve.port
            ));
        }
    }

    fn update_option<T: Clone>(field: &mut T, value: Option<&T>) {
        if let Some(v) = value {
            *field = v.clone();
        }
    }

    /// Resolve all configured paths relative to the project root.
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        if let Some(assets) = &cli.assets {
            self.build.assets = assets.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }

        self.build.root = Some(Self::normalize_path(root, Path::new("")));
        self.config_path = Self::normalize_path(root, &cli.config);
        self.build.content = Self::normalize_path(root, &self.build.content);
        self.build.assets = Self::normalize_path(root, &self.build.assets);
        self.build.output = Self::normalize_path(root, &self.build.output);

        // Generated artifacts land inside the (possibly prefixed) output
        // directory, next to the pages that link to them
        let artifact_root = self.build.output.join(&self.build.path_prefix);
        self.build.rss.path = artifact_root.join(&self.build.rss.path);
        self.build.sitemap.path = artifact_root.join(&self.build.sitemap.path);
        self.build.search.path = artifact_root.join(&self.build.search.path);
    }

    /// Normalize a path to absolute form, using the root as base for relative paths.
    fn normalize_path(root: &Path, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        };

        // Canonicalize when possible (path exists), fall back to lexical join
        joined.canonicalize().unwrap_or_else(|_| {
            if joined.is_absolute() {
                joined
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(&joined))
                    .unwrap_or(joined)
            }
        })
    }

    /// Validate config consistency after all overrides are applied.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!(ConfigError::Validation(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }

        if self.build.rss.enable && self.base.url.is_none() {
            bail!(ConfigError::Validation(
                "[base] url is required when [build.rss] enable = true".into()
            ));
        }

        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(format!(
                "[base] url must start with http:// or https://, got: {url}"
            )));
        }

        if self.build.blog.posts_per_page == 0 {
            bail!(ConfigError::Validation(
                "[build.blog] posts_per_page must be at least 1".into()
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
