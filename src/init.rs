//! Site initialization module.
//!
//! Creates new site structure with default configuration and starter
//! content, so `aperture serve` works immediately after `aperture init`.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "assets/images"];

/// Starter content documents, written into `content/`
const SAMPLE_CONTENT: &[(&str, &str)] = &[
    ("posts.json", include_str!("embed/init/posts.json")),
    ("portfolio.json", include_str!("embed/init/portfolio.json")),
    ("services.json", include_str!("embed/init/services.json")),
    (
        "testimonials.json",
        include_str!("embed/init/testimonials.json"),
    ),
    ("studio.json", include_str!("embed/init/studio.json")),
];

/// Create a new site with default structure and starter content
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `aperture init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_sample_content(root)?;
    init_default_config(config)?;
    init_ignored_files(root, config)?;

    log!("init"; "site created at {}", root.display());
    log!("init"; "drop your photographs into assets/images, then run `aperture serve`");

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(config: &SiteConfig) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(&config.config_path, content)
        .with_context(|| format!("Failed to write {}", config.config_path.display()))?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `aperture init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write the starter content documents
fn init_sample_content(root: &Path) -> Result<()> {
    let content_dir = root.join("content");
    for (name, body) in SAMPLE_CONTENT {
        fs::write(content_dir.join(name), body)
            .with_context(|| format!("Failed to write content/{name}"))?;
    }
    Ok(())
}

/// Initialize .gitignore and .ignore files ignoring the output directory
fn init_ignored_files(root: &Path, config: &SiteConfig) -> Result<()> {
    let output = config
        .build
        .output
        .strip_prefix(root)
        .unwrap_or(&config.build.output);
    let content = format!("{}/\n", output.display());

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
