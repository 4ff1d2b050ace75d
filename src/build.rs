//! Site building orchestration.
//!
//! Coordinates content loading, page rendering and asset copying.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── ContentStore::load() ──► read + validate the JSON collections
//!     │
//!     ├── plan_routes() ──► every page this build will emit
//!     │
//!     ├── rayon::join
//!     │       ├── render_site()  ──► HTML pages
//!     │       └── copy assets    ──► static files (up-to-date ones skipped)
//!     │
//!     ├── write_site_assets() ──► embedded stylesheet + script
//!     │
//!     └── generators ──► feed.xml, sitemap.xml, search-index.json
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    generator, log,
    logger::ProgressBars,
    render,
    utils::fs::{collect_files, is_up_to_date},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

/// Build the entire site, rendering pages and copying assets in parallel.
///
/// If `config.build.clear` is true, the output directory is removed first.
/// The RSS feed is only generated in build mode; during serve the preview
/// rebuilds skip it.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let started = Instant::now();
    prepare_output(config)?;

    let store = ContentStore::load(&config.build.content)?;
    log!("content"; "{} posts, {} projects, {} services, {} testimonials",
        store.posts.len(),
        store.projects.len(),
        store.services.len(),
        store.testimonials.len());

    let routes = render::plan_routes(&store, config);
    let asset_files = collect_files(&config.build.assets);

    let progress = ProgressBars::new(&[("pages", routes.len()), ("assets", asset_files.len())]);
    let has_error = AtomicBool::new(false);

    let (render_result, assets_result) = rayon::join(
        || {
            match render::render_site(config, &store, &routes, || progress.inc_by_name("pages")) {
                Ok(()) => Ok(()),
                Err(e) => {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "render failed: {:#}", e);
                    }
                    Err(anyhow!("Build failed"))
                }
            }
        },
        || {
            asset_files.par_iter().try_for_each(|path| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = copy_asset(path, config) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", path.display(), e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                progress.inc_by_name("assets");
                Ok(())
            })
        },
    );

    progress.finish();
    render_result?;
    assets_result?;

    // Embedded stylesheet and script; these names are reserved and shadow
    // same-named files from the assets directory
    render::write_site_assets(config)?;

    let serving = config.cli.is_some_and(|cli| cli.is_serve());
    if !serving {
        generator::build_rss(config, &store)?;
    }
    generator::build_sitemap(config, &store, &routes)?;
    generator::build_search_index(config, &store)?;

    log_build_result(&config.paths().output_dir(), started)?;
    Ok(())
}

/// Clear the output directory when requested, then make sure it exists.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let paths = config.paths();
    let output_root = paths.output_root();
    if config.build.clear && output_root.exists() {
        fs::remove_dir_all(output_root).with_context(|| {
            format!("Failed to clear output directory: {}", output_root.display())
        })?;
    }
    fs::create_dir_all(config.paths().output_dir())?;
    Ok(())
}

/// Copy one asset file into `<output>/assets/`, preserving its relative
/// path. Unchanged files are skipped based on modification time.
fn copy_asset(path: &Path, config: &SiteConfig) -> Result<()> {
    let relative = path.strip_prefix(&config.build.assets)?;
    let dest = config.paths().output_dir().join("assets").join(relative);

    if !config.build.clear && is_up_to_date(path, &dest) {
        return Ok(());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy asset {}", path.display()))?;
    Ok(())
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path, started: Instant) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty, check the content directory");
    } else {
        log!("build"; "done in {:.2}s", started.elapsed().as_secs_f32());
    }

    Ok(())
}
