//! File system watcher for live reload.
//!
//! Monitors the content and asset directories plus `aperture.toml` for
//! changes and rebuilds the site. Pages render in a single parallel pass
//! over the content store, so there is no per-file rebuild path: every
//! relevant change triggers a full build. A config change atomically
//! reloads the configuration first (see [`crate::config::reload_config`])
//! so the rebuild picks up the new settings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Event Loop                          │
//! │                                                          │
//! │  ┌──────────┐    ┌──────────┐    ┌────────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│  handle_changes()  │  │
//! │  │ events   │    │ (300ms)  │    │                    │  │
//! │  └──────────┘    └──────────┘    │  ┌──────────────┐  │  │
//! │                                  │  │ reload config│  │  │
//! │                                  │  │ (on .toml)   │  │  │
//! │                                  │  └──────────────┘  │  │
//! │                                  │  ┌──────────────┐  │  │
//! │                                  │  │ full rebuild │  │  │
//! │                                  │  └──────────────┘  │  │
//! │                                  └────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use crate::{
    config::{SiteConfig, cfg, reload_config},
    log,
    utils::category::{FileCategory, categorize_path},
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

const WATCH_CATEGORIES: &[FileCategory] = &[
    FileCategory::Content,
    FileCategory::Asset,
    FileCategory::Config,
];

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Format path as relative to the site root for log display.
///
/// `/studio/content/posts.json` → `content/posts.json`
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Attempt a full site rebuild, logging errors on failure.
/// Returns true if successful (for cooldown tracking).
fn try_full_rebuild(reason: &str) -> bool {
    log!("watch"; "{reason}");

    let c = cfg();
    match crate::build::build_site(&c) {
        Ok(()) => true,
        Err(e) => {
            log!("watch"; "build failed");
            log!("watch"; "{e:#}");
            false
        }
    }
}

/// Process file changes. Returns true if a rebuild succeeded (for cooldown).
fn handle_changes(paths: &[PathBuf]) -> bool {
    if paths.is_empty() {
        return false;
    }

    let config = cfg();
    let root = config.get_root();

    let mut config_changed = false;
    let mut triggers: Vec<String> = Vec::new();

    for path in paths {
        match categorize_path(path, &config) {
            FileCategory::Config => config_changed = true,
            FileCategory::Content | FileCategory::Asset => triggers.push(rel_path(path, root)),
            FileCategory::Unknown => {}
        }
    }

    if config_changed {
        match reload_config() {
            // A full rebuild already covers any content/asset triggers
            // from the same batch.
            Ok(true) => return try_full_rebuild("config changed, rebuilding..."),
            // Saved without changes; content triggers may still apply.
            Ok(false) => {}
            Err(e) => {
                log!("watch"; "config reload failed");
                log!("watch"; "{e:#}");
                return false;
            }
        }
    }

    if triggers.is_empty() {
        return false;
    }

    triggers.sort();
    try_full_rebuild(&format!("{} changed, rebuilding...", triggers.join(", ")))
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Format absolute path as relative to root, with trailing slash for directories.
fn format_rel(path: &Path, root: &Path, is_dir: bool) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let suffix = if is_dir { "/" } else { "" };
    format!("{}{}", rel.display(), suffix)
}

/// Log the watched paths relative to the site root.
fn log_watch_summary(config: &SiteConfig) {
    let root = config.get_root();

    let watched: Vec<_> = WATCH_CATEGORIES
        .iter()
        .filter_map(|&cat| cat.path(config).map(|p| (p, cat.is_directory())))
        .filter(|(p, _)| p.exists())
        .map(|(p, is_dir)| format_rel(&p, root, is_dir))
        .collect();

    if !watched.is_empty() {
        log!("watch"; "watching: {}", watched.join(", "));
    }
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    for &cat in WATCH_CATEGORIES {
        if let Some(path) = cat.path(config)
            && path.exists()
        {
            let mode = if cat.is_directory() {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };

            watcher
                .watch(&path, mode)
                .with_context(|| format!("Failed to watch {}: {}", cat.name(), path.display()))?;
        }
    }

    log_watch_summary(config);
    eprintln!(); // Blank line to separate init logs from change events
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and live rebuild.
///
/// Reads the current config on each rebuild, so a reloaded
/// `aperture.toml` takes effect without restarting the server.
pub fn watch_for_changes_blocking() -> Result<()> {
    let config = cfg();
    if !config.serve.watch {
        return Ok(());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &config)?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take()) {
                    debouncer.mark_rebuild();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            // Other cases: irrelevant events, timeout without ready, etc.
            _ => {}
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
