//! Client search index generation.
//!
//! Emits a JSON array the in-page search script fetches and filters. Each
//! document carries the same searchable text the query layer matches on,
//! pre-lowercased so the client only needs a substring test.

use crate::{
    config::SiteConfig,
    content::{ContentStore, Searchable},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

/// One searchable post in the index.
#[derive(Debug, Serialize)]
struct SearchDoc {
    slug: String,
    title: String,
    category: String,
    text: String,
}

/// Build the search index if enabled in config.
pub fn build_search_index(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if !config.build.search.enable {
        return Ok(());
    }

    let docs: Vec<SearchDoc> = store.posts.iter().map(to_doc).collect();
    let json = serde_json::to_string(&docs)?;

    let index_path = &config.build.search.path;
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(index_path, json)
        .with_context(|| format!("Failed to write search index to {}", index_path.display()))?;

    log!("search"; "{} ({} posts)",
        index_path.file_name().unwrap_or_default().to_string_lossy(),
        docs.len());
    Ok(())
}

fn to_doc(post: &crate::content::BlogPost) -> SearchDoc {
    SearchDoc {
        slug: post.slug.clone(),
        title: post.title.clone(),
        category: post.category.clone(),
        text: post.searchable_text().to_lowercase(),
    }
}
