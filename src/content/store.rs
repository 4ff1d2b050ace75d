//! Content store: the four collections plus the studio profile.
//!
//! Loaded once from the content directory at the start of a build, held in
//! memory, never mutated. The store is constructed explicitly and passed by
//! reference into renderers and generators, so tests can build one from
//! synthetic fixtures without touching the filesystem.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;

use super::model::{BlogPost, PortfolioProject, Service, StudioProfile, Testimonial};
use super::query::{self, ALL_CATEGORIES, SortOrder};

/// Immutable content collections for one build.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub posts: Vec<BlogPost>,
    pub projects: Vec<PortfolioProject>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub studio: StudioProfile,
}

impl ContentStore {
    /// Load and validate all content documents from `content_dir`.
    ///
    /// Expects `posts.json`, `portfolio.json`, `services.json`,
    /// `testimonials.json` and `studio.json`. Any missing file, malformed
    /// JSON or integrity violation (duplicate id/slug, empty gallery) is a
    /// load error naming the offending file or record.
    pub fn load(content_dir: &Path) -> Result<Self> {
        let store = Self {
            posts: read_json(&content_dir.join("posts.json"))?,
            projects: read_json(&content_dir.join("portfolio.json"))?,
            services: read_json(&content_dir.join("services.json"))?,
            testimonials: read_json(&content_dir.join("testimonials.json"))?,
            studio: read_json(&content_dir.join("studio.json"))?,
        };
        store.validate()?;
        Ok(store)
    }

    /// Check cross-record invariants the type layer cannot express.
    fn validate(&self) -> Result<()> {
        check_unique("posts.json", "id", self.posts.iter().map(|p| p.id.as_str()))?;
        check_unique(
            "posts.json",
            "slug",
            self.posts.iter().map(|p| p.slug.as_str()),
        )?;
        check_unique(
            "portfolio.json",
            "id",
            self.projects.iter().map(|p| p.id.as_str()),
        )?;
        check_unique(
            "portfolio.json",
            "slug",
            self.projects.iter().map(|p| p.slug.as_str()),
        )?;
        check_unique(
            "services.json",
            "id",
            self.services.iter().map(|s| s.id.as_str()),
        )?;
        check_unique(
            "testimonials.json",
            "id",
            self.testimonials.iter().map(|t| t.id.as_str()),
        )?;

        for project in &self.projects {
            if project.images.is_empty() {
                bail!(
                    "project \"{}\" in portfolio.json has an empty images list",
                    project.slug
                );
            }
        }

        Ok(())
    }

    // -- posts --

    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        query::by_slug(&self.posts, slug)
    }

    pub fn posts_by_category(&self, category: &str) -> Vec<&BlogPost> {
        query::by_category(&self.posts, category)
    }

    pub fn search_posts(&self, raw_query: &str) -> Vec<&BlogPost> {
        query::search(&self.posts, raw_query)
    }

    pub fn related_posts(&self, id: &str, category: &str, limit: usize) -> Vec<&BlogPost> {
        query::related(&self.posts, id, category, limit)
    }

    pub fn featured_posts(&self, limit: usize) -> Vec<&BlogPost> {
        query::featured(&self.posts, limit)
    }

    /// All posts sorted by date.
    pub fn posts_by_date(&self, order: SortOrder) -> Vec<&BlogPost> {
        let refs: Vec<&BlogPost> = self.posts.iter().collect();
        query::sort_by_date(&refs, order)
    }

    /// Unique post categories, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.posts
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Unique post tags, first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }

    // -- portfolio --

    pub fn project_by_slug(&self, slug: &str) -> Option<&PortfolioProject> {
        query::by_slug(&self.projects, slug)
    }

    pub fn projects_by_category(&self, category: &str) -> Vec<&PortfolioProject> {
        query::by_category(&self.projects, category)
    }

    pub fn featured_projects(&self, limit: usize) -> Vec<&PortfolioProject> {
        query::featured(&self.projects, limit)
    }

    /// "All" followed by the unique project categories, first-seen order.
    ///
    /// Drives the category tab strip on portfolio pages.
    pub fn portfolio_categories(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut categories = vec![ALL_CATEGORIES];
        categories.extend(
            self.projects
                .iter()
                .map(|p| p.category.as_str())
                .filter(|c| seen.insert(*c)),
        );
        categories
    }

    // -- services and testimonials --

    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Testimonials whose free-text service label matches exactly.
    pub fn testimonials_by_service(&self, service: &str) -> Vec<&Testimonial> {
        self.testimonials
            .iter()
            .filter(|t| t.service == service)
            .collect()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed content in {}", path.display()))
}

fn check_unique<'a>(
    file: &str,
    field: &str,
    values: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = FxHashSet::default();
    for value in values {
        if !seen.insert(value) {
            bail!("duplicate {field} \"{value}\" in {file}");
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
