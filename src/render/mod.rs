//! HTML page rendering.
//!
//! Every route is rendered from the content store into the output directory
//! as a `route/index.html` file (the 404 page is the one flat file). Pages
//! share the embedded base shell; the per-page renderers live in the
//! submodules and only produce the `<main>` content.
//!
//! # Route plan
//!
//! ```text
//! plan_routes()
//!     │
//!     ├── /            home: featured posts + projects, services, testimonials
//!     ├── /about/      studio profile
//!     ├── /services/   service cards with per-service testimonials
//!     ├── /blog/...    paginated index, category pages, post details
//!     ├── /portfolio/… category pages, project details with lightbox
//!     └── /404.html    not-found page (served by the dev server on misses)
//! ```

pub mod blog;
pub mod home;
pub mod pages;
pub mod portfolio;

use crate::{
    config::SiteConfig,
    content::ContentStore,
    utils::{
        date::DateTimeUtc,
        minify::{MinifyType, minify},
        slug::slugify,
    },
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{borrow::Cow, fs, path::Path};

/// Page shell (embedded at compile time)
const BASE_TEMPLATE: &str = include_str!("../embed/base.html");

/// Client-side lightbox/search wiring, written into the output assets
const SITE_SCRIPT: &str = include_str!("../embed/scripts/aperture.js");

/// Base stylesheet, written into the output assets
const SITE_STYLES: &str = include_str!("../embed/styles/aperture.css");

// ============================================================================
// Route Plan
// ============================================================================

/// One page the build will emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    NotFound,
    BlogIndex { page: usize },
    BlogCategory { category: String, page: usize },
    BlogPost { slug: String },
    PortfolioIndex,
    PortfolioCategory { category: String },
    PortfolioProject { slug: String },
}

impl Route {
    /// Prefix-free route path. Empty for the home page; the 404 page is a
    /// flat file and never goes through directory resolution.
    pub fn path(&self) -> String {
        match self {
            Self::Home => String::new(),
            Self::About => "about".to_string(),
            Self::Services => "services".to_string(),
            Self::NotFound => "404.html".to_string(),
            Self::BlogIndex { page: 1 } => "blog".to_string(),
            Self::BlogIndex { page } => format!("blog/page/{page}"),
            Self::BlogCategory { category, page: 1 } => {
                format!("blog/category/{}", slugify(category))
            }
            Self::BlogCategory { category, page } => {
                format!("blog/category/{}/page/{page}", slugify(category))
            }
            Self::BlogPost { slug } => format!("blog/{slug}"),
            Self::PortfolioIndex => "portfolio".to_string(),
            Self::PortfolioCategory { category } => {
                format!("portfolio/category/{}", slugify(category))
            }
            Self::PortfolioProject { slug } => format!("portfolio/{slug}"),
        }
    }
}

/// Number of pages a collection paginates into (at least one: an empty
/// collection still renders its index with an empty state).
fn index_pages(items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        1
    } else {
        items.div_ceil(per_page).max(1)
    }
}

/// Every route the build emits, in a stable order.
///
/// The same plan drives rendering, the progress bar total and the sitemap,
/// so the three can never disagree about what the site contains.
pub fn plan_routes(store: &ContentStore, config: &SiteConfig) -> Vec<Route> {
    let per_page = config.build.blog.posts_per_page;
    let mut routes = vec![Route::Home, Route::About, Route::Services, Route::NotFound];

    for page in 1..=index_pages(store.posts.len(), per_page) {
        routes.push(Route::BlogIndex { page });
    }
    for category in store.categories() {
        let count = store.posts_by_category(category).len();
        for page in 1..=index_pages(count, per_page) {
            routes.push(Route::BlogCategory {
                category: category.to_string(),
                page,
            });
        }
    }
    for post in &store.posts {
        routes.push(Route::BlogPost {
            slug: post.slug.clone(),
        });
    }

    routes.push(Route::PortfolioIndex);
    for category in store.portfolio_categories().into_iter().skip(1) {
        routes.push(Route::PortfolioCategory {
            category: category.to_string(),
        });
    }
    for project in &store.projects {
        routes.push(Route::PortfolioProject {
            slug: project.slug.clone(),
        });
    }

    routes
}

// ============================================================================
// Render Context
// ============================================================================

/// Shared state for rendering one site: config plus the loaded store.
///
/// Cheap to share across rayon workers; everything behind it is read-only.
pub struct RenderCtx<'a> {
    pub config: &'a SiteConfig,
    pub store: &'a ContentStore,
}

impl<'a> RenderCtx<'a> {
    pub fn new(config: &'a SiteConfig, store: &'a ContentStore) -> Self {
        Self { config, store }
    }

    /// Absolute URL path for a route, with the configured prefix.
    pub fn url(&self, route: &str) -> String {
        self.config.paths().url_for_route(route)
    }

    /// Absolute URL path for a flat output file.
    pub fn file_url(&self, filename: &str) -> String {
        self.config.paths().url_for_filename(filename)
    }

    /// URL of the output assets directory, with trailing slash.
    pub fn assets_root(&self) -> String {
        self.url("assets")
    }

    /// Site name for titles and the header brand.
    pub fn site_name(&self) -> &str {
        if self.config.base.name.is_empty() {
            &self.store.studio.name
        } else {
            &self.config.base.name
        }
    }

    /// Render one route to its output file.
    pub fn render_route(&self, route: &Route) -> Result<()> {
        match route {
            Route::Home => home::render(self),
            Route::About => pages::render_about(self),
            Route::Services => pages::render_services(self),
            Route::NotFound => pages::render_not_found(self),
            Route::BlogIndex { page } => blog::render_index(self, *page),
            Route::BlogCategory { category, page } => {
                blog::render_category(self, category, *page)
            }
            Route::BlogPost { slug } => blog::render_post(self, slug),
            Route::PortfolioIndex => portfolio::render_index(self),
            Route::PortfolioCategory { category } => portfolio::render_category(self, category),
            Route::PortfolioProject { slug } => portfolio::render_project(self, slug),
        }
    }

    /// Wrap page content in the base shell.
    pub(crate) fn page(
        &self,
        title: &str,
        description: &str,
        active: &str,
        content: &str,
    ) -> String {
        let feed_link = if self.config.build.rss.enable {
            let feed_name = self
                .config
                .build
                .rss
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "feed.xml".to_string());
            format!(
                "  <link rel=\"alternate\" type=\"application/rss+xml\" title=\"{}\" href=\"{}\">\n",
                html_escape(self.site_name()),
                self.file_url(&feed_name),
            )
        } else {
            String::new()
        };

        BASE_TEMPLATE
            .replace("{lang}", &self.config.base.language)
            .replace("{title}", &html_escape(title))
            .replace("{description}", &html_escape(description))
            .replace("{feed_link}", &feed_link)
            .replace("{assets_root}", &self.assets_root())
            .replace("{home_url}", &self.url(""))
            .replace("{site_name}", &html_escape(self.site_name()))
            .replace("{nav}", &self.nav(active))
            .replace("{content}", content)
            .replace("{footer}", &self.footer())
    }

    fn nav(&self, active: &str) -> String {
        const ITEMS: &[(&str, &str, &str)] = &[
            ("home", "", "Home"),
            ("about", "about", "About"),
            ("services", "services", "Services"),
            ("portfolio", "portfolio", "Portfolio"),
            ("blog", "blog", "Blog"),
        ];

        ITEMS
            .iter()
            .map(|(key, route, label)| {
                let current = if *key == active {
                    " aria-current=\"page\""
                } else {
                    ""
                };
                format!(
                    "      <a href=\"{}\"{current}>{label}</a>",
                    self.url(route)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn footer(&self) -> String {
        let studio = &self.store.studio;
        let copyright = if self.config.base.copyright.is_empty() {
            format!("© {}", html_escape(&studio.name))
        } else {
            html_escape(&self.config.base.copyright).into_owned()
        };

        let social = [
            ("Instagram", &studio.social.instagram),
            ("Facebook", &studio.social.facebook),
            ("Twitter", &studio.social.twitter),
        ]
        .iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(label, url)| format!("<a href=\"{}\">{label}</a>", html_escape(url)))
        .collect::<Vec<_>>()
        .join("\n        ");

        format!(
            "    <div class=\"footer-inner\">\n      <div>\n        <strong>{}</strong><br>\n        {}<br>\n        {}<br>\n        <a href=\"mailto:{}\">{}</a>\n      </div>\n      <div class=\"footer-social\">\n        {}\n      </div>\n      <div>{}</div>\n    </div>",
            html_escape(&studio.name),
            html_escape(&studio.address),
            html_escape(&studio.phone),
            html_escape(&studio.email),
            html_escape(&studio.email),
            social,
            copyright,
        )
    }

    /// Write a rendered page to `route/index.html` under the output prefix.
    pub(crate) fn write_page(&self, route: &str, html: &str) -> Result<()> {
        let path = self.config.paths().output_for_route(route);
        write_html(&path, html, self.config)
    }

    /// Write the 404 page as a flat file at the output root.
    pub(crate) fn write_not_found(&self, html: &str) -> Result<()> {
        let path = self.config.paths().output_dir().join("404.html");
        write_html(&path, html, self.config)
    }
}

fn write_html(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let bytes = minify(MinifyType::Html(html.as_bytes()), config);
    fs::write(path, &*bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ============================================================================
// Site Entry Points
// ============================================================================

/// Render every planned route in parallel.
pub fn render_site(
    config: &SiteConfig,
    store: &ContentStore,
    routes: &[Route],
    on_page: impl Fn() + Sync,
) -> Result<()> {
    let ctx = RenderCtx::new(config, store);
    routes.par_iter().try_for_each(|route| {
        ctx.render_route(route)
            .with_context(|| format!("Failed to render /{}", route.path()))?;
        on_page();
        Ok(())
    })
}

/// Write the embedded stylesheet and script into the output assets directory.
pub fn write_site_assets(config: &SiteConfig) -> Result<()> {
    let assets_dir = config.paths().output_dir().join("assets");
    fs::create_dir_all(&assets_dir)
        .with_context(|| format!("Failed to create {}", assets_dir.display()))?;
    fs::write(assets_dir.join("aperture.css"), SITE_STYLES)?;
    fs::write(assets_dir.join("aperture.js"), SITE_SCRIPT)?;
    Ok(())
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Long-form date for page display ("January 15, 2024").
///
/// Unparsable dates fall back to the raw string rather than failing a build.
pub(crate) fn display_date(date: &str) -> String {
    DateTimeUtc::parse(date).map_or_else(|| date.to_string(), |d| d.format_long())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_plain_borrows() {
        assert!(matches!(html_escape("hello world"), Cow::Borrowed(_)));
        assert_eq!(html_escape("hello world"), "hello world");
    }

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_display_date_long_form() {
        assert_eq!(display_date("2024-01-15"), "January 15, 2024");
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "");
        assert_eq!(Route::BlogIndex { page: 1 }.path(), "blog");
        assert_eq!(Route::BlogIndex { page: 3 }.path(), "blog/page/3");
        assert_eq!(
            Route::BlogCategory {
                category: "Fine Art".to_string(),
                page: 1
            }
            .path(),
            "blog/category/fine-art"
        );
        assert_eq!(
            Route::BlogCategory {
                category: "Fine Art".to_string(),
                page: 2
            }
            .path(),
            "blog/category/fine-art/page/2"
        );
        assert_eq!(
            Route::PortfolioProject {
                slug: "harbor-wedding".to_string()
            }
            .path(),
            "portfolio/harbor-wedding"
        );
    }

    #[test]
    fn test_index_pages_minimum_one() {
        assert_eq!(index_pages(0, 6), 1);
        assert_eq!(index_pages(6, 6), 1);
        assert_eq!(index_pages(7, 6), 2);
        assert_eq!(index_pages(13, 6), 3);
    }

    fn sample_store() -> ContentStore {
        let posts = r#"[
            {
                "id": "1", "slug": "golden-hour", "title": "Golden Hour",
                "excerpt": "Chasing the light.", "content": "One.\n\nTwo.",
                "category": "Wedding", "author": "Jane Doe",
                "authorAvatar": "/avatars/jane.jpg", "date": "2024-01-15",
                "readTime": "4 min read", "image": "/images/golden.jpg",
                "tags": ["light"]
            },
            {
                "id": "2", "slug": "studio-notes", "title": "Studio Notes",
                "excerpt": "Behind the scenes.", "content": "Only block.",
                "category": "Portrait", "author": "Jane Doe",
                "authorAvatar": "/avatars/jane.jpg", "date": "2024-02-20",
                "readTime": "3 min read", "image": "/images/notes.jpg",
                "tags": []
            }
        ]"#;
        let projects = r#"[
            {
                "id": "p1", "slug": "harbor-wedding", "title": "Harbor Wedding",
                "category": "Wedding", "description": "Foggy morning ceremony.",
                "image": "/images/harbor.jpg",
                "images": ["/images/harbor-1.jpg", "/images/harbor-2.jpg"],
                "client": "The Harpers", "date": "2024-05-20", "tags": []
            }
        ]"#;
        let studio = r#"{
            "name": "Aperture Studio", "tagline": "Light, framed.",
            "description": "A photography studio.", "email": "hello@aperture.example",
            "phone": "+1 555 0100", "address": "12 Dock St",
            "social": {"instagram": "", "facebook": "", "twitter": ""},
            "about": {
                "shortBio": "Small studio.", "fullBio": "Longer story.",
                "photographer": {"name": "Jane Doe", "title": "Lead", "bio": "",
                                 "image": "", "credentials": []},
                "stats": {"yearsExperience": 10, "happyClients": 200,
                          "photosDelivered": 50000, "awards": 3}
            }
        }"#;
        ContentStore {
            posts: serde_json::from_str(posts).unwrap(),
            projects: serde_json::from_str(projects).unwrap(),
            services: vec![],
            testimonials: vec![],
            studio: serde_json::from_str(studio).unwrap(),
        }
    }

    #[test]
    fn test_plan_routes_covers_every_page() {
        let store = sample_store();
        let config = SiteConfig::default();
        let routes = plan_routes(&store, &config);

        assert!(routes.contains(&Route::Home));
        assert!(routes.contains(&Route::About));
        assert!(routes.contains(&Route::Services));
        assert!(routes.contains(&Route::NotFound));
        assert!(routes.contains(&Route::BlogIndex { page: 1 }));
        assert!(routes.contains(&Route::BlogCategory {
            category: "Wedding".to_string(),
            page: 1
        }));
        assert!(routes.contains(&Route::BlogCategory {
            category: "Portrait".to_string(),
            page: 1
        }));
        assert!(routes.contains(&Route::BlogPost {
            slug: "golden-hour".to_string()
        }));
        assert!(routes.contains(&Route::PortfolioIndex));
        assert!(routes.contains(&Route::PortfolioCategory {
            category: "Wedding".to_string()
        }));
        assert!(routes.contains(&Route::PortfolioProject {
            slug: "harbor-wedding".to_string()
        }));
        // 4 fixed + blog index + 2 categories + 2 posts + portfolio index
        // + 1 category + 1 project
        assert_eq!(routes.len(), 12);
    }

    #[test]
    fn test_plan_routes_paginates_long_collections() {
        let mut store = sample_store();
        let template = store.posts[0].clone();
        for i in 0..13 {
            let mut post = template.clone();
            post.id = format!("x{i}");
            post.slug = format!("extra-{i}");
            store.posts.push(post);
        }
        let config = SiteConfig::default(); // 6 posts per page, 15 posts

        let routes = plan_routes(&store, &config);
        assert!(routes.contains(&Route::BlogIndex { page: 3 }));
        assert!(!routes.contains(&Route::BlogIndex { page: 4 }));
        // 14 Wedding posts paginate to 3 category pages as well
        assert!(routes.contains(&Route::BlogCategory {
            category: "Wedding".to_string(),
            page: 3
        }));
    }

    #[test]
    fn test_render_site_writes_every_route() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let dir = tempfile::tempdir().unwrap();
        let store = sample_store();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = false;

        let routes = plan_routes(&store, &config);
        let rendered = AtomicUsize::new(0);
        render_site(&config, &store, &routes, || {
            rendered.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(rendered.load(Ordering::Relaxed), routes.len());
        for relative in [
            "index.html",
            "about/index.html",
            "services/index.html",
            "404.html",
            "blog/index.html",
            "blog/category/wedding/index.html",
            "blog/golden-hour/index.html",
            "portfolio/index.html",
            "portfolio/category/wedding/index.html",
            "portfolio/harbor-wedding/index.html",
        ] {
            assert!(dir.path().join(relative).is_file(), "missing {relative}");
        }

        let home = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(home.contains("<html lang=\"en-US\">"));
        assert!(home.contains("Aperture Studio"));
        assert!(home.contains("href=\"/portfolio/\""));

        let post = fs::read_to_string(dir.path().join("blog/golden-hour/index.html")).unwrap();
        assert!(post.contains("<h1>Golden Hour</h1>"));
        assert!(post.contains("January 15, 2024"));
    }

    #[test]
    fn test_write_site_assets() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        write_site_assets(&config).unwrap();
        assert!(dir.path().join("assets/aperture.css").is_file());
        assert!(dir.path().join("assets/aperture.js").is_file());
    }
}
