//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing every rendered page for search
//! engine indexing. `lastmod` comes from the content dates: a post or
//! project page uses its own date, a listing page the newest date of the
//! records it lists.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    log,
    render::Route,
    utils::{
        date::DateTimeUtc,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Reuses the route plan that drove rendering, so the sitemap can never
/// disagree with the pages actually written. Skipped with a notice when
/// `base.url` is unset, since sitemap locations must be absolute.
pub fn build_sitemap(config: &SiteConfig, store: &ContentStore, routes: &[Route]) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }
    let Some(site_url) = config.site_url() else {
        log!("sitemap"; "skipped: base.url is not set");
        return Ok(());
    };

    Sitemap::from_routes(routes, store, config, site_url).write(config)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Build sitemap entries from the route plan.
    ///
    /// The 404 page is not a crawlable location and is left out.
    fn from_routes(
        routes: &[Route],
        store: &ContentStore,
        config: &SiteConfig,
        site_url: &str,
    ) -> Self {
        let urls: Vec<UrlEntry> = routes
            .iter()
            .filter(|route| !matches!(route, Route::NotFound))
            .map(|route| UrlEntry {
                loc: format!(
                    "{site_url}{}",
                    config.paths().url_for_route(&route.path())
                ),
                lastmod: lastmod_for(route, store),
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = &config.build.sitemap.path;
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Last modification date for one route, normalized to YYYY-MM-DD.
fn lastmod_for(route: &Route, store: &ContentStore) -> Option<String> {
    let post_dates = || store.posts.iter().map(|p| p.date.as_str());
    let project_dates = || store.projects.iter().map(|p| p.date.as_str());

    match route {
        Route::Home => newest(post_dates().chain(project_dates())),
        Route::About | Route::Services | Route::NotFound => None,
        Route::BlogIndex { .. } => newest(post_dates()),
        Route::BlogCategory { category, .. } => newest(
            store
                .posts_by_category(category)
                .into_iter()
                .map(|p| p.date.as_str()),
        ),
        Route::BlogPost { slug } => store
            .post_by_slug(slug)
            .and_then(|p| DateTimeUtc::parse(&p.date))
            .map(DateTimeUtc::to_ymd),
        Route::PortfolioIndex => newest(project_dates()),
        Route::PortfolioCategory { category } => newest(
            store
                .projects_by_category(category)
                .into_iter()
                .map(|p| p.date.as_str()),
        ),
        Route::PortfolioProject { slug } => store
            .project_by_slug(slug)
            .and_then(|p| DateTimeUtc::parse(&p.date))
            .map(DateTimeUtc::to_ymd),
    }
}

/// Newest parseable date among the given raw strings.
fn newest<'a>(dates: impl Iterator<Item = &'a str>) -> Option<String> {
    dates
        .filter_map(DateTimeUtc::parse)
        .max()
        .map(DateTimeUtc::to_ymd)
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, PortfolioProject};

    fn make_post(id: &str, slug: &str, category: &str, date: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("Post {id}"),
            excerpt: String::new(),
            content: String::new(),
            category: category.to_string(),
            author: "Jane".to_string(),
            author_avatar: String::new(),
            date: date.to_string(),
            read_time: String::new(),
            image: String::new(),
            tags: vec![],
        }
    }

    fn make_project(id: &str, slug: &str, date: &str) -> PortfolioProject {
        PortfolioProject {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("Project {id}"),
            category: "Wedding".to_string(),
            description: String::new(),
            image: String::new(),
            images: vec!["/a.jpg".to_string()],
            client: String::new(),
            date: date.to_string(),
            tags: vec![],
        }
    }

    fn make_store() -> ContentStore {
        ContentStore {
            posts: vec![
                make_post("1", "older", "Wedding", "2024-01-10"),
                make_post("2", "newer", "Portrait", "2024-03-05"),
            ],
            projects: vec![make_project("p1", "harbor", "2024-05-20")],
            services: vec![],
            testimonials: vec![],
            studio: serde_json::from_str(
                r#"{
                    "name": "S", "tagline": "", "description": "", "email": "a@b.co",
                    "phone": "", "address": "",
                    "social": {"instagram": "", "facebook": "", "twitter": ""},
                    "about": {
                        "shortBio": "", "fullBio": "",
                        "photographer": {"name": "", "title": "", "bio": "", "image": "", "credentials": []},
                        "stats": {"yearsExperience": 1, "happyClients": 1, "photosDelivered": 1, "awards": 0}
                    }
                }"#,
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_xml_combined() {
        assert_eq!(
            escape_xml("<a href=\"test\">link & 'text'</a>"),
            "&lt;a href=&quot;test&quot;&gt;link &amp; &apos;text&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_from_routes() {
        let store = make_store();
        let config = SiteConfig::default();
        let routes = vec![
            Route::Home,
            Route::NotFound,
            Route::BlogPost {
                slug: "newer".to_string(),
            },
            Route::PortfolioProject {
                slug: "harbor".to_string(),
            },
        ];

        let sitemap = Sitemap::from_routes(&routes, &store, &config, "https://example.com");
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/newer/</loc>"));
        assert!(xml.contains("<loc>https://example.com/portfolio/harbor/</loc>"));
        // 404 page is excluded
        assert!(!xml.contains("404"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_lastmod_detail_pages_use_record_date() {
        let store = make_store();
        let post_route = Route::BlogPost {
            slug: "older".to_string(),
        };
        let project_route = Route::PortfolioProject {
            slug: "harbor".to_string(),
        };

        assert_eq!(lastmod_for(&post_route, &store), Some("2024-01-10".to_string()));
        assert_eq!(
            lastmod_for(&project_route, &store),
            Some("2024-05-20".to_string())
        );
    }

    #[test]
    fn test_lastmod_listing_pages_use_newest() {
        let store = make_store();

        assert_eq!(
            lastmod_for(&Route::BlogIndex { page: 1 }, &store),
            Some("2024-03-05".to_string())
        );
        assert_eq!(
            lastmod_for(
                &Route::BlogCategory {
                    category: "Wedding".to_string(),
                    page: 1
                },
                &store
            ),
            Some("2024-01-10".to_string())
        );
        // home spans posts and projects; the project is newest
        assert_eq!(
            lastmod_for(&Route::Home, &store),
            Some("2024-05-20".to_string())
        );
    }

    #[test]
    fn test_lastmod_static_pages_absent() {
        let store = make_store();
        assert_eq!(lastmod_for(&Route::About, &store), None);
        assert_eq!(lastmod_for(&Route::Services, &store), None);
    }

    #[test]
    fn test_lastmod_skips_unparsable_dates() {
        let mut store = make_store();
        store.posts[1].date = "spring, probably".to_string();

        assert_eq!(
            lastmod_for(&Route::BlogIndex { page: 1 }, &store),
            Some("2024-01-10".to_string())
        );
        assert_eq!(
            lastmod_for(
                &Route::BlogPost {
                    slug: "newer".to_string()
                },
                &store
            ),
            None
        );
    }

    #[test]
    fn test_sitemap_normalizes_datetime_to_date() {
        let mut store = make_store();
        store.posts[0].date = "2024-01-10T08:30:00Z".to_string();

        assert_eq!(
            lastmod_for(
                &Route::BlogPost {
                    slug: "older".to_string()
                },
                &store
            ),
            Some("2024-01-10".to_string())
        );
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/".to_string(),
                lastmod: Some("2025-01-01".to_string()),
            }],
        };
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
    }
}
