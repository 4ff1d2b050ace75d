//! RSS feed generation.
//!
//! Turns the newest blog posts into an RSS 2.0 channel.

use crate::{
    config::SiteConfig,
    content::{BlogPost, ContentStore, SortOrder},
    log,
    render::Route,
    utils::{
        date::DateTimeUtc,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Result, anyhow, bail};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build the RSS feed if enabled in config.
pub fn build_rss(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::build(config, store)?.write(config)?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// RSS feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: Vec<&'a BlogPost>,
}

impl<'a> RssFeed<'a> {
    /// Collect the newest posts up to the configured item limit.
    ///
    /// Posts with unparsable dates are silently skipped; `pubDate` is
    /// mandatory for our items and one bad record must not block the feed.
    fn build(config: &'a SiteConfig, store: &'a ContentStore) -> Result<Self> {
        let posts: Vec<_> = store
            .posts_by_date(SortOrder::Desc)
            .into_iter()
            .filter(|post| DateTimeUtc::parse(&post.date).is_some())
            .take(config.build.rss.limit)
            .collect();

        Ok(Self { config, posts })
    }

    /// Generate the feed xml string
    fn into_xml(self) -> Result<String> {
        let Some(site_url) = self.config.site_url() else {
            bail!("rss feed requires base.url to be set");
        };

        let items: Vec<_> = self
            .posts
            .iter()
            .filter_map(|post| post_to_rss_item(post, site_url, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.name)
            .link(format!("{site_url}{}", self.config.paths().url_for_route("")))
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator("aperture".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write the feed to its configured path
    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let rss_path = &config.build.rss.path;

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(rss_path, &*xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a post to an RSS item.
/// Returns None when the date cannot be parsed into a `pubDate`.
fn post_to_rss_item(post: &BlogPost, site_url: &str, config: &SiteConfig) -> Option<rss::Item> {
    let pub_date = DateTimeUtc::parse(&post.date).map(DateTimeUtc::to_rfc2822)?;
    let route = Route::BlogPost {
        slug: post.slug.clone(),
    };
    let link = format!("{site_url}{}", config.paths().url_for_route(&route.path()));
    let author = normalize_rss_author(&post.author, config);

    Some(
        ItemBuilder::default()
            .title(post.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(Some(post.excerpt.clone()))
            .pub_date(pub_date)
            .author(Some(author))
            .build(),
    )
}

/// Normalize an author field to RSS format: "email@example.com (Name)"
///
/// Priority:
/// 1. Post author if already in valid format
/// 2. Site config author if in valid format
/// 3. Combine site config email with the post's display name
fn normalize_rss_author(author: &str, config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    // Check if the post author is already valid
    if RE_VALID_AUTHOR.is_match(author) {
        return author.to_string();
    }

    // Try site config author
    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return site_author.clone();
    }

    // Combine site email and the post's display name
    let name = if author.is_empty() { site_author } else { author };
    format!("{} ({name})", config.base.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(author: &str, email: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.name = "Aperture Studio".to_string();
        config.base.description = "Studio journal".to_string();
        config.base.author = author.to_string();
        config.base.email = email.to_string();
        config.base.url = Some("https://example.com".to_string());
        config
    }

    fn make_post(id: &str, slug: &str, title: &str, date: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: format!("{title} excerpt"),
            content: String::new(),
            category: "Wedding".to_string(),
            author: "Jane Doe".to_string(),
            author_avatar: String::new(),
            date: date.to_string(),
            read_time: "3 min read".to_string(),
            image: String::new(),
            tags: vec![],
        }
    }

    fn make_store(posts: Vec<BlogPost>) -> ContentStore {
        ContentStore {
            posts,
            projects: vec![],
            services: vec![],
            testimonials: vec![],
            studio: serde_json::from_str(
                r#"{
                    "name": "Aperture Studio",
                    "tagline": "", "description": "", "email": "a@b.co",
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
    fn test_normalize_rss_author() {
        let config = make_config("Site Author", "site@example.com");

        // Case 1: Post author is already valid
        assert_eq!(
            normalize_rss_author("post@example.com (Post Author)", &config),
            "post@example.com (Post Author)"
        );

        // Case 2: Display name only, combined with the site email
        assert_eq!(
            normalize_rss_author("Jane Doe", &config),
            "site@example.com (Jane Doe)"
        );

        // Case 3: Empty post author falls back to the site author name
        assert_eq!(
            normalize_rss_author("", &config),
            "site@example.com (Site Author)"
        );

        // Case 4: Site author is in valid format already
        let config_valid = make_config("site@example.com (Site Author)", "");
        assert_eq!(
            normalize_rss_author("Jane Doe", &config_valid),
            "site@example.com (Site Author)"
        );
    }

    #[test]
    fn test_post_to_rss_item() {
        let config = make_config("Site Author", "site@example.com");
        let post = make_post("1", "golden-hour", "Golden Hour", "2024-01-01");

        let item = post_to_rss_item(&post, "https://example.com", &config).unwrap();
        assert_eq!(item.title(), Some("Golden Hour"));
        assert_eq!(item.link(), Some("https://example.com/blog/golden-hour/"));
        assert_eq!(item.description(), Some("Golden Hour excerpt"));
        assert_eq!(item.author(), Some("site@example.com (Jane Doe)"));
        assert!(item.guid().unwrap().is_permalink());
        // RFC2822 format check
        assert!(item.pub_date().unwrap().contains("Jan 2024"));
    }

    #[test]
    fn test_post_to_rss_item_unparsable_date() {
        let config = make_config("Site Author", "site@example.com");
        let post = make_post("1", "x", "X", "sometime in spring");

        assert!(post_to_rss_item(&post, "https://example.com", &config).is_none());
    }

    #[test]
    fn test_feed_newest_first_with_limit() {
        let mut config = make_config("Site Author", "site@example.com");
        config.build.rss.enable = true;
        config.build.rss.limit = 2;

        let store = make_store(vec![
            make_post("1", "oldest", "Oldest", "2024-01-01"),
            make_post("2", "newest", "Newest", "2024-03-01"),
            make_post("3", "middle", "Middle", "2024-02-01"),
        ]);

        let feed = RssFeed::build(&config, &store).unwrap();
        let slugs: Vec<&str> = feed.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle"]);

        let xml = feed.into_xml().unwrap();
        assert!(xml.contains("<title>Newest</title>"));
        assert!(!xml.contains("<title>Oldest</title>"));
        assert!(xml.contains("<language>en-US</language>"));
        assert!(xml.contains("<link>https://example.com/</link>"));
    }

    #[test]
    fn test_feed_skips_unparsable_dates() {
        let config = make_config("Site Author", "site@example.com");
        let store = make_store(vec![
            make_post("1", "good", "Good", "2024-01-01"),
            make_post("2", "bad", "Bad", "not-a-date"),
        ]);

        let feed = RssFeed::build(&config, &store).unwrap();
        assert_eq!(feed.posts.len(), 1);
        assert_eq!(feed.posts[0].slug, "good");
    }

    #[test]
    fn test_feed_requires_base_url() {
        let mut config = make_config("Site Author", "site@example.com");
        config.base.url = None;
        let store = make_store(vec![make_post("1", "a", "A", "2024-01-01")]);

        let err = RssFeed::build(&config, &store)
            .unwrap()
            .into_xml()
            .unwrap_err();
        assert!(err.to_string().contains("base.url"));
    }
}
