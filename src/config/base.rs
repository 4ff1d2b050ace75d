//! `[base]` section configuration.
//!
//! Contains basic site identity: studio name, tagline, description, url.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in aperture.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// name = "Lumière Studio"
/// tagline = "Capturing Life's Beautiful Moments"
/// description = "Wedding, portrait and event photography"
/// url = "https://lumiere.example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Studio name displayed in browser tab and page headers.
    /// Falls back to the studio profile name from content when empty.
    #[serde(default)]
    pub name: String,

    /// Short tagline shown under the studio name on the home page.
    #[serde(default)]
    pub tagline: String,

    /// Site description for SEO meta tags and the feed channel.
    #[serde(default)]
    pub description: String,

    /// Studio or owner name for feed metadata.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Contact email for feed metadata.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Base URL for absolute links in rss/sitemap.
    /// Required when `[build.rss].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for the site footer.
    #[serde(default)]
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            name = "Lumière Studio"
            tagline = "Capturing Life's Beautiful Moments"
            description = "Wedding and portrait photography"
            url = "https://lumiere.example.com"
            language = "en-US"
            copyright = "2024 Lumière Studio"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.name, "Lumière Studio");
        assert_eq!(config.base.tagline, "Capturing Life's Beautiful Moments");
        assert_eq!(config.base.description, "Wedding and portrait photography");
        assert_eq!(
            config.base.url,
            Some("https://lumiere.example.com".to_string())
        );
        assert_eq!(config.base.language, "en-US");
        assert_eq!(config.base.copyright, "2024 Lumière Studio");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            name = "Test Studio"
            description = "Test"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.tagline, "");
        assert_eq!(config.base.author, "<YOUR_STUDIO>");
        assert_eq!(config.base.email, "studio@noreply.aperture");
        assert_eq!(config.base.language, "en-US");
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.copyright, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            name = "Test Studio"
            description = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_author_email() {
        let config = r#"
            [base]
            name = "Test Studio"
            description = "Test"
            author = "Sarah Anderson"
            email = "sarah@example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "Sarah Anderson");
        assert_eq!(config.base.email, "sarah@example.com");
    }

    #[test]
    fn test_base_config_url_with_path() {
        let config = r#"
            [base]
            name = "Test Studio"
            description = "Test"
            url = "https://example.com/studio"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.base.url,
            Some("https://example.com/studio".to_string())
        );
    }

    #[test]
    fn test_base_config_empty_strings() {
        let config = r#"
            [base]
            name = ""
            description = ""
            tagline = ""
            copyright = ""
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.name, "");
        assert_eq!(config.base.description, "");
        assert_eq!(config.base.tagline, "");
        assert_eq!(config.base.copyright, "");
    }
}
