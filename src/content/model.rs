//! Content record types.
//!
//! These mirror the JSON documents in the content directory. Field names are
//! camelCase on the wire (`authorAvatar`, `readTime`) and snake_case here.
//! Unknown fields are rejected so content typos surface at load time instead
//! of turning into silently missing data.

use serde::{Deserialize, Serialize};

/// A blog post from `posts.json`.
///
/// `slug` is the external identifier used in routing (`/blog/{slug}/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,

    /// Full body text, paragraphs separated by blank lines
    pub content: String,

    pub category: String,
    pub author: String,
    pub author_avatar: String,

    /// ISO date string, `YYYY-MM-DD`
    pub date: String,

    /// Display label, e.g. "5 min read"
    pub read_time: String,

    pub image: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Body paragraphs, split on blank lines. Empty segments are dropped.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// A portfolio project from `portfolio.json`.
///
/// `images` drives lightbox navigation; `image` is the cover shown in grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioProject {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,

    /// Gallery images in author order, at least one
    pub images: Vec<String>,

    pub client: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// A service offering from `services.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,

    /// Display label, e.g. "From $1,200"
    pub price: String,

    pub features: Vec<String>,
    pub image: String,
}

/// A client testimonial from `testimonials.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub id: String,
    pub name: String,

    /// Free-text service label, matched exactly against bookings
    pub service: String,

    /// Star rating, nominally 1 to 5
    pub rating: u8,

    pub text: String,
    pub avatar: String,
    pub date: String,
}

impl Testimonial {
    /// Rating clamped into the renderable 1..=5 range.
    pub fn clamped_rating(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// Studio identity document from `studio.json`.
///
/// Site-wide profile content: contact details, social links and the
/// about-page material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudioProfile {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: SocialLinks,
    pub about: AboutSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutSection {
    pub short_bio: String,

    /// Long-form bio, paragraphs separated by blank lines
    pub full_bio: String,

    pub photographer: Photographer,
    pub stats: StudioStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Photographer {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: String,
    pub credentials: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudioStats {
    pub years_experience: u32,
    pub happy_clients: u32,
    pub photos_delivered: u32,
    pub awards: u32,
}

// =============================================================================
// Query traits
// =============================================================================

/// Field access shared by the slug-routed collections (posts, projects).
///
/// Lets the query functions stay generic over which collection they scan.
pub trait Entry {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn category(&self) -> &str;
    fn date(&self) -> &str;
}

impl Entry for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn date(&self) -> &str {
        &self.date
    }
}

impl Entry for PortfolioProject {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn date(&self) -> &str {
        &self.date
    }
}

/// Records that can be matched by free-text search.
pub trait Searchable {
    /// The text blob substring search runs against.
    fn searchable_text(&self) -> String;
}

impl Searchable for BlogPost {
    /// Title, excerpt, body and tags joined by spaces.
    ///
    /// The search-index generator emits the same blob so client-side search
    /// matches the build-time primitive.
    fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.excerpt,
            self.content,
            self.tags.join(" ")
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
