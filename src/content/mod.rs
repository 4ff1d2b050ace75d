//! Content loading and querying.
//!
//! The collections are loaded once per build from the content directory and
//! never mutated afterwards. Everything downstream (renderers, generators)
//! receives the store by reference; queries are pure linear scans.

mod lightbox;
mod model;
pub mod query;
mod store;

pub use lightbox::Lightbox;
pub use model::{
    AboutSection, BlogPost, Entry, Photographer, PortfolioProject, Searchable, Service,
    SocialLinks, StudioProfile, StudioStats, Testimonial,
};
pub use query::{ALL_CATEGORIES, Page, SortOrder};
pub use store::ContentStore;
