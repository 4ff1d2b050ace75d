//! Generated artifacts: RSS feed, sitemap and the client search index.

pub mod rss;
pub mod search;
pub mod sitemap;

pub use rss::build_rss;
pub use search::build_search_index;
pub use sitemap::build_sitemap;
