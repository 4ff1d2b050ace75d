//! Utility modules for the static site generator.

pub mod category;
pub mod date;
pub mod fs;
pub mod hash;
pub mod minify;
pub mod slug;
