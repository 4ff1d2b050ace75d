//! URL slugification for category and tag path segments.
//!
//! Content records carry their own author-supplied slugs; this module only
//! derives URL segments for labels that never had one, such as category
//! names ("Wedding Photography" → "wedding-photography").

use deunicode::deunicode;

/// Convert a free-form label to a lowercase ASCII URL segment.
///
/// Non-ASCII text is transliterated first, then every run of
/// non-alphanumeric characters collapses to a single `-`. Leading and
/// trailing dashes are stripped.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Wedding"), "wedding");
        assert_eq!(slugify("PORTRAIT"), "portrait");
    }

    #[test]
    fn test_slugify_replaces_spaces() {
        assert_eq!(slugify("Wedding Photography"), "wedding-photography");
        assert_eq!(slugify("Behind The Scenes"), "behind-the-scenes");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Tips & Tricks"), "tips-tricks");
        assert_eq!(slugify("Black / White -- Film"), "black-white-film");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Wedding  "), "wedding");
        assert_eq!(slugify("---Portraits---"), "portraits");
    }

    #[test]
    fn test_slugify_transliterates_unicode() {
        assert_eq!(slugify("Café"), "cafe");
        assert_eq!(slugify("Señor García"), "senor-garcia");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 Locations"), "top-10-locations");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_slugify_idempotent_on_slugs() {
        assert_eq!(slugify("wedding-photography"), "wedding-photography");
    }
}
