//! Pure query functions over the content collections.
//!
//! Every operation is a side-effect-free linear scan returning references
//! into the caller's collection. Collections here hold at most a few hundred
//! records, so no indexing structure is kept.

use std::cmp::Reverse;

use crate::utils::date::DateTimeUtc;

use super::model::{Entry, Searchable};

/// Category value that bypasses filtering entirely.
pub const ALL_CATEGORIES: &str = "All";

/// Sort direction for [`sort_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first
    #[default]
    Desc,
    /// Oldest first
    Asc,
}

/// One page of results plus pager state.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,

    /// Requested page number, 1-indexed
    pub current_page: usize,

    /// `ceil(count / page_size)`; 0 when the input is empty
    pub total_pages: usize,

    pub has_next: bool,
    pub has_prev: bool,
}

/// First record whose slug matches, or `None`.
///
/// Absence is an expected outcome (typed URLs), not an error.
pub fn by_slug<'a, T: Entry>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

/// Records whose `category` equals the argument exactly (case-sensitive).
///
/// The sentinel [`ALL_CATEGORIES`] bypasses filtering and returns the full
/// collection in original order.
pub fn by_category<'a, T: Entry>(items: &'a [T], category: &str) -> Vec<&'a T> {
    if category == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category() == category)
        .collect()
}

/// Case-insensitive substring search over each record's searchable text.
///
/// An empty or whitespace-only query matches everything. That is a contract
/// of this function, not a caller convention: substring-of-everything falls
/// out of the empty needle, and the whitespace case is normalized to it.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.searchable_text().to_lowercase().contains(&needle))
        .collect()
}

/// Records sharing `category`, excluding the record with `id`, truncated to
/// `limit`, in collection order.
///
/// No relevance ranking beyond the category match; original order stands in
/// for it.
pub fn related<'a, T: Entry>(
    items: &'a [T],
    id: &str,
    category: &str,
    limit: usize,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.id() != id && item.category() == category)
        .take(limit)
        .collect()
}

/// First `limit` records in collection order.
///
/// Featured-ness is positional: content authors control it by ordering the
/// collection, not by a flag.
pub fn featured<T>(items: &[T], limit: usize) -> Vec<&T> {
    items.iter().take(limit).collect()
}

/// Stable sort by parsed date.
///
/// Ties keep their relative input order. Unparsable dates sort as the
/// minimum date rather than failing, so they land last under `Desc`.
pub fn sort_by_date<'a, T: Entry>(items: &[&'a T], order: SortOrder) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by_cached_key(|item| parsed_date(*item)),
        SortOrder::Desc => sorted.sort_by_cached_key(|item| Reverse(parsed_date(*item))),
    }
    sorted
}

fn parsed_date<T: Entry>(item: &T) -> DateTimeUtc {
    DateTimeUtc::parse(item.date()).unwrap_or(DateTimeUtc::MIN)
}

/// Slice out one 1-indexed page of `items`.
///
/// Out-of-range pages (0, or beyond the last page) yield an empty item list
/// with the pager flags still computed from the same formulas; nothing here
/// errors. A `page_size` of 0 yields an empty page with `total_pages = 0`.
pub fn paginate<'a, T>(items: &[&'a T], page: usize, page_size: usize) -> Page<'a, T> {
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            current_page: page,
            total_pages: 0,
            has_next: false,
            has_prev: page > 1,
        };
    }

    let total_pages = items.len().div_ceil(page_size);

    let page_items = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(page_size);
        items.iter().skip(start).take(page_size).copied().collect()
    };

    Page {
        items: page_items,
        current_page: page,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

// =============================================================================
// Tests
// =============================================================================
