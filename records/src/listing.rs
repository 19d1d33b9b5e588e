//! In-memory search, ordering and paging for list screens.
//!
//! Collections are small and fetched whole, so every list view filters,
//! sorts and slices client-side with a fixed page size.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Reverse;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// A record that can appear in a searchable, recency-ordered table.
pub trait Listed {
    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn created_on(&self) -> Option<&str>;

    fn modified_on(&self) -> Option<&str>;

    /// Rows the backend marked as removed but still returns.
    fn is_hidden(&self) -> bool {
        false
    }

    /// Timestamp used for ordering: last modification, else creation.
    fn recency(&self) -> Option<&str> {
        self.modified_on().or_else(|| self.created_on())
    }
}

/// Search text plus the 1-based page currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { search: String::new(), page: 1 }
    }
}

impl ListQuery {
    /// Replace the search text. Any change sends the table back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// One page of filtered rows.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub rows: Vec<&'a T>,
    /// 1-based page actually shown after clamping.
    pub page: usize,
    pub page_count: usize,
    /// Number of rows matching the search across all pages.
    pub total: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Number of pages needed for `total` rows.
#[must_use]
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Case-insensitive substring match over the record's search fields.
/// Blank search text matches everything.
pub fn matches<T: Listed>(item: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Ordering key for a row's timestamp. RFC 3339 values compare as instants;
/// anything else keeps its raw text and sorts below every parsed value.
fn recency_key<T: Listed>(item: &T) -> (Option<OffsetDateTime>, Option<&str>) {
    let raw = item.recency();
    (raw.and_then(|s| OffsetDateTime::parse(s.trim(), &Rfc3339).ok()), raw)
}

/// Visible rows matching `search`, newest first. Rows without any
/// timestamp keep their backend order at the end.
pub fn filter_sorted<'a, T: Listed>(items: &'a [T], search: &str) -> Vec<&'a T> {
    let mut rows: Vec<&T> = items
        .iter()
        .filter(|item| !item.is_hidden() && matches(*item, search))
        .collect();
    rows.sort_by_cached_key(|item| Reverse(recency_key(*item)));
    rows
}

/// Filter, sort and slice `items` for the page requested by `query`.
pub fn paginate<'a, T: Listed>(items: &'a [T], query: &ListQuery) -> Page<'a, T> {
    let rows = filter_sorted(items, &query.search);
    let total = rows.len();
    let page_count = page_count(total);
    let page = query.page.clamp(1, page_count.max(1));
    let rows = rows
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    Page { rows, page, page_count, total }
}
