//! Catalog Filters
//!
//! Pure functions over a borrowed collection. Nothing here mutates the
//! input; every filter returns a fresh `Vec` in original order.

use std::collections::BTreeSet;

use crate::models::Item;

/// Trim and lowercase raw search input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a debounced search for `pending` still reflects the input box.
/// A navigation clears the input, which makes any queued search stale.
pub fn is_current_query(pending: &str, input: &str) -> bool {
    normalize_query(input) == pending
}

/// Items whose category equals `category` exactly (case-sensitive)
pub fn filter_by_category(items: &[Item], category: &str) -> Vec<Item> {
    items.iter().filter(|item| item.category == category).cloned().collect()
}

/// Items whose title or description contains `term`, ignoring case.
/// A blank term matches everything.
pub fn filter_by_query(items: &[Item], term: &str) -> Vec<Item> {
    let needle = normalize_query(term);
    if needle.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| item.matches_query(&needle)).cloned().collect()
}

/// Distinct categories in ascending order
pub fn distinct_sorted_categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// First item with the given id
pub fn find_by_id<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}
