//! List filtering - pure functions over already-loaded collections
//!
//! Listing pages re-run these on every tag click or search keystroke; the
//! input list is never mutated and no state is kept between calls.

use indexmap::IndexSet;

/// Sentinel tag meaning "no tag filter"
pub const ALL_TAG: &str = "All";

/// Fields a record exposes for filtering
pub trait Searchable {
    fn title(&self) -> &str;
    fn summary(&self) -> &str;
    fn tags(&self) -> &[String];
}

/// Keep items carrying `tag` (case-sensitive exact match).
/// The `"All"` sentinel returns the input unchanged.
pub fn filter_by_tag<T: Searchable + Clone>(items: &[T], tag: &str) -> Vec<T> {
    if tag == ALL_TAG {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.tags().iter().any(|t| t == tag))
        .cloned()
        .collect()
}

/// Keep items where the lowercased query is a substring of the lowercased
/// title, summary, or any tag. An empty or whitespace-only query returns the
/// input unchanged.
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let query = query.to_lowercase();

    items
        .iter()
        .filter(|item| {
            item.title().to_lowercase().contains(&query)
                || item.summary().to_lowercase().contains(&query)
                || item.tags().iter().any(|t| t.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Active filter criteria for a listing page
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Selected tag, `None` behaves like the `"All"` sentinel
    pub tag: Option<String>,
    /// Free-text search query
    pub query: String,
}

impl Criteria {
    /// Apply the tag filter first, then the query filter on its result.
    /// Both active at once narrows the result (AND semantics).
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        let tag = self.tag.as_deref().unwrap_or(ALL_TAG);
        let by_tag = filter_by_tag(items, tag);
        filter_by_query(&by_tag, &self.query)
    }
}

/// Distinct tags in first-occurrence order, with `"All"` prepended.
/// Used to populate the tag filter controls.
pub fn distinct_tags<T: Searchable>(items: &[T]) -> Vec<String> {
    let mut tags: IndexSet<String> = IndexSet::new();
    tags.insert(ALL_TAG.to_string());
    for item in items {
        for tag in item.tags() {
            tags.insert(tag.clone());
        }
    }
    tags.into_iter().collect()
}
