//! Pagination and text search over a loaded recipe collection.
//!
//! Everything here is a pure function of its inputs.

use super::recipe::Recipe;

/// Maximum number of search results when the caller does not choose one
pub const DEFAULT_SEARCH_LIMIT: usize = 42;

/// One page of recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageResult<'a> {
    pub items: &'a [Recipe],
    pub page: usize,
    pub total_pages: usize,
    pub total_recipes: usize,
}

impl PageResult<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }
}

/// Slice `recipes` into page `page` of `page_size` items.
///
/// `page` is clamped into `1..=total_pages`. An empty collection has zero
/// pages and reports page 1 with no items. A `page_size` of zero is treated
/// as one.
pub fn paginate(recipes: &[Recipe], page: i64, page_size: usize) -> PageResult<'_> {
    let page_size = page_size.max(1);
    let total_recipes = recipes.len();
    let total_pages = total_recipes.div_ceil(page_size);

    let requested = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let page = requested.min(total_pages).max(1);

    let start = ((page - 1).saturating_mul(page_size)).min(total_recipes);
    let end = start.saturating_add(page_size).min(total_recipes);

    PageResult {
        items: &recipes[start..end],
        page,
        total_pages,
        total_recipes,
    }
}

/// Case-insensitive substring search over name and description.
///
/// Results keep collection order and the scan stops at `limit` matches, so
/// the earliest recipes win. A blank query matches nothing.
pub fn search<'a>(recipes: &'a [Recipe], query: &str, limit: usize) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    recipes
        .iter()
        .filter(|recipe| matches(recipe, &needle))
        .take(limit)
        .collect()
}

fn matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.name.to_lowercase().contains(needle)
        || (!recipe.description.is_empty() && recipe.description.to_lowercase().contains(needle))
}
