// Presentation helpers shared by the web UI, API and CLI

use crate::{Error, Result};

/// Placeholder image URL for the recipe at `index`
pub fn thumbnail_url(base_url: &str, index: usize) -> String {
    format!("{}/200x200/{index}", base_url.trim_end_matches('/'))
}

/// Truncate text to at most `max_chars` characters, ending with "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Parse a recipe id taken from a URL; anything that is not an integer names no recipe
pub fn parse_recipe_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::NotFound(format!("Recipe {raw} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("https://static.photos/food", 4),
            "https://static.photos/food/200x200/4"
        );
        assert_eq!(
            thumbnail_url("https://static.photos/food/", 0),
            "https://static.photos/food/200x200/0"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("crème brûlée au café", 9), "crème...");
    }

    #[test]
    fn test_parse_recipe_id() {
        assert_eq!(parse_recipe_id("12").unwrap(), 12);
        assert_eq!(parse_recipe_id("-1").unwrap(), -1);
        assert!(matches!(parse_recipe_id("abc"), Err(Error::NotFound(_))));
        assert!(matches!(parse_recipe_id("1.5"), Err(Error::NotFound(_))));
    }
}
