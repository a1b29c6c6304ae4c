use crate::store::{Recipe, RecipeStore};
use crate::{Error, Result};
use std::io::Write;

/// Print one page of recipe names with their IDs
pub fn list(store: &RecipeStore, page: i64, per_page: usize, out: &mut impl Write) -> Result<()> {
    let result = store.paginate(page, per_page);

    if result.items.is_empty() {
        writeln!(out, "No recipes loaded.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Page {} of {} ({} recipes)\n",
        result.page, result.total_pages, result.total_recipes
    )?;
    for recipe in result.items {
        print_summary(recipe, out)?;
    }

    Ok(())
}

/// Print a single recipe in full
pub fn show(store: &RecipeStore, id: i64, out: &mut impl Write) -> Result<()> {
    let recipe = store
        .get_by_id(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    writeln!(out, "{}", recipe.name)?;
    writeln!(out, "{}", "=".repeat(recipe.name.chars().count()))?;
    writeln!(out, "Author: {}", recipe.author)?;
    writeln!(out, "Source: {}", recipe.url)?;
    if !recipe.description.is_empty() {
        writeln!(out, "\n{}", recipe.description)?;
    }

    writeln!(out, "\nIngredients:")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {ingredient}")?;
    }

    writeln!(out, "\nMethod:")?;
    for (step, instruction) in recipe.method.iter().enumerate() {
        writeln!(out, "  {}. {instruction}", step + 1)?;
    }

    Ok(())
}

/// Print recipes matching `query`, earliest first
pub fn search(store: &RecipeStore, query: &str, limit: i64, out: &mut impl Write) -> Result<()> {
    let limit = usize::try_from(limit).unwrap_or(0);
    let results = store.search(query, limit);

    if results.is_empty() {
        writeln!(out, "No recipes found matching '{}'", query.trim())?;
        return Ok(());
    }

    writeln!(out, "Found {} recipes matching '{}':\n", results.len(), query.trim())?;
    for recipe in results {
        print_summary(recipe, out)?;
    }

    Ok(())
}

fn print_summary(recipe: &Recipe, out: &mut impl Write) -> Result<()> {
    writeln!(out, "[{}] {} (by {})", recipe.index, recipe.name, recipe.author)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecipeStore {
        RecipeStore::from_json_str(
            r#"[
                {"Name": "Egg Curry", "Author": "Anna", "Ingredients": ["eggs"], "Method": ["Boil.", "Simmer."]},
                {"Name": "Toast", "Description": "With a fried egg"},
                {"Name": "Salad"}
            ]"#,
        )
        .unwrap()
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list() {
        let text = output(|out| list(&store(), 2, 2, out));
        assert!(text.contains("Page 2 of 2 (3 recipes)"));
        assert!(text.contains("[2] Salad (by Unknown)"));
        assert!(!text.contains("Toast"));
    }

    #[test]
    fn test_show() {
        let text = output(|out| show(&store(), 0, out));
        assert!(text.contains("Egg Curry"));
        assert!(text.contains("  - eggs"));
        assert!(text.contains("  2. Simmer."));
    }

    #[test]
    fn test_show_unknown_id() {
        let mut buf = Vec::new();
        let err = show(&store(), 3, &mut buf).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_search() {
        let text = output(|out| search(&store(), "EGG", 10, out));
        assert!(text.contains("Found 2 recipes"));
        assert!(text.contains("[0] Egg Curry"));
        assert!(text.contains("[1] Toast"));

        let text = output(|out| search(&store(), "egg", -1, out));
        assert!(text.contains("No recipes found"));
    }
}
