// Pagination and search behaviour over a realistic collection
use recipes::store::{Recipe, RecipeStore, DEFAULT_SEARCH_LIMIT};

fn store_of(count: usize) -> RecipeStore {
    let records: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"Name": "Recipe {i}", "Description": "Dish number {i}"}}"#))
        .collect();
    RecipeStore::from_json_str(&format!("[{}]", records.join(","))).unwrap()
}

fn indices(recipes: &[&Recipe]) -> Vec<usize> {
    recipes.iter().map(|r| r.index).collect()
}

#[test]
fn test_forty_two_recipes_in_pages_of_ten() {
    let store = store_of(42);

    let first = store.paginate(1, 10);
    assert_eq!(first.total_pages, 5);
    assert_eq!(first.total_recipes, 42);

    let last = store.paginate(5, 10);
    assert_eq!(last.items.len(), 2);
}

#[test]
fn test_page_never_exceeds_page_size() {
    let store = store_of(23);

    for page_size in 1..=25 {
        for page in [-100, -1, 0, 1, 2, 3, 7, 24, 1_000_000, i64::MAX] {
            let result = store.paginate(page, page_size);
            assert!(result.items.len() <= page_size);
            assert!(result.page >= 1);
            assert!(result.page <= result.total_pages);
        }
    }
}

#[test]
fn test_pages_partition_collection() {
    let store = store_of(37);

    for page_size in [1, 4, 10, 36, 37, 50] {
        let total_pages = store.paginate(1, page_size).total_pages;
        assert_eq!(total_pages, 37_usize.div_ceil(page_size));

        let concatenated: Vec<&Recipe> = (1..=total_pages as i64)
            .flat_map(|page| store.paginate(page, page_size).items.iter())
            .collect();

        let original: Vec<&Recipe> = store.recipes().iter().collect();
        assert_eq!(concatenated, original, "page size {page_size}");
    }
}

#[test]
fn test_empty_collection_has_no_pages() {
    let store = RecipeStore::from_json_str("[]").unwrap();

    for page in [-1, 0, 1, 5] {
        let result = store.paginate(page, 10);
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page, 1);
    }
}

#[test]
fn test_blank_queries_return_nothing() {
    let store = store_of(10);
    assert!(store.search("", DEFAULT_SEARCH_LIMIT).is_empty());
    assert!(store.search("   ", DEFAULT_SEARCH_LIMIT).is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let store = RecipeStore::from_json_str(
        r#"[
            {"Name": "Scrambled Eggs"},
            {"Name": "Toast", "Description": "Topped with an EGG"},
            {"Name": "Soup"}
        ]"#,
    )
    .unwrap();

    let lower = indices(&store.search("egg", DEFAULT_SEARCH_LIMIT));
    let upper = indices(&store.search("EGG", DEFAULT_SEARCH_LIMIT));
    assert_eq!(lower, vec![0, 1]);
    assert_eq!(lower, upper);
}

#[test]
fn test_limit_returns_earliest_matches() {
    let store = store_of(20);
    // "Recipe 5", "Recipe 15" match "5"; so do descriptions "Dish number 5"/"15"
    let found = indices(&store.search("5", 1));
    assert_eq!(found, vec![5]);

    let found = indices(&store.search("1", 3));
    assert_eq!(found, vec![1, 10, 11]);

    assert!(store.search("1", 0).is_empty());
}

#[test]
fn test_default_limit_caps_results() {
    let store = store_of(100);
    let found = store.search("recipe", DEFAULT_SEARCH_LIMIT);
    assert_eq!(found.len(), 42);
    assert_eq!(found.last().unwrap().index, 41);
}

#[test]
fn test_query_longer_than_any_field() {
    let store = store_of(5);
    let query = "x".repeat(500);
    assert!(store.search(&query, DEFAULT_SEARCH_LIMIT).is_empty());
}
