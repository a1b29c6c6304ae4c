use serde::{Deserialize, Serialize};

use crate::store::Recipe;

/// Recipe list request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default)]
    pub per_page: Option<i64>,
}

/// Search request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

fn default_page() -> i64 {
    1
}

/// Recipe list response
#[derive(Debug, Clone, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub pagination: Pagination,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_recipes: usize,
}

/// Recipe card for lists and search results
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub id: usize,
    pub name: String,
    pub author: String,
    pub description: String,
    pub thumbnail_url: String,
}

impl RecipeSummary {
    pub fn from_recipe(recipe: &Recipe, thumbnail_base_url: &str) -> Self {
        Self {
            id: recipe.index,
            name: recipe.name.clone(),
            author: recipe.author.clone(),
            description: recipe.description.clone(),
            thumbnail_url: recipe.thumbnail_url(thumbnail_base_url),
        }
    }
}

/// Full recipe details
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: usize,
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub ingredients: Vec<String>,
    pub method: Vec<String>,
    pub thumbnail_url: String,
}

impl RecipeDetail {
    pub fn from_recipe(recipe: &Recipe, thumbnail_base_url: &str) -> Self {
        Self {
            id: recipe.index,
            name: recipe.name.clone(),
            url: recipe.url.clone(),
            description: recipe.description.clone(),
            author: recipe.author.clone(),
            ingredients: recipe.ingredients.clone(),
            method: recipe.method.clone(),
            thumbnail_url: recipe.thumbnail_url(thumbnail_base_url),
        }
    }
}

/// Search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<RecipeSummary>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub recipes: usize,
}
