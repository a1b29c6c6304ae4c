use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{api::models::*, config::Settings, store::RecipeStore, utils, Error, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecipeStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: RecipeStore, settings: Settings) -> Self {
        Self {
            store: Arc::new(store),
            settings: Arc::new(settings),
        }
    }

    fn thumbnail_base_url(&self) -> &str {
        &self.settings.web.thumbnail_base_url
    }
}

/// GET /api/recipes - One page of recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<RecipesResponse>> {
    debug!("List recipes request: {:?}", params);

    let per_page = params
        .per_page
        .map_or(state.settings.pagination.recipes_per_page, |n| {
            usize::try_from(n).unwrap_or(1)
        })
        .clamp(1, state.settings.pagination.api_max_limit);

    let page = state.store.paginate(params.page, per_page);

    Ok(Json(RecipesResponse {
        recipes: page
            .items
            .iter()
            .map(|r| RecipeSummary::from_recipe(r, state.thumbnail_base_url()))
            .collect(),
        pagination: Pagination {
            page: page.page,
            per_page,
            total_pages: page.total_pages,
            total_recipes: page.total_recipes,
        },
    }))
}

/// GET /api/recipes/:id - Recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", id);
    let id = utils::parse_recipe_id(&id)?;

    let recipe = state
        .store
        .get_by_id(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    Ok(Json(RecipeDetail::from_recipe(
        recipe,
        state.thumbnail_base_url(),
    )))
}

/// GET /api/search - Search recipe names and descriptions
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    debug!("Search request: {:?}", params);

    let limit = match params.limit {
        Some(limit) => usize::try_from(limit).unwrap_or(0),
        None => state.settings.pagination.search_limit,
    }
    .min(state.settings.pagination.api_max_limit);

    let results: Vec<RecipeSummary> = state
        .store
        .search(&params.q, limit)
        .into_iter()
        .map(|r| RecipeSummary::from_recipe(r, state.thumbnail_base_url()))
        .collect();

    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        total: results.len(),
        results,
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        recipes: state.store.size(),
    }))
}
