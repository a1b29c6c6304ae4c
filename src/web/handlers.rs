use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::{
    api::handlers::AppState,
    config::Frontend,
    error::Error,
    store::{PageResult, Recipe},
    utils,
    web::datastar::{PatchElements, PatchMode},
};

const CARD_DESCRIPTION_CHARS: usize = 160;

/// Deserialize optional string, treating empty strings as None
fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

fn default_page() -> i64 {
    1
}

/// What kind of response the client asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Direct navigation: a complete HTML document
    FullPage,
    /// htmx request: an HTML fragment to swap into the page
    HtmxFragment,
    /// Datastar request: an event stream patching the page
    DatastarEvent,
}

impl Presentation {
    pub fn negotiate(headers: &HeaderMap, datastar_param: bool) -> Self {
        if datastar_param || headers.contains_key("datastar-request") {
            return Presentation::DatastarEvent;
        }

        // History restores need the whole page even though htmx sent them
        if headers.contains_key("hx-request")
            && !headers.contains_key("hx-history-restore-request")
        {
            return Presentation::HtmxFragment;
        }

        Presentation::FullPage
    }
}

/// Errors from HTML routes render as an HTML page rather than JSON
#[derive(Debug)]
pub struct HtmlError(pub Error);

impl From<Error> for HtmlError {
    fn from(err: Error) -> Self {
        HtmlError(err)
    }
}

impl From<askama::Error> for HtmlError {
    fn from(err: askama::Error) -> Self {
        HtmlError(Error::Template(err))
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!("Request error: {}", err.log_safe());
        } else {
            debug!("Request error: {}", err.log_safe());
        }

        let template = ErrorTemplate {
            status: status.as_u16(),
            message: err.public_message(),
            datastar: false,
        };

        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                warn!("Error page render failed: {}", e);
                (status, err.public_message()).into_response()
            }
        }
    }
}

type WebResult<T> = std::result::Result<T, HtmlError>;

#[derive(Clone)]
struct RecipeCardData {
    id: usize,
    name: String,
    author: String,
    description: String,
    thumbnail_url: String,
}

impl RecipeCardData {
    fn new(recipe: &Recipe, thumbnail_base_url: &str) -> Self {
        Self {
            id: recipe.index,
            name: recipe.name.clone(),
            author: recipe.author.clone(),
            description: utils::truncate(&recipe.description, CARD_DESCRIPTION_CHARS),
            thumbnail_url: recipe.thumbnail_url(thumbnail_base_url),
        }
    }
}

#[derive(Clone)]
struct RecipeData {
    name: String,
    url: String,
    description: String,
    author: String,
    ingredients: Vec<String>,
    method: Vec<String>,
    thumbnail_url: String,
}

impl RecipeData {
    fn new(recipe: &Recipe, thumbnail_base_url: &str) -> Self {
        Self {
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

#[derive(Clone)]
struct PageData {
    recipes: Vec<RecipeCardData>,
    page: usize,
    total_pages: usize,
    total_recipes: usize,
    has_previous: bool,
    has_next: bool,
    previous_page: usize,
    next_page: usize,
}

impl PageData {
    fn new(page: &PageResult<'_>, thumbnail_base_url: &str) -> Self {
        Self {
            recipes: page
                .items
                .iter()
                .map(|r| RecipeCardData::new(r, thumbnail_base_url))
                .collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_recipes: page.total_recipes,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            previous_page: page.previous_page(),
            next_page: page.next_page(),
        }
    }
}

/// Home page with the recipe list
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    list: PageData,
    query: String,
    datastar: bool,
}

/// Recipe list with pagination controls, swapped in by htmx
#[derive(Template)]
#[template(path = "_recipe_list_fragment.html")]
struct RecipeListFragmentTemplate {
    list: PageData,
    datastar: bool,
}

/// Recipe cards followed by the infinite-scroll trigger, patched in by Datastar
#[derive(Template)]
#[template(path = "_recipe_list_items.html")]
struct RecipeListItemsTemplate {
    list: PageData,
    datastar: bool,
}

/// Recipe detail page
#[derive(Template)]
#[template(path = "recipe.html")]
struct RecipeTemplate {
    recipe: RecipeData,
    datastar: bool,
}

#[derive(Template)]
#[template(path = "_recipe_detail_fragment.html")]
#[allow(dead_code)] // `datastar` is only read by templates that include this one
struct RecipeDetailFragmentTemplate {
    recipe: RecipeData,
    datastar: bool,
}

/// Search results page, for searches submitted without JavaScript
#[derive(Template)]
#[template(path = "search.html")]
struct SearchPageTemplate {
    query: String,
    results: Vec<RecipeCardData>,
    capped: bool,
    datastar: bool,
}

#[derive(Template)]
#[template(path = "_search_results_fragment.html")]
struct SearchResultsFragmentTemplate {
    query: String,
    results: Vec<RecipeCardData>,
    capped: bool,
    datastar: bool,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
    datastar: bool,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default)]
    datastar: Option<String>,
}

#[derive(Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    datastar: Option<String>,
}

#[derive(Deserialize)]
pub struct LegacyRecipeParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    id: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    q: Option<String>,
    #[serde(default)]
    datastar: Option<String>,
}

impl SearchParams {
    /// The query text, falling back to the `q` signal Datastar sends as JSON
    fn query(&self) -> String {
        if let Some(q) = &self.q {
            return q.clone();
        }

        self.datastar
            .as_deref()
            .and_then(|signals| serde_json::from_str::<serde_json::Value>(signals).ok())
            .and_then(|signals| signals.get("q")?.as_str().map(|q| q.trim().to_string()))
            .unwrap_or_default()
    }
}

fn uses_datastar(state: &AppState) -> bool {
    state.settings.web.frontend == Frontend::Datastar
}

/// GET / - Redirect to the recipe list
pub async fn index() -> impl IntoResponse {
    Redirect::to("/recipes")
}

/// GET /recipe?id=N - Old detail URL, moved permanently to /recipe/N
pub async fn legacy_recipe(Query(params): Query<LegacyRecipeParams>) -> WebResult<Response> {
    let id = match params.id {
        Some(raw) => utils::parse_recipe_id(&raw)?,
        None => 0,
    };
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, format!("/recipe/{id}"))],
    )
        .into_response())
}

/// GET /recipes - Recipe list page, htmx fragment, or Datastar infinite-scroll patch
pub async fn list_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    let presentation = Presentation::negotiate(&headers, params.datastar.is_some());
    debug!("List recipes: page {} ({:?})", params.page, presentation);

    let page = state
        .store
        .paginate(params.page, state.settings.pagination.recipes_per_page);
    let list = PageData::new(&page, &state.settings.web.thumbnail_base_url);

    let response = match presentation {
        Presentation::DatastarEvent => {
            let html = RecipeListItemsTemplate {
                list,
                datastar: true,
            }
            .render()?;
            PatchElements::new("#load-more-trigger", PatchMode::Outer, html)
                .into_sse()
                .into_response()
        }
        Presentation::HtmxFragment => Html(
            RecipeListFragmentTemplate {
                list,
                datastar: false,
            }
            .render()?,
        )
        .into_response(),
        Presentation::FullPage => Html(
            HomeTemplate {
                list,
                query: String::new(),
                datastar: uses_datastar(&state),
            }
            .render()?,
        )
        .into_response(),
    };

    Ok(response)
}

/// GET /recipe/:id - Recipe detail page, htmx fragment, or Datastar patch
pub async fn recipe_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> WebResult<Response> {
    let presentation = Presentation::negotiate(&headers, params.datastar.is_some());
    debug!("Recipe detail: {} ({:?})", id, presentation);
    let id = utils::parse_recipe_id(&id)?;

    let recipe = state
        .store
        .get_by_id(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;
    let recipe = RecipeData::new(recipe, &state.settings.web.thumbnail_base_url);

    let response = match presentation {
        Presentation::DatastarEvent => {
            let html = RecipeDetailFragmentTemplate {
                recipe,
                datastar: true,
            }
            .render()?;
            PatchElements::new("#recipe-details", PatchMode::Inner, html)
                .into_sse()
                .into_response()
        }
        Presentation::HtmxFragment => Html(
            RecipeDetailFragmentTemplate {
                recipe,
                datastar: false,
            }
            .render()?,
        )
        .into_response(),
        Presentation::FullPage => Html(
            RecipeTemplate {
                recipe,
                datastar: uses_datastar(&state),
            }
            .render()?,
        )
        .into_response(),
    };

    Ok(response)
}

/// GET /search - Search results.
///
/// A blank query restores the first page of the recipe list.
pub async fn search_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> WebResult<Response> {
    let presentation = Presentation::negotiate(&headers, params.datastar.is_some());
    let query = params.query();
    debug!("Search: {:?} ({:?})", query, presentation);

    let base_url = &state.settings.web.thumbnail_base_url;

    if query.is_empty() {
        let page = state
            .store
            .paginate(1, state.settings.pagination.recipes_per_page);
        let list = PageData::new(&page, base_url);

        let response = match presentation {
            Presentation::DatastarEvent => {
                let html = RecipeListItemsTemplate {
                    list,
                    datastar: true,
                }
                .render()?;
                PatchElements::new("#recipe-list", PatchMode::Inner, html)
                    .into_sse()
                    .into_response()
            }
            Presentation::HtmxFragment => Html(
                RecipeListFragmentTemplate {
                    list,
                    datastar: false,
                }
                .render()?,
            )
            .into_response(),
            Presentation::FullPage => Redirect::to("/recipes").into_response(),
        };
        return Ok(response);
    }

    let limit = state.settings.pagination.search_limit;
    let results: Vec<RecipeCardData> = state
        .store
        .search(&query, limit)
        .into_iter()
        .map(|r| RecipeCardData::new(r, base_url))
        .collect();
    let capped = results.len() >= limit;

    let response = match presentation {
        Presentation::DatastarEvent => {
            let html = SearchResultsFragmentTemplate {
                query,
                results,
                capped,
                datastar: true,
            }
            .render()?;
            PatchElements::new("#recipe-list", PatchMode::Inner, html)
                .into_sse()
                .into_response()
        }
        Presentation::HtmxFragment => Html(
            SearchResultsFragmentTemplate {
                query,
                results,
                capped,
                datastar: false,
            }
            .render()?,
        )
        .into_response(),
        Presentation::FullPage => Html(
            SearchPageTemplate {
                query,
                results,
                capped,
                datastar: uses_datastar(&state),
            }
            .render()?,
        )
        .into_response(),
    };

    Ok(response)
}

/// Fallback for unknown paths
pub async fn not_found() -> impl IntoResponse {
    HtmlError(Error::NotFound("Page not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_negotiate_full_page() {
        let headers = HeaderMap::new();
        assert_eq!(
            Presentation::negotiate(&headers, false),
            Presentation::FullPage
        );
    }

    #[test]
    fn test_negotiate_htmx() {
        let mut headers = HeaderMap::new();
        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert_eq!(
            Presentation::negotiate(&headers, false),
            Presentation::HtmxFragment
        );

        headers.insert("hx-history-restore-request", HeaderValue::from_static("true"));
        assert_eq!(
            Presentation::negotiate(&headers, false),
            Presentation::FullPage
        );
    }

    #[test]
    fn test_negotiate_datastar() {
        let headers = HeaderMap::new();
        assert_eq!(
            Presentation::negotiate(&headers, true),
            Presentation::DatastarEvent
        );

        let mut headers = HeaderMap::new();
        headers.insert("datastar-request", HeaderValue::from_static("true"));
        assert_eq!(
            Presentation::negotiate(&headers, false),
            Presentation::DatastarEvent
        );
    }

    #[test]
    fn test_search_query_from_datastar_signals() {
        let params = SearchParams {
            q: None,
            datastar: Some(r#"{"q": "  soup "}"#.to_string()),
        };
        assert_eq!(params.query(), "soup");

        let params = SearchParams {
            q: Some("stew".to_string()),
            datastar: Some(r#"{"q": "soup"}"#.to_string()),
        };
        assert_eq!(params.query(), "stew");

        let params = SearchParams {
            q: None,
            datastar: Some("not json".to_string()),
        };
        assert_eq!(params.query(), "");
    }
}
