use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::Level;

use crate::api::handlers::{self as api_handlers, AppState};
use crate::web::access_log::AccessLog;
use crate::web::handlers as web_handlers;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-eval' https://unpkg.com https://cdn.jsdelivr.net; \
    style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
    connect-src 'self'; object-src 'none'; base-uri 'self'";

/// Create the router with all endpoints (API + Web UI)
pub fn create_router(state: AppState) -> Router {
    // Public API routes - read-only
    let api_routes = Router::new()
        .route("/recipes", get(api_handlers::list_recipes))
        .route("/recipes/:id", get(api_handlers::get_recipe))
        .route("/search", get(api_handlers::search_recipes))
        .with_state(state.clone());

    // Web UI routes
    let web_routes = Router::new()
        .route("/", get(web_handlers::index))
        .route("/recipes", get(web_handlers::list_recipes))
        .route("/recipe", get(web_handlers::legacy_recipe))
        .route("/recipe/:id", get(web_handlers::recipe_detail))
        .route("/search", get(web_handlers::search_recipes))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state.clone());

    // Static file serving
    let static_routes =
        Router::new().nest_service("/static", ServeDir::new(&state.settings.server.static_dir));

    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .merge(static_routes)
        .nest("/api", api_routes)
        .fallback(web_handlers::not_found)
        .layer(
            // Security headers
            SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Access log
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(AccessLog::new(state.settings.server.log_not_modified)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::RecipeStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = RecipeStore::from_json_str(
            r#"[{"Name": "Porridge", "Description": "Oats and milk"}]"#,
        )
        .unwrap();
        AppState::new(store, Settings::default())
    }

    #[tokio::test]
    async fn test_health_route_exists() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert!(response
            .headers()
            .contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
