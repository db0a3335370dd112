/// HTTP routing
use crate::{api, config::WebSettings, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application: landing page, static assets and the JSON API
pub fn create_router(app_state: AppState, web: &WebSettings) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/users/:id/exercises",
            post(api::exercises::create_exercise),
        )
        .route("/users/:id/logs", get(api::logs::get_logs));

    Router::new()
        .route_service("/", ServeFile::new(web.views_dir.join("index.html")))
        .nest_service("/public", ServeDir::new(&web.public_dir))
        .nest("/api", api_routes)
        .fallback(api::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
