use axum::{
    routing::get,
    Json, Router,
};
use common::types::Health;
use service::SalonService;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

pub mod categories;
pub mod loyalty_cards;
pub mod services;

/// Shared handler state. Holds no data of its own: every request reloads
/// the dataset through the service.
#[derive(Clone)]
pub struct AppState {
    pub salon: SalonService,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// JSON API routes only; no static assets, CORS or tracing.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/services", get(services::list_services).post(services::create_service))
        .route(
            "/api/services/:id",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/:category/subcategories", get(categories::list_subcategories))
        .route("/api/loyalty-cards", get(loyalty_cards::list_cards).post(loyalty_cards::create_card))
        .route("/api/loyalty-cards/:key", get(loyalty_cards::get_card).put(loyalty_cards::accrue_card))
        .with_state(state)
}

/// Build the full application: API routes, static front-end pages as the
/// fallback, CORS and request tracing.
pub fn build_router(state: AppState, static_dir: &str, cors: CorsLayer) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
