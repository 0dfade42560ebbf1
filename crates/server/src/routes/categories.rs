use axum::{extract::State, Json};
use common::types::Envelope;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::extractors::{ApiPath, ApiQuery};
use crate::routes::services::non_empty;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenderQuery {
    pub gender: Option<String>,
}

#[utoipa::path(
    get, path = "/api/categories", tag = "categories",
    params(GenderQuery),
    responses((status = 200, description = "Distinct categories"))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<GenderQuery>,
) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let gender = non_empty(q.gender);
    let list = state.salon.categories(gender.as_deref()).await;
    Ok(Json(Envelope::ok(list)))
}

#[utoipa::path(
    get, path = "/api/categories/{category}/subcategories", tag = "categories",
    params(("category" = String, Path, description = "Category name"), GenderQuery),
    responses((status = 200, description = "Distinct subcategories of the category"))
)]
pub async fn list_subcategories(
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
    ApiQuery(q): ApiQuery<GenderQuery>,
) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let gender = non_empty(q.gender);
    let list = state.salon.subcategories(&category, gender.as_deref()).await;
    Ok(Json(Envelope::ok(list)))
}
