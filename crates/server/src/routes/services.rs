use axum::{extract::State, http::StatusCode, Json};
use common::types::Envelope;
use models::{NewService, Service, ServiceFilter, ServicePatch};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::routes::AppState;

/// Raw catalog query. Empty values count as absent, matching how the
/// front-end builds its query strings.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServiceQuery {
    pub gender: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// only `true` filters; any other value is ignored
    pub popular: Option<String>,
}

impl From<ServiceQuery> for ServiceFilter {
    fn from(q: ServiceQuery) -> Self {
        ServiceFilter {
            gender: non_empty(q.gender),
            category: non_empty(q.category),
            subcategory: non_empty(q.subcategory),
            popular: (q.popular.as_deref() == Some("true")).then_some(true),
        }
    }
}

pub(crate) fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    params(ServiceQuery),
    responses((status = 200, description = "Matching services"), (status = 400, description = "Bad query"))
)]
pub async fn list_services(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ServiceQuery>,
) -> Result<Json<Envelope<Vec<Service>>>, ApiError> {
    let filter = ServiceFilter::from(q);
    let list = state.salon.list_services(&filter).await;
    info!(count = list.len(), "list services");
    let count = list.len();
    Ok(Json(Envelope::ok(list).with_count(count)))
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services",
    params(("id" = u64, Path, description = "Service id")),
    responses((status = 200, description = "Found"), (status = 404, description = "Service not found"))
)]
pub async fn get_service(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<Envelope<Service>>, ApiError> {
    let svc = state.salon.get_service(id).await?;
    Ok(Json(Envelope::ok(svc)))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::NewServiceDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"), (status = 500, description = "Save Failed"))
)]
pub async fn create_service(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewService>,
) -> Result<(StatusCode, Json<Envelope<Service>>), ApiError> {
    let created = state.salon.create_service(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(created).with_message("Service created successfully")),
    ))
}

#[utoipa::path(
    put, path = "/api/services/{id}", tag = "services",
    params(("id" = u64, Path, description = "Service id")),
    request_body = crate::openapi::ServicePatchDoc,
    responses((status = 200, description = "Updated"), (status = 404, description = "Service not found"))
)]
pub async fn update_service(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(patch): ApiJson<ServicePatch>,
) -> Result<Json<Envelope<Service>>, ApiError> {
    let updated = state.salon.update_service(id, patch).await?;
    Ok(Json(Envelope::ok(updated).with_message("Service updated successfully")))
}

#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services",
    params(("id" = u64, Path, description = "Service id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Service not found"))
)]
pub async fn delete_service(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.salon.delete_service(id).await?;
    Ok(Json(Envelope::done("Service deleted successfully")))
}
