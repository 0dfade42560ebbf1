use axum::{extract::State, http::StatusCode, Json};
use common::types::Envelope;
use models::{LoyaltyCard, LoyaltyCardUpdate, NewLoyaltyCard};
use service::errors::ServiceError;
use service::loyalty::CardKey;
use tracing::info;

use crate::errors::ApiError;
use crate::extractors::{ApiJson, ApiPath};
use crate::routes::AppState;

/// A key that is neither an email nor a numeric id cannot match any card.
fn card_key(raw: &str) -> Result<CardKey, ApiError> {
    CardKey::parse(raw).ok_or_else(|| ServiceError::not_found("Loyalty card").into())
}

#[utoipa::path(get, path = "/api/loyalty-cards", tag = "loyalty", responses((status = 200, description = "All cards")))]
pub async fn list_cards(State(state): State<AppState>) -> Json<Envelope<Vec<LoyaltyCard>>> {
    let list = state.salon.list_cards().await;
    info!(count = list.len(), "list loyalty cards");
    let count = list.len();
    Json(Envelope::ok(list).with_count(count))
}

#[utoipa::path(
    get, path = "/api/loyalty-cards/{key}", tag = "loyalty",
    params(("key" = String, Path, description = "Card email (case-insensitive) or numeric id")),
    responses((status = 200, description = "Found"), (status = 404, description = "Loyalty card not found"))
)]
pub async fn get_card(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Json<Envelope<LoyaltyCard>>, ApiError> {
    let card = state.salon.get_card(&card_key(&key)?).await?;
    Ok(Json(Envelope::ok(card)))
}

#[utoipa::path(
    post, path = "/api/loyalty-cards", tag = "loyalty",
    request_body = crate::openapi::NewLoyaltyCardDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Duplicate email or invalid input"))
)]
pub async fn create_card(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewLoyaltyCard>,
) -> Result<(StatusCode, Json<Envelope<LoyaltyCard>>), ApiError> {
    let card = state.salon.create_card(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(card).with_message("Loyalty card created successfully")),
    ))
}

#[utoipa::path(
    put, path = "/api/loyalty-cards/{key}", tag = "loyalty",
    params(("key" = String, Path, description = "Card email (case-insensitive) or numeric id")),
    request_body = crate::openapi::LoyaltyCardUpdateDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Invalid delta"), (status = 404, description = "Loyalty card not found"))
)]
pub async fn accrue_card(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiJson(update): ApiJson<LoyaltyCardUpdate>,
) -> Result<Json<Envelope<LoyaltyCard>>, ApiError> {
    let card = state.salon.accrue_card(&card_key(&key)?, update).await?;
    Ok(Json(Envelope::ok(card).with_message("Loyalty card updated successfully")))
}
