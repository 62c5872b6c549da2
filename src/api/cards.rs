//! Membership card endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::card::{Card, CreateCard, UpdateCard},
};

/// Get a card by ID
#[utoipa::path(
    get,
    path = "/cards/{id}",
    tag = "cards",
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card found", body = Card),
        (status = 404, description = "Card not found")
    )
)]
pub async fn get_card(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Card>> {
    let card = state.services.users.get_card(id).await?;
    Ok(Json(card))
}

/// Create a new card
#[utoipa::path(
    post,
    path = "/cards",
    tag = "cards",
    request_body = CreateCard,
    responses(
        (status = 201, description = "Card created", body = Card),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_card(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateCard>,
) -> AppResult<(StatusCode, Json<Card>)> {
    let card = state.services.users.create_card(request).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Update a card
#[utoipa::path(
    patch,
    path = "/cards/{id}",
    tag = "cards",
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    request_body = UpdateCard,
    responses(
        (status = 200, description = "Card updated", body = Card),
        (status = 404, description = "Card not found")
    )
)]
pub async fn update_card(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCard>,
) -> AppResult<Json<Card>> {
    let card = state.services.users.update_card(id, request).await?;
    Ok(Json(card))
}

/// Delete a card
#[utoipa::path(
    delete,
    path = "/cards/{id}",
    tag = "cards",
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 404, description = "Card not found")
    )
)]
pub async fn delete_card(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.users.delete_card(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
