//! Reservation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reservation::{CreateReservation, Reservation},
};

/// Record a user's interest in a publication
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state
        .services
        .reservations
        .create_reservation(request)
        .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = Reservation),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.reservations.get_reservation(id).await?;
    Ok(Json(reservation))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.reservations.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
