//! Rental (circulation) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::rental::{CreateRental, Loan},
    services::circulation::RentalOutcome,
};

/// Rent one instance of a publication
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    request_body = CreateRental,
    responses(
        (status = 201, description = "Loan recorded", body = Loan),
        (status = 400, description = "Missing/invalid fields or no instance available")
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    match state.services.circulation.rent(request).await? {
        RentalOutcome::Recorded(loan) => Ok((StatusCode::CREATED, Json(loan))),
        RentalOutcome::Declined => Err(AppError::NotAvailable(
            "No available instance for this publication".to_string(),
        )),
    }
}

/// Get a rental by ID
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    params(
        ("id" = Uuid, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Rental found", body = Loan),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.circulation.get_rental(id).await?;
    Ok(Json(loan))
}
