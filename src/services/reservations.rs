//! Reservation management service.
//!
//! Reservations are an out-of-band interest signal: they never claim an
//! instance and never change availability.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, Reservation},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a reservation
    pub async fn get_reservation(&self, id: Uuid) -> AppResult<Reservation> {
        self.repository.reservations.get_by_id(id).await
    }

    /// Record a user's interest in a publication
    pub async fn create_reservation(&self, request: CreateReservation) -> AppResult<Reservation> {
        let missing = || AppError::Validation("Missing Required Information".to_string());
        let user_id = request.user_id.ok_or_else(missing)?;
        let publication_id = request.publication_id.ok_or_else(missing)?;

        self.repository
            .reservations
            .create(request.id.unwrap_or_else(Uuid::new_v4), publication_id, user_id)
            .await
    }

    /// Delete a reservation
    pub async fn delete_reservation(&self, id: Uuid) -> AppResult<()> {
        self.repository.reservations.delete(id).await
    }
}
