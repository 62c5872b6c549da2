//! Reservations repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::reservation::Reservation,
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))
    }

    /// Create a new reservation
    pub async fn create(
        &self,
        id: Uuid,
        publication_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Reservation> {
        let created = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (id, publication_id, user_id, created_at)
            VALUES ($1, $2, $3, now())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(publication_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a reservation
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Reservation with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
