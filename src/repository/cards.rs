//! Cards repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::card::{Card, CardStatus, UpdateCard},
};

#[derive(Clone)]
pub struct CardsRepository {
    pool: Pool<Postgres>,
}

impl CardsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get card by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Card> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Card with id {} not found", id)))
    }

    /// Create a new card
    pub async fn create(
        &self,
        id: Uuid,
        user_id: Uuid,
        magstripe: &str,
        status: CardStatus,
    ) -> AppResult<Card> {
        let created = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (id, user_id, magstripe, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(magstripe)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update to a card
    pub async fn update(&self, id: Uuid, update: &UpdateCard) -> AppResult<Card> {
        sqlx::query_as::<_, Card>(
            r#"
            UPDATE cards
            SET magstripe = COALESCE($2, magstripe),
                status = COALESCE($3, status),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.magstripe.as_deref())
        .bind(update.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Card with id {} not found", id)))
    }

    /// Delete a card
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Card with id {} not found", id)));
        }
        Ok(())
    }
}
