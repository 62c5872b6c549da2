//! Publication instances repository for database operations.
//!
//! Holds the instance allocator: the single serializable step that both
//! finds an available copy and flips its status, so two concurrent rental
//! requests can never be handed the same physical instance.

use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::instance::{Instance, InstanceStatus, UpdateInstance},
};

#[derive(Clone)]
pub struct InstancesRepository {
    pool: Pool<Postgres>,
}

impl InstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get instance by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Instance> {
        sqlx::query_as::<_, Instance>("SELECT * FROM publication_instances WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Instance with id {} not found", id)))
    }

    /// Create a new instance
    pub async fn create(
        &self,
        id: Uuid,
        publication_id: Uuid,
        publisher: Option<&str>,
        media_type: Option<&str>,
        status: InstanceStatus,
        year: Option<i32>,
    ) -> AppResult<Instance> {
        let created = sqlx::query_as::<_, Instance>(
            r#"
            INSERT INTO publication_instances (id, publication_id, publisher, type, status, year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(publication_id)
        .bind(publisher)
        .bind(media_type)
        .bind(status.as_str())
        .bind(year)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update to an instance
    pub async fn update(&self, id: Uuid, update: &UpdateInstance) -> AppResult<Instance> {
        sqlx::query_as::<_, Instance>(
            r#"
            UPDATE publication_instances
            SET publisher = COALESCE($2, publisher),
                type = COALESCE($3, type),
                status = COALESCE($4, status),
                year = COALESCE($5, year),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.publisher.as_deref())
        .bind(update.media_type.as_deref())
        .bind(update.status.map(|s| s.as_str()))
        .bind(update.year)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Instance with id {} not found", id)))
    }

    /// Delete an instance
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM publication_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Instance with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Claim one available instance of the publication inside the caller's
    /// transaction. Returns `None` when every instance is taken.
    ///
    /// The row lock makes the select-then-flip a single serializable step:
    /// a contending transaction skips the locked row instead of reading its
    /// pre-claim status, so at most one caller wins each physical copy.
    /// Losers see no remaining candidate and decline immediately.
    ///
    /// Non-physical media keep status `available`: those copies are not
    /// exclusively held and any number of loans may share them.
    pub async fn claim_available(
        &self,
        conn: &mut PgConnection,
        publication_id: Uuid,
    ) -> AppResult<Option<Instance>> {
        let candidate = sqlx::query_as::<_, Instance>(
            r#"
            SELECT * FROM publication_instances
            WHERE publication_id = $1 AND status = 'available'
            ORDER BY created_at
            LIMIT 1
            FOR UPDATE SKIP LOCKED
            "#,
        )
        .bind(publication_id)
        .fetch_optional(&mut *conn)
        .await?;

        match candidate {
            None => Ok(None),
            Some(instance) if instance.is_physical() => {
                let claimed = sqlx::query_as::<_, Instance>(
                    r#"
                    UPDATE publication_instances
                    SET status = 'reserved', updated_at = now()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(instance.id)
                .fetch_one(&mut *conn)
                .await?;
                Ok(Some(claimed))
            }
            Some(instance) => Ok(Some(instance)),
        }
    }
}
