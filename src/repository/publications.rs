//! Publications repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::publication::{AuthorName, Publication, PublicationDetails},
};

#[derive(Clone)]
pub struct PublicationsRepository {
    pool: Pool<Postgres>,
}

impl PublicationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get publication by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Publication> {
        sqlx::query_as::<_, Publication>("SELECT * FROM publications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publication with id {} not found", id)))
    }

    /// Get publication by ID with authors and categories aggregated
    pub async fn get_details(&self, id: Uuid) -> AppResult<PublicationDetails> {
        let publication = self.get_by_id(id).await?;

        let authors = sqlx::query_as::<_, AuthorName>(
            r#"
            SELECT a.name, a.surname
            FROM authors a
            JOIN publication_authors pa ON pa.author_id = a.id
            WHERE pa.publication_id = $1
            ORDER BY a.surname, a.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let categories = sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.name
            FROM categories c
            JOIN publication_categories pc ON pc.category_id = c.id
            WHERE pc.publication_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(PublicationDetails {
            publication,
            authors,
            categories,
        })
    }

    /// Create a new publication
    pub async fn create(&self, id: Uuid, title: &str) -> AppResult<Publication> {
        let created = sqlx::query_as::<_, Publication>(
            r#"
            INSERT INTO publications (id, title, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a publication
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Publication with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
