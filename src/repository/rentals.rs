//! Rentals repository: the loan ledger.

use chrono::Utc;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::rental::{due_date, Loan, LoanStatus},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM publication_loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))
    }

    /// Record a loan for a previously claimed instance inside the caller's
    /// transaction. Eligibility of the instance is the allocator's concern;
    /// the ledger trusts the id it is given.
    pub async fn create_in_tx(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        user_id: Uuid,
        instance_id: Uuid,
        duration: i32,
    ) -> AppResult<Loan> {
        let now = Utc::now();
        let due_at = due_date(now, duration);

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO publication_loans (id, user_id, publication_instance_id, created_at, due_at, duration, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(instance_id)
        .bind(now)
        .bind(due_at)
        .bind(duration)
        .bind(LoanStatus::Active.as_str())
        .fetch_one(&mut *conn)
        .await?;

        Ok(loan)
    }
}
