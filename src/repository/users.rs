//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        rental::Loan,
        reservation::Reservation,
        user::{NewUser, User, UserChanges, UserDetails},
    },
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by ID with their rentals and reservations attached
    pub async fn get_details(&self, id: Uuid) -> AppResult<UserDetails> {
        let user = self.get_by_id(id).await?;

        let rentals = sqlx::query_as::<_, Loan>(
            "SELECT * FROM publication_loans WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(UserDetails {
            user,
            rentals: if rentals.is_empty() { None } else { Some(rentals) },
            reservations: if reservations.is_empty() {
                None
            } else {
                Some(reservations)
            },
        })
    }

    /// Check if email already exists
    pub async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a new user
    pub async fn create(&self, user: &NewUser) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, personal_identificator, name, surname, email, birth_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(user.personal_identificator.as_deref())
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(user.birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update to a user
    pub async fn update(&self, id: Uuid, changes: &UserChanges) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET personal_identificator = COALESCE($2, personal_identificator),
                name = COALESCE($3, name),
                surname = COALESCE($4, surname),
                email = COALESCE($5, email),
                birth_date = COALESCE($6, birth_date),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.personal_identificator.as_deref())
        .bind(changes.name.as_deref())
        .bind(changes.surname.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.birth_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }
}
