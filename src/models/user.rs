//! User (library member) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::rental::Loan;
use super::reservation::Reservation;

/// User model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub personal_identificator: Option<String>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User with their circulation activity attached.
/// The rentals/reservations keys are omitted entirely when the user has none.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rentals: Option<Vec<Loan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub personal_identificator: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// Birth date in YYYY-MM-DD format
    pub birth_date: Option<String>,
}

/// Update user request (enumerated updatable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub personal_identificator: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// Birth date in YYYY-MM-DD format
    pub birth_date: Option<String>,
}

/// Validated partial update ready to apply
#[derive(Debug, Default)]
pub struct UserChanges {
    pub personal_identificator: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Fully validated user row ready for insertion
#[derive(Debug)]
pub struct NewUser {
    pub id: Uuid,
    pub personal_identificator: Option<String>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birth_date: NaiveDate,
}
