//! Reservation model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Reservation model from database. Expresses interest in a publication;
/// never bound to a specific instance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub publication_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Create reservation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub publication_id: Option<Uuid>,
}
