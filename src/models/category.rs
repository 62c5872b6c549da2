//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Category model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

/// Update category request (enumerated updatable fields)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub name: Option<String>,
}
