//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

/// Update author request (enumerated updatable fields)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub surname: Option<String>,
}
