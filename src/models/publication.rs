//! Publication (title) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Publication model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author name pair as shown on a publication
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorName {
    pub name: String,
    pub surname: String,
}

/// Publication with its authors and categories aggregated from the
/// catalog relations
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicationDetails {
    #[serde(flatten)]
    pub publication: Publication,
    pub authors: Vec<AuthorName>,
    pub categories: Vec<String>,
}

/// Create publication request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublication {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub title: Option<String>,
}
