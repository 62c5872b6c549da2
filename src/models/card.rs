//! Membership card model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Card lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Inactive,
    Expired,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Active => "active",
            CardStatus::Inactive => "inactive",
            CardStatus::Expired => "expired",
        }
    }
}

impl Default for CardStatus {
    fn default() -> Self {
        CardStatus::Inactive
    }
}

/// Card model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Card {
    pub id: Uuid,
    pub user_id: Uuid,
    pub magstripe: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create card request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCard {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub magstripe: Option<String>,
    pub status: Option<CardStatus>,
}

/// Update card request (enumerated updatable fields)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCard {
    pub magstripe: Option<String>,
    pub status: Option<CardStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CardStatus::Active.as_str(), "active");
        assert_eq!(CardStatus::default().as_str(), "inactive");
    }
}
