//! Publication instance (copy) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Medium type code for exclusively-held copies. Any other medium
/// (digital, audio, ...) is never locked by a loan.
pub const MEDIUM_PHYSICAL: &str = "physical";

/// Instance lifecycle status. Status is the only field touched by the
/// circulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Available,
    Reserved,
    Loaned,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "available",
            InstanceStatus::Reserved => "reserved",
            InstanceStatus::Loaned => "loaned",
        }
    }
}

impl Default for InstanceStatus {
    fn default() -> Self {
        InstanceStatus::Available
    }
}

/// Instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Instance {
    pub id: Uuid,
    pub publication_id: Uuid,
    pub publisher: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub status: String,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Instance {
    /// Whether this copy is exclusively held while loaned
    pub fn is_physical(&self) -> bool {
        self.media_type.as_deref() == Some(MEDIUM_PHYSICAL)
    }
}

/// Create instance request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInstance {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub publication_id: Option<Uuid>,
    pub publisher: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub status: Option<InstanceStatus>,
    pub year: Option<i32>,
}

/// Update instance request (enumerated updatable fields)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInstance {
    pub publisher: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub status: Option<InstanceStatus>,
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(media_type: Option<&str>) -> Instance {
        Instance {
            id: Uuid::new_v4(),
            publication_id: Uuid::new_v4(),
            publisher: None,
            media_type: media_type.map(String::from),
            status: InstanceStatus::Available.as_str().to_string(),
            year: Some(2021),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_physical_detection() {
        assert!(instance(Some("physical")).is_physical());
        assert!(!instance(Some("digital")).is_physical());
        assert!(!instance(None).is_physical());
    }

    #[test]
    fn test_status_serde_codes() {
        let json = serde_json::to_string(&InstanceStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
        let status: InstanceStatus = serde_json::from_str("\"reserved\"").unwrap();
        assert_eq!(status, InstanceStatus::Reserved);
    }
}
