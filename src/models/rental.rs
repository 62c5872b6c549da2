//! Loan (rental) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Loan status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Returned => "returned",
            LoanStatus::Overdue => "overdue",
        }
    }
}

/// Loan model from database. Binds a user to one claimed instance for a
/// bounded duration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub publication_instance_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub duration: i32,
    pub status: String,
}

/// Rental request as received over the wire. All fields optional so that
/// missing ones surface as validation errors rather than body rejections.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRental {
    /// Client-supplied id; generated when absent
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub publication_id: Option<Uuid>,
    /// Loan duration in whole days, strictly positive
    pub duration: Option<i32>,
}

/// Due date for a loan opened at `start` (whole-day granularity)
pub fn due_date(start: DateTime<Utc>, duration_days: i32) -> DateTime<Utc> {
    start + Duration::days(i64::from(duration_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_due_date_arithmetic() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            due_date(start, 14),
            Utc.with_ymd_and_hms(2026, 3, 15, 12, 30, 0).unwrap()
        );
        assert_eq!(
            due_date(start, 1),
            Utc.with_ymd_and_hms(2026, 3, 2, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_due_date_crosses_month_boundary() {
        let start = Utc.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap();
        assert_eq!(
            due_date(start, 10),
            Utc.with_ymd_and_hms(2026, 2, 4, 0, 0, 0).unwrap()
        );
    }
}
