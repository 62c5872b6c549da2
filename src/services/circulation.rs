//! Circulation service: the rental state machine.
//!
//! A rental request moves Requested -> Allocated -> Recorded, or stops at
//! Declined when no instance can be claimed. Allocation and loan recording
//! share one database transaction, so a ledger failure after a successful
//! claim rolls the claim back instead of leaving an instance reserved with
//! no loan attached.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::rental::{CreateRental, Loan},
    repository::Repository,
};

/// Outcome of a rental attempt. Transaction faults surface as errors.
#[derive(Debug)]
pub enum RentalOutcome {
    /// An instance was claimed and the loan recorded
    Recorded(Loan),
    /// No instance of the publication is currently available
    Declined,
}

/// A rental request with all required fields present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalIntent {
    pub loan_id: Uuid,
    pub user_id: Uuid,
    pub publication_id: Uuid,
    pub duration: i32,
}

/// Check field presence and duration bounds before touching the store
pub fn validate_rental_request(request: &CreateRental) -> AppResult<RentalIntent> {
    let missing = || AppError::Validation("Missing Required Information".to_string());

    let user_id = request.user_id.ok_or_else(missing)?;
    let publication_id = request.publication_id.ok_or_else(missing)?;
    let duration = request.duration.ok_or_else(missing)?;

    if duration <= 0 {
        return Err(AppError::Validation(
            "Rental duration must be a positive number of days".to_string(),
        ));
    }

    Ok(RentalIntent {
        loan_id: request.id.unwrap_or_else(Uuid::new_v4),
        user_id,
        publication_id,
        duration,
    })
}

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Rent one instance of a publication.
    ///
    /// Claiming and recording run in a single transaction: dropping the
    /// transaction on any error rolls back the claim, and a declined
    /// request writes nothing at all. Resubmitting a recorded request is
    /// not idempotent and claims a further instance if one exists.
    pub async fn rent(&self, request: CreateRental) -> AppResult<RentalOutcome> {
        let intent = validate_rental_request(&request)?;

        let mut tx = self.repository.pool.begin().await?;

        let claimed = self
            .repository
            .instances
            .claim_available(&mut tx, intent.publication_id)
            .await?;

        let instance = match claimed {
            Some(instance) => instance,
            None => {
                tx.rollback().await?;
                tracing::debug!(
                    publication_id = %intent.publication_id,
                    "rental declined: no available instance"
                );
                return Ok(RentalOutcome::Declined);
            }
        };

        let loan = self
            .repository
            .rentals
            .create_in_tx(
                &mut tx,
                intent.loan_id,
                intent.user_id,
                instance.id,
                intent.duration,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            loan_id = %loan.id,
            instance_id = %instance.id,
            user_id = %intent.user_id,
            "rental recorded"
        );

        Ok(RentalOutcome::Recorded(loan))
    }

    /// Get a rental by ID
    pub async fn get_rental(&self, id: Uuid) -> AppResult<Loan> {
        self.repository.rentals.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(duration: Option<i32>) -> CreateRental {
        CreateRental {
            id: None,
            user_id: Some(Uuid::new_v4()),
            publication_id: Some(Uuid::new_v4()),
            duration,
        }
    }

    #[test]
    fn test_valid_request_gets_generated_loan_id() {
        let intent = validate_rental_request(&request(Some(14))).unwrap();
        assert_eq!(intent.duration, 14);
        assert!(!intent.loan_id.is_nil());
    }

    #[test]
    fn test_client_supplied_id_is_kept() {
        let id = Uuid::new_v4();
        let mut req = request(Some(7));
        req.id = Some(id);
        assert_eq!(validate_rental_request(&req).unwrap().loan_id, id);
    }

    #[test]
    fn test_zero_and_negative_durations_rejected() {
        for duration in [0, -3] {
            let err = validate_rental_request(&request(Some(duration))).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(validate_rental_request(&request(None)).is_err());

        let mut req = request(Some(7));
        req.user_id = None;
        assert!(validate_rental_request(&req).is_err());

        let mut req = request(Some(7));
        req.publication_id = None;
        assert!(validate_rental_request(&req).is_err());
    }
}
