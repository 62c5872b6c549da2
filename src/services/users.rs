//! User and card management service

use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        card::{Card, CreateCard, UpdateCard},
        user::{CreateUser, NewUser, UpdateUser, User, UserChanges, UserDetails},
    },
    repository::Repository,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn missing_information() -> AppError {
    AppError::Validation("Missing Required Information".to_string())
}

fn parse_birth_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AppError::Validation("Invalid date format for birth_date field".to_string()))
}

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a user with their rentals and reservations
    pub async fn get_user(&self, id: Uuid) -> AppResult<UserDetails> {
        self.repository.users.get_details(id).await
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUser) -> AppResult<User> {
        request.validate().map_err(|_| missing_information())?;

        let name = request.name.ok_or_else(missing_information)?;
        let surname = request.surname.ok_or_else(missing_information)?;
        let email = request.email.ok_or_else(missing_information)?;
        let birth_date = parse_birth_date(&request.birth_date.ok_or_else(missing_information)?)?;

        if self.repository.users.email_exists(&email, None).await? {
            return Err(AppError::Conflict("Email Already Taken".to_string()));
        }

        self.repository
            .users
            .create(&NewUser {
                id: request.id.unwrap_or_else(Uuid::new_v4),
                personal_identificator: request.personal_identificator,
                name,
                surname,
                email,
                birth_date,
            })
            .await
    }

    /// Apply a partial update to a user
    pub async fn update_user(&self, id: Uuid, request: UpdateUser) -> AppResult<User> {
        request.validate().map_err(|_| missing_information())?;

        if let Some(ref email) = request.email {
            if self.repository.users.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict("Email Already Taken".to_string()));
            }
        }

        let birth_date = match request.birth_date {
            Some(ref raw) => Some(parse_birth_date(raw)?),
            None => None,
        };

        self.repository
            .users
            .update(
                id,
                &UserChanges {
                    personal_identificator: request.personal_identificator,
                    name: request.name,
                    surname: request.surname,
                    email: request.email,
                    birth_date,
                },
            )
            .await
    }

    /// Get a card
    pub async fn get_card(&self, id: Uuid) -> AppResult<Card> {
        self.repository.cards.get_by_id(id).await
    }

    /// Create a new card for a user
    pub async fn create_card(&self, request: CreateCard) -> AppResult<Card> {
        let user_id = request.user_id.ok_or_else(missing_information)?;
        let magstripe = request.magstripe.ok_or_else(missing_information)?;

        self.repository
            .cards
            .create(
                request.id.unwrap_or_else(Uuid::new_v4),
                user_id,
                &magstripe,
                request.status.unwrap_or_default(),
            )
            .await
    }

    /// Apply a partial update to a card
    pub async fn update_card(&self, id: Uuid, request: UpdateCard) -> AppResult<Card> {
        self.repository.cards.update(id, &request).await
    }

    /// Delete a card
    pub async fn delete_card(&self, id: Uuid) -> AppResult<()> {
        self.repository.cards.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("1994-05-17").unwrap(),
            NaiveDate::from_ymd_opt(1994, 5, 17).unwrap()
        );
        assert!(parse_birth_date("17.05.1994").is_err());
        assert!(parse_birth_date("not-a-date").is_err());
    }
}
