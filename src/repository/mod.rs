//! Repository layer for database operations

pub mod authors;
pub mod cards;
pub mod categories;
pub mod instances;
pub mod publications;
pub mod rentals;
pub mod reservations;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub cards: cards::CardsRepository,
    pub publications: publications::PublicationsRepository,
    pub authors: authors::AuthorsRepository,
    pub categories: categories::CategoriesRepository,
    pub instances: instances::InstancesRepository,
    pub rentals: rentals::RentalsRepository,
    pub reservations: reservations::ReservationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            cards: cards::CardsRepository::new(pool.clone()),
            publications: publications::PublicationsRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            instances: instances::InstancesRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            pool,
        }
    }
}
