//! API handlers for Atheneum REST endpoints

pub mod authors;
pub mod cards;
pub mod categories;
pub mod health;
pub mod instances;
pub mod openapi;
pub mod publications;
pub mod rentals;
pub mod reservations;
pub mod users;
