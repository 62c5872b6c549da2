//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, cards, categories, health, instances, publications, rentals, reservations, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atheneum API",
        version = "0.3.0",
        description = "Library Circulation System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::get_user,
        users::create_user,
        users::update_user,
        // Cards
        cards::get_card,
        cards::create_card,
        cards::update_card,
        cards::delete_card,
        // Publications
        publications::get_publication,
        publications::create_publication,
        publications::delete_publication,
        // Instances
        instances::get_instance,
        instances::create_instance,
        instances::update_instance,
        instances::delete_instance,
        // Authors
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Categories
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Rentals
        rentals::create_rental,
        rentals::get_rental,
        // Reservations
        reservations::create_reservation,
        reservations::get_reservation,
        reservations::delete_reservation,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::UserDetails,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Cards
            crate::models::card::Card,
            crate::models::card::CardStatus,
            crate::models::card::CreateCard,
            crate::models::card::UpdateCard,
            // Publications
            crate::models::publication::Publication,
            crate::models::publication::PublicationDetails,
            crate::models::publication::AuthorName,
            crate::models::publication::CreatePublication,
            // Instances
            crate::models::instance::Instance,
            crate::models::instance::InstanceStatus,
            crate::models::instance::CreateInstance,
            crate::models::instance::UpdateInstance,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            // Rentals
            crate::models::rental::Loan,
            crate::models::rental::LoanStatus,
            crate::models::rental::CreateRental,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::CreateReservation,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "cards", description = "Membership card management"),
        (name = "publications", description = "Publication catalog"),
        (name = "instances", description = "Publication instances"),
        (name = "authors", description = "Author records"),
        (name = "categories", description = "Category records"),
        (name = "rentals", description = "Circulation: loans"),
        (name = "reservations", description = "Circulation: reservations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
