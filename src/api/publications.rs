//! Publication endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::publication::{CreatePublication, Publication, PublicationDetails},
};

/// Get a publication with its authors and categories
#[utoipa::path(
    get,
    path = "/publications/{id}",
    tag = "publications",
    params(
        ("id" = Uuid, Path, description = "Publication ID")
    ),
    responses(
        (status = 200, description = "Publication found", body = PublicationDetails),
        (status = 404, description = "Publication not found")
    )
)]
pub async fn get_publication(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PublicationDetails>> {
    let publication = state.services.catalog.get_publication(id).await?;
    Ok(Json(publication))
}

/// Create a new publication
#[utoipa::path(
    post,
    path = "/publications",
    tag = "publications",
    request_body = CreatePublication,
    responses(
        (status = 201, description = "Publication created", body = Publication),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_publication(
    State(state): State<crate::AppState>,
    Json(request): Json<CreatePublication>,
) -> AppResult<(StatusCode, Json<Publication>)> {
    let publication = state.services.catalog.create_publication(request).await?;
    Ok((StatusCode::CREATED, Json(publication)))
}

/// Delete a publication
#[utoipa::path(
    delete,
    path = "/publications/{id}",
    tag = "publications",
    params(
        ("id" = Uuid, Path, description = "Publication ID")
    ),
    responses(
        (status = 204, description = "Publication deleted"),
        (status = 404, description = "Publication not found")
    )
)]
pub async fn delete_publication(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_publication(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
