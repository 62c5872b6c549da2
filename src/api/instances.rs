//! Publication instance endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::instance::{CreateInstance, Instance, UpdateInstance},
};

/// Get an instance by ID
#[utoipa::path(
    get,
    path = "/instances/{id}",
    tag = "instances",
    params(
        ("id" = Uuid, Path, description = "Instance ID")
    ),
    responses(
        (status = 200, description = "Instance found", body = Instance),
        (status = 404, description = "Instance not found")
    )
)]
pub async fn get_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Instance>> {
    let instance = state.services.catalog.get_instance(id).await?;
    Ok(Json(instance))
}

/// Create a new instance of a publication
#[utoipa::path(
    post,
    path = "/instances",
    tag = "instances",
    request_body = CreateInstance,
    responses(
        (status = 201, description = "Instance created", body = Instance),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_instance(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateInstance>,
) -> AppResult<(StatusCode, Json<Instance>)> {
    let instance = state.services.catalog.create_instance(request).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// Update an instance
#[utoipa::path(
    patch,
    path = "/instances/{id}",
    tag = "instances",
    params(
        ("id" = Uuid, Path, description = "Instance ID")
    ),
    request_body = UpdateInstance,
    responses(
        (status = 200, description = "Instance updated", body = Instance),
        (status = 404, description = "Instance not found")
    )
)]
pub async fn update_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInstance>,
) -> AppResult<Json<Instance>> {
    let instance = state.services.catalog.update_instance(id, request).await?;
    Ok(Json(instance))
}

/// Delete an instance
#[utoipa::path(
    delete,
    path = "/instances/{id}",
    tag = "instances",
    params(
        ("id" = Uuid, Path, description = "Instance ID")
    ),
    responses(
        (status = 204, description = "Instance deleted"),
        (status = 404, description = "Instance not found")
    )
)]
pub async fn delete_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_instance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
