//! Category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory, UpdateCategory},
};

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.get_category(id).await?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Category already exists")
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.services.catalog.create_category(request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.update_category(id, request).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
