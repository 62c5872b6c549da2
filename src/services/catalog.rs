//! Catalog management service: publications, instances, authors, categories

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        category::{Category, CreateCategory, UpdateCategory},
        instance::{CreateInstance, Instance, UpdateInstance},
        publication::{CreatePublication, Publication, PublicationDetails},
    },
    repository::Repository,
};

fn missing_information() -> AppError {
    AppError::Validation("Missing Required Information".to_string())
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // Publications
    // =========================================================================

    /// Get a publication with authors and categories
    pub async fn get_publication(&self, id: Uuid) -> AppResult<PublicationDetails> {
        self.repository.publications.get_details(id).await
    }

    /// Create a new publication
    pub async fn create_publication(&self, request: CreatePublication) -> AppResult<Publication> {
        let title = request.title.ok_or_else(missing_information)?;
        self.repository
            .publications
            .create(request.id.unwrap_or_else(Uuid::new_v4), &title)
            .await
    }

    /// Delete a publication
    pub async fn delete_publication(&self, id: Uuid) -> AppResult<()> {
        self.repository.publications.delete(id).await
    }

    // =========================================================================
    // Instances
    // =========================================================================

    /// Get an instance
    pub async fn get_instance(&self, id: Uuid) -> AppResult<Instance> {
        self.repository.instances.get_by_id(id).await
    }

    /// Create a new instance of a publication
    pub async fn create_instance(&self, request: CreateInstance) -> AppResult<Instance> {
        let publication_id = request.publication_id.ok_or_else(missing_information)?;

        self.repository
            .instances
            .create(
                request.id.unwrap_or_else(Uuid::new_v4),
                publication_id,
                request.publisher.as_deref(),
                request.media_type.as_deref(),
                request.status.unwrap_or_default(),
                request.year,
            )
            .await
    }

    /// Apply a partial update to an instance
    pub async fn update_instance(&self, id: Uuid, request: UpdateInstance) -> AppResult<Instance> {
        self.repository.instances.update(id, &request).await
    }

    /// Delete an instance
    pub async fn delete_instance(&self, id: Uuid) -> AppResult<()> {
        self.repository.instances.delete(id).await
    }

    // =========================================================================
    // Authors
    // =========================================================================

    /// Get an author
    pub async fn get_author(&self, id: Uuid) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    /// Create a new author
    pub async fn create_author(&self, request: CreateAuthor) -> AppResult<Author> {
        let name = request.name.ok_or_else(missing_information)?;
        let surname = request.surname.ok_or_else(missing_information)?;
        self.repository
            .authors
            .create(request.id.unwrap_or_else(Uuid::new_v4), &name, &surname)
            .await
    }

    /// Apply a partial update to an author
    pub async fn update_author(&self, id: Uuid, request: UpdateAuthor) -> AppResult<Author> {
        self.repository.authors.update(id, &request).await
    }

    /// Delete an author
    pub async fn delete_author(&self, id: Uuid) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Get a category
    pub async fn get_category(&self, id: Uuid) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    /// Create a new category
    pub async fn create_category(&self, request: CreateCategory) -> AppResult<Category> {
        let name = request.name.ok_or_else(missing_information)?;
        self.repository
            .categories
            .create(request.id.unwrap_or_else(Uuid::new_v4), &name)
            .await
    }

    /// Apply a partial update to a category
    pub async fn update_category(&self, id: Uuid, request: UpdateCategory) -> AppResult<Category> {
        self.repository.categories.update(id, &request).await
    }

    /// Delete a category
    pub async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.repository.categories.delete(id).await
    }
}
