use async_trait::async_trait;
use sqlx::SqliteConnection;
use std::sync::Arc;

use crate::{
    domain::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest, WebResponse},
    model::category::Category,
    utils::AppError,
};

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

/// Storage access for categories.
///
/// Every method runs on the connection it is given, so a caller holding a
/// transaction decides what gets committed.
#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(&self, conn: &mut SqliteConnection) -> Result<Vec<Category>, AppError>;
    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i32,
    ) -> Result<Option<Category>, AppError>;
    async fn create(
        &self,
        conn: &mut SqliteConnection,
        input: &CreateCategoryRequest,
    ) -> Result<Category, AppError>;
    async fn update(
        &self,
        conn: &mut SqliteConnection,
        category: &Category,
    ) -> Result<Category, AppError>;
    async fn delete(&self, conn: &mut SqliteConnection, id: i32) -> Result<(), AppError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn get_categories(&self) -> Result<WebResponse<Vec<CategoryResponse>>, AppError>;
    async fn get_category(&self, id: i32) -> Result<WebResponse<CategoryResponse>, AppError>;
    async fn create_category(
        &self,
        input: &CreateCategoryRequest,
    ) -> Result<WebResponse<CategoryResponse>, AppError>;
    async fn update_category(
        &self,
        input: &UpdateCategoryRequest,
    ) -> Result<WebResponse<CategoryResponse>, AppError>;
    async fn delete_category(&self, id: i32) -> Result<WebResponse<()>, AppError>;
}
