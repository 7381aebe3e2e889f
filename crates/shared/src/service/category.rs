use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    config::ConnectionPool,
    domain::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest, WebResponse},
    model::category::Category,
    utils::{AppError, Method, Metrics, Status},
};
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

fn category_not_found() -> AppError {
    AppError::NotFound("category is not found".to_string())
}

/// Commits on success and rolls back on every other outcome.
///
/// A transaction dropped without reaching this point (for example by a
/// panicking handler) is rolled back by sqlx.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!("Failed to roll back transaction: {rollback_err}");
            }
            Err(err)
        }
    }
}

#[derive(Clone)]
pub struct CategoryService {
    pool: ConnectionPool,
    repository: DynCategoryRepository,
    metrics: Metrics,
}

impl std::fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryService")
            .field("repository", &"DynCategoryRepository")
            .finish()
    }
}

impl CategoryService {
    pub fn new(pool: ConnectionPool, repository: DynCategoryRepository, metrics: Metrics) -> Self {
        Self {
            pool,
            repository,
            metrics,
        }
    }

    fn complete_operation<T>(
        &self,
        operation: &str,
        method: Method,
        started: Instant,
        result: &Result<T, AppError>,
    ) {
        let elapsed = started.elapsed().as_secs_f64();

        let status = match result {
            Ok(_) => {
                info!("{operation} completed successfully");
                Status::Success
            }
            Err(err) => {
                error!("{operation} failed: {err}");
                Status::Error
            }
        };

        self.metrics.record(method, status, elapsed);
    }

    /// Writers take the write lock up front so concurrent writers queue on
    /// the busy timeout instead of failing a lock upgrade.
    async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, AppError> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    async fn list_in_tx(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = self.repository.find_all(&mut *tx).await;
        let categories = finish(tx, result).await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn get_in_tx(&self, id: i32) -> Result<CategoryResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = self
            .repository
            .find_by_id(&mut *tx, id)
            .await
            .and_then(|found| found.ok_or_else(category_not_found));
        let category = finish(tx, result).await?;

        Ok(CategoryResponse::from(category))
    }

    async fn create_in_tx(
        &self,
        input: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        input.validate()?;

        let mut tx = self.begin_write().await?;

        let result = self.repository.create(&mut *tx, input).await;
        let category = finish(tx, result).await?;

        Ok(CategoryResponse::from(category))
    }

    async fn update_in_tx(
        &self,
        input: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        input.validate()?;

        let mut tx = self.begin_write().await?;

        let result: Result<Category, AppError> = async {
            let mut category = self
                .repository
                .find_by_id(&mut *tx, input.id)
                .await?
                .ok_or_else(category_not_found)?;

            category.name = input.name.clone();

            self.repository.update(&mut *tx, &category).await
        }
        .await;
        let category = finish(tx, result).await?;

        Ok(CategoryResponse::from(category))
    }

    async fn delete_in_tx(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.begin_write().await?;

        let result: Result<(), AppError> = async {
            let category = self
                .repository
                .find_by_id(&mut *tx, id)
                .await?
                .ok_or_else(category_not_found)?;

            self.repository.delete(&mut *tx, category.id).await
        }
        .await;

        finish(tx, result).await
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self) -> Result<WebResponse<Vec<CategoryResponse>>, AppError> {
        let started = Instant::now();

        let result = self.list_in_tx().await;
        self.complete_operation("GetCategories", Method::Get, started, &result);

        result.map(WebResponse::ok)
    }

    async fn get_category(&self, id: i32) -> Result<WebResponse<CategoryResponse>, AppError> {
        let started = Instant::now();

        let result = self.get_in_tx(id).await;
        self.complete_operation("GetCategory", Method::Get, started, &result);

        result.map(WebResponse::ok)
    }

    async fn create_category(
        &self,
        input: &CreateCategoryRequest,
    ) -> Result<WebResponse<CategoryResponse>, AppError> {
        let started = Instant::now();

        let result = self.create_in_tx(input).await;
        self.complete_operation("CreateCategory", Method::Post, started, &result);

        result.map(WebResponse::ok)
    }

    async fn update_category(
        &self,
        input: &UpdateCategoryRequest,
    ) -> Result<WebResponse<CategoryResponse>, AppError> {
        let started = Instant::now();

        let result = self.update_in_tx(input).await;
        self.complete_operation("UpdateCategory", Method::Put, started, &result);

        result.map(WebResponse::ok)
    }

    async fn delete_category(&self, id: i32) -> Result<WebResponse<()>, AppError> {
        let started = Instant::now();

        let result = self.delete_in_tx(id).await;
        self.complete_operation("DeleteCategory", Method::Delete, started, &result);

        result.map(WebResponse::ok)
    }
}
