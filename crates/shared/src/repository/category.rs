use crate::abstract_trait::CategoryRepositoryTrait;
use crate::domain::CreateCategoryRequest;
use crate::model::category::Category;
use crate::schema::category::Categories;
use crate::utils::AppError;
use async_trait::async_trait;
use sea_query::{Expr, Order, Query, SqliteQueryBuilder};
use sea_query_binder::SqlxBinder;
use sqlx::SqliteConnection;
use tracing::{error, info};

#[derive(Debug, Default, Clone)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self, conn: &mut SqliteConnection) -> Result<Vec<Category>, AppError> {
        info!("Getting all categories");

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Name])
            .from(Categories::Table)
            .order_by(Categories::Id, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let categories = match sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&mut *conn)
            .await
        {
            Ok(categories) => categories,
            Err(e) => {
                error!("Error fetching categories: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        info!("Found {} categories", categories.len());

        Ok(categories)
    }

    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i32,
    ) -> Result<Option<Category>, AppError> {
        info!("Finding category by id: {id}");

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Name])
            .from(Categories::Table)
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&mut *conn)
            .await?;

        info!("Find result: {:?}", result);
        Ok(result)
    }

    async fn create(
        &self,
        conn: &mut SqliteConnection,
        input: &CreateCategoryRequest,
    ) -> Result<Category, AppError> {
        info!("Creating new category: {:?}", input.name);

        let (sql, values) = Query::insert()
            .into_table(Categories::Table)
            .columns([Categories::Name])
            .values_panic([input.name.clone().into()])
            .returning(Query::returning().columns([Categories::Id, Categories::Name]))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_one(&mut *conn)
            .await?;

        info!("New category inserted with ID: {}", result.id);

        Ok(result)
    }

    async fn update(
        &self,
        conn: &mut SqliteConnection,
        category: &Category,
    ) -> Result<Category, AppError> {
        info!(
            "Updating category ID {} with new name '{}'",
            category.id, category.name
        );

        let (sql, values) = Query::update()
            .table(Categories::Table)
            .values([(Categories::Name, Expr::val(category.name.clone()).into())])
            .and_where(Expr::col(Categories::Id).eq(category.id))
            .build_sqlx(SqliteQueryBuilder);

        let affected = sqlx::query_with(&sql, values)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if affected == 0 {
            error!("Category ID {} not found for update", category.id);
            return Err(AppError::NotFound("category is not found".to_string()));
        }

        info!("Successfully updated category ID {}", category.id);
        Ok(category.clone())
    }

    async fn delete(&self, conn: &mut SqliteConnection, id: i32) -> Result<(), AppError> {
        info!("Deleting category with ID: {id}");

        let (sql, values) = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        match result.rows_affected() {
            0 => {
                error!("No category found to delete with ID: {id}");
                Err(AppError::NotFound("category is not found".to_string()))
            }
            _ => {
                info!("Category ID: {id} deleted successfully");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionManager;

    fn request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let repository = CategoryRepository::new();

        let gadget = repository.create(&mut conn, &request("Gadget")).await.unwrap();
        let laptop = repository.create(&mut conn, &request("Laptop")).await.unwrap();

        assert_eq!(gadget.name, "Gadget");
        assert!(laptop.id > gadget.id);
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let repository = CategoryRepository::new();

        assert!(repository.find_all(&mut conn).await.unwrap().is_empty());

        let gadget = repository.create(&mut conn, &request("Gadget")).await.unwrap();
        let laptop = repository.create(&mut conn, &request("Laptop")).await.unwrap();

        let all = repository.find_all(&mut conn).await.unwrap();

        assert_eq!(all, vec![gadget, laptop]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let found = CategoryRepository::new()
            .find_by_id(&mut conn, 404)
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn update_changes_name_only() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let repository = CategoryRepository::new();

        let mut category = repository.create(&mut conn, &request("Gadget")).await.unwrap();
        category.name = "Fashion".to_string();

        repository.update(&mut conn, &category).await.unwrap();

        let stored = repository
            .find_by_id(&mut conn, category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, category);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let repository = CategoryRepository::new();

        let missing = Category {
            id: 404,
            name: "Ghost".to_string(),
        };

        assert!(matches!(
            repository.update(&mut conn, &missing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repository.delete(&mut conn, 404).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = ConnectionManager::new_in_memory_pool().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let repository = CategoryRepository::new();

        let category = repository.create(&mut conn, &request("Gadget")).await.unwrap();
        repository.delete(&mut conn, category.id).await.unwrap();

        assert_eq!(
            repository.find_by_id(&mut conn, category.id).await.unwrap(),
            None
        );
    }
}
