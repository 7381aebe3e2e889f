use crate::middleware::extract::{JsonBody, PathParam};
use axum::{extract::State, routing::get};
use shared::{
    domain::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest, WebResponse},
    state::AppState,
    utils::AppError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories ordered by id", body = WebResponse<Vec<CategoryResponse>>),
        (status = 401, description = "Missing or invalid API key", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = serde_json::Value)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "category"
)]
pub async fn get_categories(
    State(data): State<Arc<AppState>>,
) -> Result<WebResponse<Vec<CategoryResponse>>, AppError> {
    data.di_container.category_service.get_categories().await
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category details", body = WebResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = serde_json::Value)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "category"
)]
pub async fn get_category(
    State(data): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    data.di_container.category_service.get_category(id).await
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Create category", body = WebResponse<CategoryResponse>),
        (status = 400, description = "Empty name or malformed body", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = serde_json::Value)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "category"
)]
pub async fn create_category(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateCategoryRequest>,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    data.di_container
        .category_service
        .create_category(&body)
        .await
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Update category", body = WebResponse<CategoryResponse>),
        (status = 400, description = "Empty name or malformed body", body = serde_json::Value),
        (status = 404, description = "Category not found", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = serde_json::Value)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "category"
)]
pub async fn update_category(
    State(data): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
    JsonBody(mut body): JsonBody<UpdateCategoryRequest>,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    body.id = id;

    data.di_container
        .category_service
        .update_category(&body)
        .await
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Delete category", body = serde_json::Value),
        (status = 404, description = "Category not found", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = serde_json::Value)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "category"
)]
pub async fn delete_category(
    State(data): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
) -> Result<WebResponse<()>, AppError> {
    data.di_container.category_service.delete_category(id).await
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/categories",
            get(get_categories).post(create_category),
        )
        .route(
            "/api/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(app_state)
}
