use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct UpdateCategoryRequest {
    /// Taken from the request path, never from the body.
    #[serde(skip)]
    pub id: i32,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}
