use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostReviewValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    pub rating: i32,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewValidator {
    pub id: Uuid,

    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    pub rating: i32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub recipe_id: Option<Uuid>,
}
