use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserMetaPayload {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    /// Optional at the transport layer; the service rejects missing and
    /// too-short passwords with its own messages.
    #[serde(default)]
    pub password: Option<String>,

    pub user_meta: UserMetaPayload,
}
