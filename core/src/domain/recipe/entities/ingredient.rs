use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Owned exclusively by one recipe's ingredient set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub amount: String,
    /// Optional descriptor such as "dry" or "melted".
    pub state: Option<String>,
}

impl Ingredient {
    pub fn new(name: String, amount: String, state: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            amount,
            state,
        }
    }
}
