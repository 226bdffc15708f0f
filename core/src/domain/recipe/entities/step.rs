use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// One instruction in a recipe. `step_number` drives display order; nothing
/// enforces its uniqueness within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: Uuid,
    pub step_number: i32,
    pub description: String,
}

impl Step {
    pub fn new(step_number: i32, description: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            step_number,
            description,
        }
    }
}
