use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use ladle_core::domain::recipe::value_objects::{
    CreateRecipeInput, IngredientInput, ReviewInput, StepInput, UpdateRecipeInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngredientPayload {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepPayload {
    pub step_number: i32,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewPayload {
    pub username: String,
    pub rating: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Every field is defaulted so an empty JSON object deserializes; structural
/// completeness is the service's call, not the transport's.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeValidator {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub difficulty_rating: i32,

    #[serde(default)]
    pub minutes_to_make: i32,

    #[serde(default)]
    pub ingredients: Vec<IngredientPayload>,

    #[serde(default)]
    pub steps: Vec<StepPayload>,

    #[serde(default)]
    pub reviews: Vec<ReviewPayload>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeValidator {
    pub id: Uuid,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub difficulty_rating: i32,

    #[serde(default)]
    pub minutes_to_make: i32,

    #[serde(default)]
    pub ingredients: Vec<IngredientPayload>,

    #[serde(default)]
    pub steps: Vec<StepPayload>,

    #[serde(default)]
    pub reviews: Vec<ReviewPayload>,
}

fn ingredient_inputs(ingredients: Vec<IngredientPayload>) -> Vec<IngredientInput> {
    ingredients
        .into_iter()
        .map(|ingredient| IngredientInput {
            name: ingredient.name,
            amount: ingredient.amount,
            state: ingredient.state,
        })
        .collect()
}

fn step_inputs(steps: Vec<StepPayload>) -> Vec<StepInput> {
    steps
        .into_iter()
        .map(|step| StepInput {
            step_number: step.step_number,
            description: step.description,
        })
        .collect()
}

fn review_inputs(reviews: Vec<ReviewPayload>) -> Vec<ReviewInput> {
    reviews
        .into_iter()
        .map(|review| ReviewInput {
            username: review.username,
            rating: review.rating,
            description: review.description,
        })
        .collect()
}

impl From<CreateRecipeValidator> for CreateRecipeInput {
    fn from(payload: CreateRecipeValidator) -> Self {
        CreateRecipeInput {
            name: payload.name,
            difficulty_rating: payload.difficulty_rating,
            minutes_to_make: payload.minutes_to_make,
            ingredients: ingredient_inputs(payload.ingredients),
            steps: step_inputs(payload.steps),
            reviews: review_inputs(payload.reviews),
        }
    }
}

impl From<UpdateRecipeValidator> for UpdateRecipeInput {
    fn from(payload: UpdateRecipeValidator) -> Self {
        UpdateRecipeInput {
            id: payload.id,
            name: payload.name,
            difficulty_rating: payload.difficulty_rating,
            minutes_to_make: payload.minutes_to_make,
            ingredients: ingredient_inputs(payload.ingredients),
            steps: step_inputs(payload.steps),
            reviews: review_inputs(payload.reviews),
        }
    }
}
