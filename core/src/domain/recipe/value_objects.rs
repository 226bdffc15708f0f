use uuid::Uuid;

pub struct IngredientInput {
    pub name: String,
    pub amount: String,
    pub state: Option<String>,
}

pub struct StepInput {
    pub step_number: i32,
    pub description: String,
}

pub struct ReviewInput {
    pub username: String,
    pub rating: i32,
    pub description: Option<String>,
}

pub struct CreateRecipeInput {
    pub name: String,
    pub difficulty_rating: i32,
    pub minutes_to_make: i32,
    pub ingredients: Vec<IngredientInput>,
    pub steps: Vec<StepInput>,
    pub reviews: Vec<ReviewInput>,
}

pub struct UpdateRecipeInput {
    pub id: Uuid,
    pub name: String,
    pub difficulty_rating: i32,
    pub minutes_to_make: i32,
    pub ingredients: Vec<IngredientInput>,
    pub steps: Vec<StepInput>,
    pub reviews: Vec<ReviewInput>,
}
