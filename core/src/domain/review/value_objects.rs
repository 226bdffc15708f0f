use uuid::Uuid;

pub struct PostReviewInput {
    pub recipe_id: Uuid,
    pub username: String,
    pub rating: i32,
    pub description: Option<String>,
}

pub struct UpdateReviewInput {
    pub id: Uuid,
    pub username: String,
    pub rating: i32,
    pub description: Option<String>,
    pub recipe_id: Option<Uuid>,
}
