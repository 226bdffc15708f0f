use crate::domain::review::entities::Review;
use crate::entity::reviews::{ActiveModel as ReviewActiveModel, Model as ReviewModel};
use sea_orm::ActiveValue::Set;

impl From<&ReviewModel> for Review {
    fn from(model: &ReviewModel) -> Self {
        Review {
            id: model.id,
            username: model.username.clone(),
            rating: model.rating,
            description: model.description.clone(),
            recipe_id: model.recipe_id,
        }
    }
}

pub fn to_active_model(review: &Review) -> ReviewActiveModel {
    ReviewActiveModel {
        id: Set(review.id),
        recipe_id: Set(review.recipe_id),
        username: Set(review.username.clone()),
        rating: Set(review.rating),
        description: Set(review.description.clone()),
    }
}
