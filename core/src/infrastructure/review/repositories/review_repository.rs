use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    review::{entities::Review, ports::ReviewRepository},
};
use crate::entity::reviews::{Column as ReviewColumn, Entity as ReviewEntity};
use crate::infrastructure::review::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresReviewRepository {
    pub db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReviewRepository for PostgresReviewRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Review>, CoreError> {
        let review = ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get review by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(|model| Review::from(&model));

        Ok(review)
    }

    async fn find_by_username(&self, username: String) -> Result<Vec<Review>, CoreError> {
        let reviews = ReviewEntity::find()
            .filter(ReviewColumn::Username.eq(username))
            .order_by_asc(ReviewColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch reviews by username: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Review::from)
            .collect();

        Ok(reviews)
    }

    async fn save(&self, review: Review) -> Result<Review, CoreError> {
        let exists = ReviewEntity::find_by_id(review.id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up review before save: {}", e);
                CoreError::InvalidState(e.to_string())
            })?
            .is_some();

        let model = to_active_model(&review);

        let result = if exists {
            ReviewEntity::update(model)
                .filter(ReviewColumn::Id.eq(review.id))
                .exec(&self.db)
                .await
                .map(|_| ())
        } else {
            ReviewEntity::insert(model).exec(&self.db).await.map(|_| ())
        };
        result.map_err(|e| {
            error!("Failed to save review: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        Ok(review)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        ReviewEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete review: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;

        Ok(())
    }
}
