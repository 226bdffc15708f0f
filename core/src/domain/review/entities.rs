use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

/// A review is tied to its author by username text, not by a foreign key to
/// the user table. Loose on purpose; ownership checks compare the string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub username: String,
    pub rating: i32,
    pub description: Option<String>,
    pub recipe_id: Option<Uuid>,
}

impl Review {
    pub fn new(
        username: String,
        rating: i32,
        description: Option<String>,
        recipe_id: Option<Uuid>,
    ) -> Result<Self, CoreError> {
        let mut review = Self {
            id: generate_uuid_v7(),
            username,
            rating: 0,
            description,
            recipe_id,
        };
        review.set_rating(rating)?;
        Ok(review)
    }

    /// Ratings live in (0, 10]. The bound is enforced here and nowhere else;
    /// updates that bypass construction are trusted.
    pub fn set_rating(&mut self, rating: i32) -> Result<(), CoreError> {
        if rating <= 0 || rating > 10 {
            return Err(CoreError::InvalidState(
                "Rating must be between 0 and 10.".to_string(),
            ));
        }
        self.rating = rating;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_zero_is_rejected() {
        let result = Review::new("idk".to_string(), 0, None, None);
        assert_eq!(
            result.unwrap_err(),
            CoreError::InvalidState("Rating must be between 0 and 10.".to_string())
        );
    }

    #[test]
    fn rating_ten_is_accepted() {
        let review = Review::new("idk".to_string(), 10, None, None).unwrap();
        assert_eq!(review.rating, 10);
    }

    #[test]
    fn rating_eleven_is_rejected() {
        let result = Review::new("idk".to_string(), 11, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn negative_ratings_are_rejected() {
        let result = Review::new("idk".to_string(), -3, None, None);
        assert!(result.is_err());
    }
}
