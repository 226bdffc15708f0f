use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::common::generate_uuid_v7;
use crate::domain::recipe::entities::{ingredient::Ingredient, step::Step};
use crate::domain::review::entities::Review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub difficulty_rating: i32,
    pub minutes_to_make: i32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub reviews: Vec<Review>,
    /// Floor of the review-rating mean. Derived on read, never authoritative
    /// on its own.
    pub average_review_score: Option<i64>,
    /// Canonical resource location, `<base>/recipes/<id>`. Derived.
    pub location: Option<String>,
    pub author_id: Option<Uuid>,
}

pub struct RecipeConfig {
    pub name: String,
    pub difficulty_rating: i32,
    pub minutes_to_make: i32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub reviews: Vec<Review>,
    pub author_id: Option<Uuid>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: config.name,
            difficulty_rating: config.difficulty_rating,
            minutes_to_make: config.minutes_to_make,
            ingredients: config.ingredients,
            steps: config.steps,
            reviews: config.reviews,
            average_review_score: None,
            location: None,
            author_id: config.author_id,
        }
    }

    /// Structural completeness check. A recipe never reaches the store
    /// without at least one ingredient and one step.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.ingredients.is_empty() {
            return Err(CoreError::InvalidState(
                "A recipe must have at least one ingredient.".to_string(),
            ));
        }
        if self.steps.is_empty() {
            return Err(CoreError::InvalidState(
                "A recipe must have at least one step.".to_string(),
            ));
        }
        Ok(())
    }

    /// Recomputes the average review score; left unset when there are no
    /// reviews. Integer floor, matching what callers see in responses.
    pub fn compute_average_review_score(&mut self) {
        if self.reviews.is_empty() {
            return;
        }

        let ratings_sum: i64 = self.reviews.iter().map(|review| review.rating as i64).sum();
        self.average_review_score = Some(ratings_sum / self.reviews.len() as i64);
    }

    pub fn generate_location(&mut self, base: &str) {
        self.location = Some(format!("{}/recipes/{}", base, self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with(ingredients: Vec<Ingredient>, steps: Vec<Step>) -> Recipe {
        Recipe::new(RecipeConfig {
            name: "caramel in a pan".to_string(),
            difficulty_rating: 10,
            minutes_to_make: 2,
            ingredients,
            steps,
            reviews: vec![],
            author_id: None,
        })
    }

    #[test]
    fn validation_fails_without_ingredients() {
        let recipe = recipe_with(vec![], vec![Step::new(1, "heat pan".to_string())]);

        assert_eq!(
            recipe.validate(),
            Err(CoreError::InvalidState(
                "A recipe must have at least one ingredient.".to_string()
            ))
        );
    }

    #[test]
    fn validation_fails_without_steps() {
        let recipe = recipe_with(
            vec![Ingredient::new(
                "brown sugar".to_string(),
                "1 cup".to_string(),
                Some("dry".to_string()),
            )],
            vec![],
        );

        assert_eq!(
            recipe.validate(),
            Err(CoreError::InvalidState(
                "A recipe must have at least one step.".to_string()
            ))
        );
    }

    #[test]
    fn validation_passes_with_one_ingredient_and_one_step() {
        let recipe = recipe_with(
            vec![Ingredient::new(
                "brown sugar".to_string(),
                "1 cup".to_string(),
                None,
            )],
            vec![Step::new(1, "heat pan".to_string())],
        );

        assert_eq!(recipe.validate(), Ok(()));
    }

    #[test]
    fn average_review_score_is_the_integer_floor() {
        let mut recipe = recipe_with(
            vec![Ingredient::new(
                "brown sugar".to_string(),
                "1 cup".to_string(),
                None,
            )],
            vec![Step::new(1, "heat pan".to_string())],
        );
        recipe.reviews = vec![
            Review::new("a".to_string(), 2, None, None).unwrap(),
            Review::new("b".to_string(), 3, None, None).unwrap(),
        ];

        recipe.compute_average_review_score();

        assert_eq!(recipe.average_review_score, Some(2));
    }

    #[test]
    fn average_review_score_stays_unset_without_reviews() {
        let mut recipe = recipe_with(
            vec![Ingredient::new(
                "brown sugar".to_string(),
                "1 cup".to_string(),
                None,
            )],
            vec![Step::new(1, "heat pan".to_string())],
        );

        recipe.compute_average_review_score();

        assert_eq!(recipe.average_review_score, None);
    }

    #[test]
    fn location_is_base_slash_recipes_slash_id() {
        let mut recipe = recipe_with(
            vec![Ingredient::new(
                "brown sugar".to_string(),
                "1 cup".to_string(),
                None,
            )],
            vec![Step::new(1, "heat pan".to_string())],
        );

        recipe.generate_location("http://localhost:3000");

        assert_eq!(
            recipe.location,
            Some(format!("http://localhost:3000/recipes/{}", recipe.id))
        );
    }
}
