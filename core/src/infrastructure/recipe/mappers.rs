use crate::domain::recipe::entities::{ingredient::Ingredient, recipe::Recipe, step::Step};
use crate::domain::review::entities::Review;
use crate::entity::{ingredients, recipes, reviews, steps};

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Ingredient {
            id: model.id,
            name: model.name,
            amount: model.amount,
            state: model.state,
        }
    }
}

impl From<steps::Model> for Step {
    fn from(model: steps::Model) -> Self {
        Step {
            id: model.id,
            step_number: model.step_number,
            description: model.description,
        }
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Review {
            id: model.id,
            username: model.username,
            rating: model.rating,
            description: model.description,
            recipe_id: model.recipe_id,
        }
    }
}

/// Assembles a domain recipe from its row and child rows. Derived fields are
/// left unset; the service computes them per read.
pub fn assemble_recipe(
    model: recipes::Model,
    ingredients: Vec<ingredients::Model>,
    steps: Vec<steps::Model>,
    reviews: Vec<reviews::Model>,
) -> Recipe {
    Recipe {
        id: model.id,
        name: model.name,
        difficulty_rating: model.difficulty_rating,
        minutes_to_make: model.minutes_to_make,
        ingredients: ingredients.into_iter().map(Ingredient::from).collect(),
        steps: steps.into_iter().map(Step::from).collect(),
        reviews: reviews.into_iter().map(Review::from).collect(),
        average_review_score: None,
        location: None,
        author_id: model.author_id,
    }
}
