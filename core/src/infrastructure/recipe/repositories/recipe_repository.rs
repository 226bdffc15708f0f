use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::recipe::Recipe, ports::RecipeRepository},
};
use crate::entity::ingredients::{
    ActiveModel as IngredientActiveModel, Column as IngredientColumn, Entity as IngredientEntity,
};
use crate::entity::recipes::{
    ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
};
use crate::entity::reviews::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::entity::steps::{
    ActiveModel as StepActiveModel, Column as StepColumn, Entity as StepEntity,
};
use crate::infrastructure::recipe::mappers::assemble_recipe;

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn hydrate<C>(db: &C, model: crate::entity::recipes::Model) -> Result<Recipe, CoreError>
    where
        C: ConnectionTrait,
    {
        let ingredients = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(model.id))
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let steps = StepEntity::find()
            .filter(StepColumn::RecipeId.eq(model.id))
            .order_by_asc(StepColumn::StepNumber)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch steps: {}", e);
                CoreError::InternalServerError
            })?;

        let reviews = ReviewEntity::find()
            .filter(ReviewColumn::RecipeId.eq(model.id))
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch reviews: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(assemble_recipe(model, ingredients, steps, reviews))
    }

    async fn hydrate_all(&self, models: Vec<crate::entity::recipes::Model>) -> Result<Vec<Recipe>, CoreError> {
        let mut recipes = Vec::with_capacity(models.len());
        for model in models {
            recipes.push(Self::hydrate(&self.db, model).await?);
        }
        Ok(recipes)
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = RecipeEntity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get recipe by id: {}", e);
            CoreError::InternalServerError
        })?;

        match model {
            Some(model) => Ok(Some(Self::hydrate(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, CoreError> {
        let models = RecipeEntity::find()
            .order_by_asc(RecipeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate_all(models).await
    }

    async fn find_by_name_containing(&self, name: String) -> Result<Vec<Recipe>, CoreError> {
        let models = RecipeEntity::find()
            .filter(RecipeColumn::Name.contains(&name))
            .order_by_asc(RecipeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search recipes by name: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate_all(models).await
    }

    async fn find_by_name_and_min_rating(
        &self,
        name: String,
        min_rating: i64,
    ) -> Result<Vec<Recipe>, CoreError> {
        let models = RecipeEntity::find()
            .filter(RecipeColumn::Name.contains(&name))
            .filter(RecipeColumn::DifficultyRating.gte(min_rating as i32))
            .order_by_asc(RecipeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search recipes by name and rating: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate_all(models).await
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        let exists = RecipeEntity::find_by_id(recipe.id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to look up recipe before save: {}", e);
                CoreError::InvalidState(e.to_string())
            })?
            .is_some();

        let model = RecipeActiveModel {
            id: Set(recipe.id),
            name: Set(recipe.name.clone()),
            difficulty_rating: Set(recipe.difficulty_rating),
            minutes_to_make: Set(recipe.minutes_to_make),
            author_id: Set(recipe.author_id),
        };

        let save_result = if exists {
            RecipeEntity::update(model)
                .filter(RecipeColumn::Id.eq(recipe.id))
                .exec(&txn)
                .await
                .map(|_| ())
        } else {
            RecipeEntity::insert(model).exec(&txn).await.map(|_| ())
        };
        save_result.map_err(|e| {
            error!("Failed to save recipe: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        // Child sets are replaced wholesale within the same unit of work.
        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe.id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear ingredients: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        StepEntity::delete_many()
            .filter(StepColumn::RecipeId.eq(recipe.id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear steps: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        ReviewEntity::delete_many()
            .filter(ReviewColumn::RecipeId.eq(recipe.id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear reviews: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;

        if !recipe.ingredients.is_empty() {
            IngredientEntity::insert_many(recipe.ingredients.iter().map(|ingredient| {
                IngredientActiveModel {
                    id: Set(ingredient.id),
                    recipe_id: Set(recipe.id),
                    name: Set(ingredient.name.clone()),
                    amount: Set(ingredient.amount.clone()),
                    state: Set(ingredient.state.clone()),
                }
            }))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert ingredients: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        }

        if !recipe.steps.is_empty() {
            StepEntity::insert_many(recipe.steps.iter().map(|step| StepActiveModel {
                id: Set(step.id),
                recipe_id: Set(recipe.id),
                step_number: Set(step.step_number),
                description: Set(step.description.clone()),
            }))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert steps: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        }

        if !recipe.reviews.is_empty() {
            ReviewEntity::insert_many(recipe.reviews.iter().map(|review| ReviewActiveModel {
                id: Set(review.id),
                recipe_id: Set(Some(recipe.id)),
                username: Set(review.username.clone()),
                rating: Set(review.rating),
                description: Set(review.description.clone()),
            }))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert reviews: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe save: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        Ok(recipe)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredients: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        StepEntity::delete_many()
            .filter(StepColumn::RecipeId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete steps: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        ReviewEntity::delete_many()
            .filter(ReviewColumn::RecipeId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete reviews: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        RecipeEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe delete: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        Ok(())
    }
}
