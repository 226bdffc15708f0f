use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::recipe::Recipe,
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
};

pub trait RecipeService: Send + Sync {
    /// Creation is open to anonymous callers; an authenticated identity, if
    /// present, becomes the recipe's author.
    fn create_recipe(
        &self,
        identity: Option<Identity>,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_all_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn search_recipes_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn search_recipes_by_name_and_rating(
        &self,
        name: String,
        min_rating: i64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe_by_id(
        &self,
        identity: Identity,
        id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn find_by_name_containing(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn find_by_name_and_min_rating(
        &self,
        name: String,
        min_rating: i64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Upsert. The recipe row and its ingredient/step/review sets are written
    /// as one unit of work; child sets are replaced wholesale.
    fn save(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_by_id(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait RecipePolicy: Send + Sync {
    fn can_edit_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
