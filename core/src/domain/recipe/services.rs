use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        cache::ListKey,
        entities::app_errors::CoreError,
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    recipe::{
        entities::{ingredient::Ingredient, recipe::Recipe, recipe::RecipeConfig, step::Step},
        ports::{RecipePolicy, RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, ReviewInput, UpdateRecipeInput},
    },
    review::{entities::Review, ports::ReviewRepository},
    user::ports::UserRepository,
};

impl<R, V, U, H> Service<R, V, U, H>
where
    R: RecipeRepository,
    V: ReviewRepository,
    U: UserRepository,
    H: HasherRepository,
{
    fn assemble_reviews(
        reviews: Vec<ReviewInput>,
        recipe_id: Option<Uuid>,
    ) -> Result<Vec<Review>, CoreError> {
        let mut assembled = Vec::with_capacity(reviews.len());
        for review in reviews {
            assembled.push(Review::new(
                review.username,
                review.rating,
                review.description,
                recipe_id,
            )?);
        }
        Ok(assembled)
    }

    /// Persists a recipe and evicts its id from the cache. Shared by the
    /// update operation (forced id check) and by review posting (the recipe
    /// was loaded a moment ago, no re-check).
    ///
    /// No lock spans the caller's permission check and this write; ownership
    /// changing in that window is an accepted race.
    pub(crate) async fn store_recipe(
        &self,
        mut recipe: Recipe,
        force_id_check: bool,
    ) -> Result<Recipe, CoreError> {
        if force_id_check {
            match self.get_recipe_by_id(recipe.id).await {
                Ok(existing) => {
                    if recipe.author_id.is_none() {
                        recipe.author_id = existing.author_id;
                    }
                }
                Err(CoreError::NotFound(_)) => {
                    return Err(CoreError::NotFound(
                        "The recipe you passed in did not have an ID found in the database. \
                         Double check that it is correct. Or maybe you meant to POST a recipe \
                         not PATCH one."
                            .to_string(),
                    ));
                }
                Err(e) => return Err(e),
            }
        }

        recipe.validate()?;

        let mut saved = self.recipe_repository.save(recipe).await?;
        self.recipe_cache.evict_recipe(&saved.id);

        saved.generate_location(&self.public_url);
        Ok(saved)
    }
}

impl<R, V, U, H> RecipeService for Service<R, V, U, H>
where
    R: RecipeRepository,
    V: ReviewRepository,
    U: UserRepository,
    H: HasherRepository,
{
    async fn create_recipe(
        &self,
        identity: Option<Identity>,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let ingredients = input
            .ingredients
            .into_iter()
            .map(|ingredient| Ingredient::new(ingredient.name, ingredient.amount, ingredient.state))
            .collect();
        let steps = input
            .steps
            .into_iter()
            .map(|step| Step::new(step.step_number, step.description))
            .collect();
        let reviews = Self::assemble_reviews(input.reviews, None)?;

        let recipe = Recipe::new(RecipeConfig {
            name: input.name,
            difficulty_rating: input.difficulty_rating,
            minutes_to_make: input.minutes_to_make,
            ingredients,
            steps,
            reviews,
            author_id: identity.map(|identity| identity.user_id),
        });

        recipe.validate()?;

        let mut saved = self.recipe_repository.save(recipe).await?;
        self.recipe_cache.evict_recipe(&saved.id);

        saved.generate_location(&self.public_url);
        Ok(saved)
    }

    async fn get_recipe_by_id(&self, id: Uuid) -> Result<Recipe, CoreError> {
        if let Some(recipe) = self.recipe_cache.get_recipe(&id) {
            return Ok(recipe);
        }

        let mut recipe = self
            .recipe_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No recipe with ID {id} could be found."))
            })?;

        recipe.compute_average_review_score();
        recipe.generate_location(&self.public_url);

        self.recipe_cache.put_recipe(recipe.clone());
        Ok(recipe)
    }

    async fn get_all_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_cache
            .get_or_load_all(|| async {
                let recipes = self.recipe_repository.find_all().await?;

                if recipes.is_empty() {
                    return Err(CoreError::NotFound(
                        "There are no recipes yet :( feel free to add one though".to_string(),
                    ));
                }

                Ok(recipes)
            })
            .await
    }

    async fn search_recipes_by_name(&self, name: String) -> Result<Vec<Recipe>, CoreError> {
        let key = ListKey::Name(name.clone());
        if let Some(recipes) = self.recipe_cache.get_list(&key) {
            return Ok(recipes);
        }

        let mut recipes = self.recipe_repository.find_by_name_containing(name).await?;

        if recipes.is_empty() {
            return Err(CoreError::NotFound(
                "No recipes could be found with that name.".to_string(),
            ));
        }

        for recipe in &mut recipes {
            recipe.generate_location(&self.public_url);
        }

        self.recipe_cache.put_list(key, recipes.clone());
        Ok(recipes)
    }

    async fn search_recipes_by_name_and_rating(
        &self,
        name: String,
        min_rating: i64,
    ) -> Result<Vec<Recipe>, CoreError> {
        let key = ListKey::NameAndRating(name.clone(), min_rating);
        if let Some(recipes) = self.recipe_cache.get_list(&key) {
            return Ok(recipes);
        }

        let mut recipes = self
            .recipe_repository
            .find_by_name_and_min_rating(name, min_rating)
            .await?;

        if recipes.is_empty() {
            return Err(CoreError::NotFound(
                "No recipes could be found with that name.".to_string(),
            ));
        }

        for recipe in &mut recipes {
            recipe.generate_location(&self.public_url);
        }

        self.recipe_cache.put_list(key, recipes.clone());
        Ok(recipes)
    }

    async fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        ensure_policy(
            self.policy.can_edit_recipe(identity, input.id).await,
            "You do not have permission to edit this recipe",
        )?;

        let ingredients = input
            .ingredients
            .into_iter()
            .map(|ingredient| Ingredient::new(ingredient.name, ingredient.amount, ingredient.state))
            .collect();
        let steps = input
            .steps
            .into_iter()
            .map(|step| Step::new(step.step_number, step.description))
            .collect();
        let reviews = Self::assemble_reviews(input.reviews, Some(input.id))?;

        let mut recipe = Recipe::new(RecipeConfig {
            name: input.name,
            difficulty_rating: input.difficulty_rating,
            minutes_to_make: input.minutes_to_make,
            ingredients,
            steps,
            reviews,
            author_id: None,
        });
        recipe.id = input.id;

        self.store_recipe(recipe, true).await
    }

    async fn delete_recipe_by_id(&self, identity: Identity, id: Uuid) -> Result<Recipe, CoreError> {
        ensure_policy(
            self.policy.can_delete_recipe(identity, id).await,
            "You do not have permission to delete this recipe",
        )?;

        let recipe = match self.get_recipe_by_id(id).await {
            Ok(recipe) => recipe,
            Err(CoreError::NotFound(message)) => {
                return Err(CoreError::NotFound(format!("{message} Could not delete.")));
            }
            Err(e) => return Err(e),
        };

        self.recipe_repository.delete_by_id(id).await?;
        self.recipe_cache.evict_recipe(&id);

        Ok(recipe)
    }
}
