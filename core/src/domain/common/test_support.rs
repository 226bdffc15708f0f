//! In-memory collaborators for service tests. The recipe and review fakes
//! share one backing store so nested review writes are visible through the
//! review repository, the way rows in the relational store would be.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        cache::RecipeCache, entities::app_errors::CoreError, policies::LadlePolicy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    recipe::{
        entities::recipe::{Recipe, RecipeConfig},
        entities::{ingredient::Ingredient, step::Step},
        ports::RecipeRepository,
        value_objects::{CreateRecipeInput, IngredientInput, ReviewInput, StepInput},
    },
    review::{entities::Review, ports::ReviewRepository},
    user::{
        entities::{RoleName, User},
        ports::UserRepository,
    },
};

#[derive(Debug, Default)]
struct InMemoryStore {
    recipes: HashMap<Uuid, Recipe>,
    reviews: HashMap<Uuid, Review>,
    users: HashMap<Uuid, User>,
}

#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    store: Arc<Mutex<InMemoryStore>>,
    pub save_calls: Arc<AtomicUsize>,
    pub find_all_calls: Arc<AtomicUsize>,
    find_all_delay: Arc<Mutex<Option<Duration>>>,
}

impl InMemoryRecipeRepository {
    pub fn set_find_all_delay(&self, delay: Duration) {
        *self.find_all_delay.lock().unwrap() = Some(delay);
    }

    pub fn seed_recipe(&self, recipe: Recipe) {
        let mut store = self.store.lock().unwrap();
        sync_reviews(&mut store, &recipe);
        store.recipes.insert(recipe.id, recipe);
    }

    fn hydrate(store: &InMemoryStore, recipe: &Recipe) -> Recipe {
        let mut hydrated = recipe.clone();
        hydrated.reviews = store
            .reviews
            .values()
            .filter(|review| review.recipe_id == Some(recipe.id))
            .cloned()
            .collect();
        hydrated.reviews.sort_by_key(|review| review.id);
        hydrated
    }
}

fn sync_reviews(store: &mut InMemoryStore, recipe: &Recipe) {
    store
        .reviews
        .retain(|_, review| review.recipe_id != Some(recipe.id));
    for review in &recipe.reviews {
        let mut row = review.clone();
        row.recipe_id = Some(recipe.id);
        store.reviews.insert(row.id, row);
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let store = self.store.lock().unwrap();
        Ok(store.recipes.get(&id).map(|recipe| Self::hydrate(&store, recipe)))
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, CoreError> {
        let delay = *self.find_all_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);

        let store = self.store.lock().unwrap();
        let mut recipes: Vec<Recipe> = store
            .recipes
            .values()
            .map(|recipe| Self::hydrate(&store, recipe))
            .collect();
        recipes.sort_by_key(|recipe| recipe.id);
        Ok(recipes)
    }

    async fn find_by_name_containing(&self, name: String) -> Result<Vec<Recipe>, CoreError> {
        let store = self.store.lock().unwrap();
        let mut recipes: Vec<Recipe> = store
            .recipes
            .values()
            .filter(|recipe| recipe.name.contains(&name))
            .map(|recipe| Self::hydrate(&store, recipe))
            .collect();
        recipes.sort_by_key(|recipe| recipe.id);
        Ok(recipes)
    }

    async fn find_by_name_and_min_rating(
        &self,
        name: String,
        min_rating: i64,
    ) -> Result<Vec<Recipe>, CoreError> {
        let store = self.store.lock().unwrap();
        let mut recipes: Vec<Recipe> = store
            .recipes
            .values()
            .filter(|recipe| {
                recipe.name.contains(&name) && recipe.difficulty_rating as i64 >= min_rating
            })
            .map(|recipe| Self::hydrate(&store, recipe))
            .collect();
        recipes.sort_by_key(|recipe| recipe.id);
        Ok(recipes)
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        sync_reviews(&mut store, &recipe);
        store.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        let mut store = self.store.lock().unwrap();
        store.recipes.remove(&id);
        store.reviews.retain(|_, review| review.recipe_id != Some(id));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryReviewRepository {
    store: Arc<Mutex<InMemoryStore>>,
}

impl InMemoryReviewRepository {
    pub fn seed_review(&self, review: Review) {
        self.store.lock().unwrap().reviews.insert(review.id, review);
    }
}

impl ReviewRepository for InMemoryReviewRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Review>, CoreError> {
        Ok(self.store.lock().unwrap().reviews.get(&id).cloned())
    }

    async fn find_by_username(&self, username: String) -> Result<Vec<Review>, CoreError> {
        let store = self.store.lock().unwrap();
        let mut reviews: Vec<Review> = store
            .reviews
            .values()
            .filter(|review| review.username == username)
            .cloned()
            .collect();
        reviews.sort_by_key(|review| review.id);
        Ok(reviews)
    }

    async fn save(&self, review: Review) -> Result<Review, CoreError> {
        self.store
            .lock()
            .unwrap()
            .reviews
            .insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        self.store.lock().unwrap().reviews.remove(&id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<Mutex<InMemoryStore>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.store.lock().unwrap().users.get(&id).cloned())
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let mut store = self.store.lock().unwrap();
        let collision = store.users.values().any(|existing| {
            existing.username == user.username || existing.user_meta.email == user.user_meta.email
        });
        if collision {
            return Err(CoreError::InvalidState(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }
        store.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct PlainHasher;

impl HasherRepository for PlainHasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        Ok(format!("plain${password}"))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, CoreError> {
        Ok(hash == format!("plain${password}"))
    }
}

pub fn in_memory_repositories() -> (
    InMemoryRecipeRepository,
    InMemoryReviewRepository,
    InMemoryUserRepository,
) {
    let store = Arc::new(Mutex::new(InMemoryStore::default()));
    (
        InMemoryRecipeRepository {
            store: store.clone(),
            save_calls: Arc::new(AtomicUsize::new(0)),
            find_all_calls: Arc::new(AtomicUsize::new(0)),
            find_all_delay: Arc::new(Mutex::new(None)),
        },
        InMemoryReviewRepository {
            store: store.clone(),
        },
        InMemoryUserRepository { store },
    )
}

pub fn service_with_in_memory_repositories() -> Service<
    InMemoryRecipeRepository,
    InMemoryReviewRepository,
    InMemoryUserRepository,
    PlainHasher,
> {
    let (recipes, reviews, users) = in_memory_repositories();
    let policy = LadlePolicy::new(recipes.clone(), reviews.clone());

    Service::new(
        recipes,
        reviews,
        users,
        PlainHasher,
        policy,
        Arc::new(RecipeCache::new()),
        "http://localhost:3000".to_string(),
    )
}

pub fn user_identity(username: &str) -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        username: username.to_string(),
        roles: vec![RoleName::User],
    }
}

pub fn admin_identity(username: &str) -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        username: username.to_string(),
        roles: vec![RoleName::User, RoleName::Admin],
    }
}

pub fn sample_recipe(name: &str) -> Recipe {
    Recipe::new(RecipeConfig {
        name: name.to_string(),
        difficulty_rating: 5,
        minutes_to_make: 2,
        ingredients: vec![Ingredient::new(
            "water".to_string(),
            "1 cup".to_string(),
            None,
        )],
        steps: vec![Step::new(1, "stir".to_string())],
        reviews: vec![],
        author_id: None,
    })
}

pub fn sample_review(username: &str, rating: i32) -> Review {
    Review::new(username.to_string(), rating, None, None).expect("rating in range")
}

pub fn create_input(
    name: &str,
    ingredients: Vec<(&str, &str, Option<&str>)>,
    steps: Vec<(i32, &str)>,
    reviews: Vec<(&str, i32, Option<&str>)>,
) -> CreateRecipeInput {
    CreateRecipeInput {
        name: name.to_string(),
        difficulty_rating: 5,
        minutes_to_make: 2,
        ingredients: ingredients
            .into_iter()
            .map(|(name, amount, state)| IngredientInput {
                name: name.to_string(),
                amount: amount.to_string(),
                state: state.map(str::to_string),
            })
            .collect(),
        steps: steps
            .into_iter()
            .map(|(step_number, description)| StepInput {
                step_number,
                description: description.to_string(),
            })
            .collect(),
        reviews: reviews
            .into_iter()
            .map(|(username, rating, description)| ReviewInput {
                username: username.to_string(),
                rating,
                description: description.map(str::to_string),
            })
            .collect(),
    }
}
