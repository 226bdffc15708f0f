//! Response cache for recipe reads.
//!
//! One `RecipeCache` instance is owned by the service layer and lives for the
//! life of the process. Two namespaces exist: single recipes keyed by id, and
//! recipe lists keyed by [`ListKey`]. Writes evict only the id namespace; list
//! entries go stale until a later computation overwrites them. The get-all
//! key is additionally single-flight guarded: concurrent misses collapse into
//! one store computation whose result (or error) is shared by all waiters.
//! Errors are broadcast to waiters but never cached.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::recipe::entities::recipe::Recipe;
use uuid::Uuid;

/// Composite key for the list namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKey {
    All,
    Name(String),
    NameAndRating(String, i64),
}

type ListResult = Result<Vec<Recipe>, CoreError>;

#[derive(Debug)]
pub struct RecipeCache {
    recipes_by_id: DashMap<Uuid, Recipe>,
    recipe_lists: DashMap<ListKey, Vec<Recipe>>,
    inflight: DashMap<ListKey, broadcast::Sender<ListResult>>,
}

enum FlightRole {
    Leader(broadcast::Sender<ListResult>),
    Follower(broadcast::Receiver<ListResult>),
}

impl RecipeCache {
    pub fn new() -> Self {
        Self {
            recipes_by_id: DashMap::new(),
            recipe_lists: DashMap::new(),
            inflight: DashMap::new(),
        }
    }

    pub fn get_recipe(&self, id: &Uuid) -> Option<Recipe> {
        self.recipes_by_id.get(id).map(|entry| entry.value().clone())
    }

    pub fn put_recipe(&self, recipe: Recipe) {
        self.recipes_by_id.insert(recipe.id, recipe);
    }

    /// Write-triggered eviction. Only the id namespace is touched; list
    /// entries keep serving whatever was computed before the write.
    pub fn evict_recipe(&self, id: &Uuid) {
        self.recipes_by_id.remove(id);
    }

    pub fn get_list(&self, key: &ListKey) -> Option<Vec<Recipe>> {
        self.recipe_lists.get(key).map(|entry| entry.value().clone())
    }

    pub fn put_list(&self, key: ListKey, recipes: Vec<Recipe>) {
        self.recipe_lists.insert(key, recipes);
    }

    /// Single-flight read of the get-all key.
    ///
    /// The first caller to miss becomes the leader and runs `load`; callers
    /// arriving while the load is in flight subscribe to the leader's result
    /// instead of hitting the store again. A successful result is cached
    /// under [`ListKey::All`] before being broadcast.
    pub async fn get_or_load_all<F, Fut>(&self, load: F) -> ListResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ListResult>,
    {
        if let Some(hit) = self.recipe_lists.get(&ListKey::All) {
            return Ok(hit.value().clone());
        }

        // The entry handle must be dropped before any await point.
        let role = match self.inflight.entry(ListKey::All) {
            Entry::Occupied(entry) => FlightRole::Follower(entry.get().subscribe()),
            Entry::Vacant(entry) => {
                let (tx, _rx) = broadcast::channel(1);
                entry.insert(tx.clone());
                FlightRole::Leader(tx)
            }
        };

        match role {
            FlightRole::Follower(mut rx) => {
                debug!("coalescing concurrent get-all cache miss");
                match rx.recv().await {
                    Ok(result) => result,
                    // Leader dropped without broadcasting; fall back to our
                    // own load without touching the in-flight slot.
                    Err(_) => load().await,
                }
            }
            FlightRole::Leader(tx) => {
                let result = load().await;

                if let Ok(recipes) = &result {
                    self.recipe_lists.insert(ListKey::All, recipes.clone());
                }

                let _ = tx.send(result.clone());
                self.inflight.remove(&ListKey::All);

                result
            }
        }
    }
}

impl Default for RecipeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::sample_recipe;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn eviction_only_touches_the_id_namespace() {
        let cache = RecipeCache::new();
        let recipe = sample_recipe("caramel in a pan");

        cache.put_recipe(recipe.clone());
        cache.put_list(ListKey::All, vec![recipe.clone()]);
        cache.put_list(ListKey::Name("caramel".to_string()), vec![recipe.clone()]);

        cache.evict_recipe(&recipe.id);

        assert!(cache.get_recipe(&recipe.id).is_none());
        assert_eq!(cache.get_list(&ListKey::All), Some(vec![recipe.clone()]));
        assert_eq!(
            cache.get_list(&ListKey::Name("caramel".to_string())),
            Some(vec![recipe])
        );
    }

    #[tokio::test]
    async fn concurrent_get_all_misses_share_one_load() {
        let cache = Arc::new(RecipeCache::new());
        let loads = Arc::new(AtomicUsize::new(0));
        let recipe = sample_recipe("test recipe");

        let load = |cache: Arc<RecipeCache>, loads: Arc<AtomicUsize>, recipe: Recipe| async move {
            cache
                .get_or_load_all(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                    Ok(vec![recipe])
                })
                .await
        };

        let (a, b, c) = tokio::join!(
            load(cache.clone(), loads.clone(), recipe.clone()),
            load(cache.clone(), loads.clone(), recipe.clone()),
            load(cache.clone(), loads.clone(), recipe.clone()),
        );

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[tokio::test]
    async fn get_all_errors_are_shared_but_not_cached() {
        let cache = RecipeCache::new();

        let miss: ListResult = cache
            .get_or_load_all(|| async { Err(CoreError::NotFound("empty".to_string())) })
            .await;
        assert!(miss.is_err());

        // The error was not cached; the next call computes again.
        let recipe = sample_recipe("test recipe");
        let hit = cache
            .get_or_load_all(|| async { Ok(vec![recipe.clone()]) })
            .await;
        assert_eq!(hit, Ok(vec![recipe]));
    }
}
