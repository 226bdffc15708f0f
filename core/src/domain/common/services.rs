use std::sync::Arc;

use crate::domain::common::{cache::RecipeCache, policies::LadlePolicy};

/// Assembled service layer. One instance is built at process start via
/// [`crate::application::create_service`] and shared (cloned) across request
/// handlers; the cache is the process-wide instance behind the `Arc`.
#[derive(Debug, Clone)]
pub struct Service<R, V, U, H> {
    pub recipe_repository: R,
    pub review_repository: V,
    pub user_repository: U,
    pub hasher_repository: H,
    pub policy: LadlePolicy<R, V>,
    pub recipe_cache: Arc<RecipeCache>,
    pub public_url: String,
}

impl<R, V, U, H> Service<R, V, U, H> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        recipe_repository: R,
        review_repository: V,
        user_repository: U,
        hasher_repository: H,
        policy: LadlePolicy<R, V>,
        recipe_cache: Arc<RecipeCache>,
        public_url: String,
    ) -> Self {
        Self {
            recipe_repository,
            review_repository,
            user_repository,
            hasher_repository,
            policy,
            recipe_cache,
            public_url,
        }
    }
}
