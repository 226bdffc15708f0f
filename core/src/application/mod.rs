use std::sync::Arc;

use crate::domain::common::{
    LadleConfig, cache::RecipeCache, policies::LadlePolicy, services::Service,
};
use crate::infrastructure::{
    crypto::Argon2HasherRepository,
    db::postgres::{Postgres, PostgresConfig},
    recipe::repositories::PostgresRecipeRepository,
    review::repositories::PostgresReviewRepository,
    user::repository::PostgresUserRepository,
};

pub type LadleService = Service<
    PostgresRecipeRepository,
    PostgresReviewRepository,
    PostgresUserRepository,
    Argon2HasherRepository,
>;

/// Wires the service layer against Postgres. Called once at process start;
/// the cache created here is the process-wide instance.
pub async fn create_service(config: LadleConfig) -> Result<LadleService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let recipe_repository = PostgresRecipeRepository::new(db.clone());
    let review_repository = PostgresReviewRepository::new(db.clone());
    let user_repository = PostgresUserRepository::new(db);

    let policy = LadlePolicy::new(recipe_repository.clone(), review_repository.clone());

    Ok(Service::new(
        recipe_repository,
        review_repository,
        user_repository,
        Argon2HasherRepository::new(),
        policy,
        Arc::new(RecipeCache::new()),
        config.public_url,
    ))
}
