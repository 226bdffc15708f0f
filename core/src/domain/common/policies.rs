use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::ports::RecipeRepository,
    review::ports::ReviewRepository,
};

/// Ownership-based permission evaluator shared by the recipe and review
/// policies. Decisions are computed fresh on every call against the store;
/// they are never cached and never go through the response cache.
#[derive(Debug, Clone)]
pub struct LadlePolicy<R, V> {
    pub recipe_repository: R,
    pub review_repository: V,
}

/// The only target kinds dispatched to the evaluator. Adding a kind forces
/// the match below to be extended rather than falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionTarget {
    Recipe(Uuid),
    Review(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PermissionAction {
    Edit,
    Delete,
}

impl PermissionAction {
    /// Permission tokens must be plain textual action names. Anything else
    /// is a mis-use of the evaluator and fails hard rather than denying.
    fn from_token(token: &str) -> Result<Self, CoreError> {
        if token.eq_ignore_ascii_case("edit") {
            Ok(PermissionAction::Edit)
        } else if token.eq_ignore_ascii_case("delete") {
            Ok(PermissionAction::Delete)
        } else {
            Err(CoreError::InvalidPermission(format!(
                "Cannot evaluate permission token '{token}': only plain action names are supported"
            )))
        }
    }
}

impl<R, V> LadlePolicy<R, V>
where
    R: RecipeRepository,
    V: ReviewRepository,
{
    pub fn new(recipe_repository: R, review_repository: V) -> Self {
        Self {
            recipe_repository,
            review_repository,
        }
    }

    pub(crate) async fn evaluate(
        &self,
        identity: &Identity,
        action: &str,
        target: PermissionTarget,
    ) -> Result<bool, CoreError> {
        let _action = PermissionAction::from_token(action)?;

        // Admins may edit or delete anything.
        if identity.is_admin() {
            return Ok(true);
        }

        match target {
            PermissionTarget::Recipe(recipe_id) => {
                match self.recipe_repository.get_by_id(recipe_id).await? {
                    // No recipe with this id exists. Allow, so the calling
                    // operation runs and surfaces its own not-found error.
                    // Reviews take the other path below; the asymmetry is
                    // deliberate.
                    None => Ok(true),
                    Some(recipe) => Ok(recipe.author_id == Some(identity.user_id)),
                }
            }
            PermissionTarget::Review(review_id) => {
                match self.review_repository.get_by_id(review_id).await? {
                    None => Err(CoreError::NotFound(
                        "The review you are trying to access does not exist".to_string(),
                    )),
                    Some(review) => Ok(review.username == identity.username),
                }
            }
        }
    }
}

/// Turns a policy decision into a `Forbidden` error carrying `message` when
/// access is denied.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}
