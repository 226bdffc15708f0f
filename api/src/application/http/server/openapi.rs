use crate::application::http::{
    recipe::router::RecipeApiDoc, review::router::ReviewApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ladle API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/reviews", api = ReviewApiDoc),
        (path = "/users", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
