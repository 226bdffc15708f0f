pub mod delete_review;
pub mod get_review;
pub mod get_reviews_by_recipe;
pub mod get_reviews_by_username;
pub mod post_review;
pub mod update_review;
