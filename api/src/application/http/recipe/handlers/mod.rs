pub mod create_recipe;
pub mod delete_recipe;
pub mod get_all_recipes;
pub mod get_recipe;
pub mod search_recipes;
pub mod search_recipes_by_rating;
pub mod update_recipe;
