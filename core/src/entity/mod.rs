pub mod ingredients;
pub mod recipes;
pub mod reviews;
pub mod roles;
pub mod steps;
pub mod user_meta;
pub mod users;
