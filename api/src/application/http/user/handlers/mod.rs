pub mod get_user;
pub mod register_user;
