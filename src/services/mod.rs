pub mod admin_service;
pub mod catalog_service;
pub mod favorite_service;
pub mod user_service;
