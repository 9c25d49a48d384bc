pub mod favorites;
pub mod users;
