pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
pub mod vehicles;

pub use favorites::Entity as Favorites;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
pub use vehicles::Entity as Vehicles;
