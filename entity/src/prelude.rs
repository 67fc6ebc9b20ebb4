pub use super::favorite_people::Entity as FavoritePeople;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_vehicle::Entity as FavoriteVehicle;
pub use super::people::Entity as People;
pub use super::planet::Entity as Planet;
pub use super::token_blocked_list::Entity as TokenBlockedList;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
