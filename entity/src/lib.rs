//! SeaORM entity definitions for every table in the catalog database.

pub mod prelude;

pub mod favorite_people;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod people;
pub mod planet;
pub mod token_blocked_list;
pub mod user;
pub mod vehicle;
