//! Factories for the three favorite join tables.
//!
//! The referenced user and catalog rows must already exist; SQLite enforces the
//! foreign keys.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to a character.
pub async fn create_favorite_people(
    db: &DatabaseConnection,
    user_id: i32,
    people_id: i32,
) -> Result<entity::favorite_people::Model, DbErr> {
    entity::favorite_people::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        people_id: ActiveValue::Set(people_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a planet.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a vehicle.
pub async fn create_favorite_vehicle(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::favorite_vehicle::Model, DbErr> {
    entity::favorite_vehicle::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
