//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with name `"Vehicle {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Vehicle {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(Some("Digger Crawler".to_string())),
            vehicle_class: ActiveValue::Set(Some("wheeled".to_string())),
            manufacturer: ActiveValue::Set(Some("Corellia Mining Corporation".to_string())),
            cost_in_credits: ActiveValue::Set(Some(150_000)),
            length: ActiveValue::Set(Some(36.8)),
            crew: ActiveValue::Set(Some(46)),
            passengers: ActiveValue::Set(Some(30)),
            max_atmosphering_speed: ActiveValue::Set(Some(30.0)),
            cargo_capacity: ActiveValue::Set(Some(50_000.0)),
            consumables: ActiveValue::Set(Some("2 months".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}

/// Creates a vehicle with a specific name.
pub async fn create_vehicle_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).name(name).build().await
}
