//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    population: Option<i64>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with name `"Planet {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Planet {}", next_id()),
            population: Some(200_000),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn population(mut self, population: Option<i64>) -> Self {
        self.population = population;
        self
    }

    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            diameter: ActiveValue::Set(Some(10465.0)),
            rotation_period: ActiveValue::Set(Some(23.0)),
            orbital_period: ActiveValue::Set(Some(304.0)),
            gravity: ActiveValue::Set(Some("1 standard".to_string())),
            population: ActiveValue::Set(self.population),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set(Some("desert".to_string())),
            surface_water: ActiveValue::Set(Some(1)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}

/// Creates a planet with a specific name.
pub async fn create_planet_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).name(name).build().await
}
