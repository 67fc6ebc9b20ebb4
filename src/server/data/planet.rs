//! Planet data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::planet::{CreatePlanetParams, Planet};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every planet ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Checks whether a planet with exactly this name is stored.
    ///
    /// Uses a `COUNT` query so no rows are loaded.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a planet and returns it with its generated id.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters, only `name` is guaranteed
    ///
    /// # Returns
    /// - `Ok(Planet)` - The stored planet
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            diameter: ActiveValue::Set(params.diameter),
            rotation_period: ActiveValue::Set(params.rotation_period),
            orbital_period: ActiveValue::Set(params.orbital_period),
            gravity: ActiveValue::Set(params.gravity),
            population: ActiveValue::Set(params.population),
            climate: ActiveValue::Set(params.climate),
            terrain: ActiveValue::Set(params.terrain),
            surface_water: ActiveValue::Set(params.surface_water),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Deletes a planet by id. Favorite rows referencing it cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the id is unknown
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Planet::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
