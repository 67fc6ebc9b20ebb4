//! Vehicle data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vehicle::{CreateVehicleParams, Vehicle};

/// Repository providing database operations for vehicles.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    /// Creates a new VehicleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every vehicle ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let vehicles = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Finds a vehicle by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Vehicle found
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Checks whether a vehicle with exactly this name is stored.
    ///
    /// Uses a `COUNT` query so no rows are loaded.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a vehicle and returns it with its generated id.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters, only `name` is guaranteed
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The stored vehicle
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            vehicle_class: ActiveValue::Set(params.vehicle_class),
            manufacturer: ActiveValue::Set(params.manufacturer),
            cost_in_credits: ActiveValue::Set(params.cost_in_credits),
            length: ActiveValue::Set(params.length),
            crew: ActiveValue::Set(params.crew),
            passengers: ActiveValue::Set(params.passengers),
            max_atmosphering_speed: ActiveValue::Set(params.max_atmosphering_speed),
            cargo_capacity: ActiveValue::Set(params.cargo_capacity),
            consumables: ActiveValue::Set(params.consumables),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    /// Deletes a vehicle by id. Favorite rows referencing it cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the id is unknown
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
